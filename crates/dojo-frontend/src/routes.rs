use dojo::routing::{Page, Resolution, resolve};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Loading;
use crate::pages::{DashboardShell, LoginPage};
use crate::providers::use_session;

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Root => Page::Root,
            Route::Login => Page::Login,
            Route::Dashboard => Page::Dashboard,
            Route::NotFound => Page::NotFound,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Root => Route::Root,
            Page::Login => Route::Login,
            Page::Dashboard => Route::Dashboard,
            Page::NotFound => Route::NotFound,
        }
    }
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    route: Route,
}

/// Renders `route` only once the session allows it.
#[function_component(Guard)]
fn guard(props: &GuardProps) -> Html {
    let session = use_session();

    match resolve(props.route.into(), &session.state) {
        Resolution::Wait => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-100 dark:bg-gray-900">
                <Loading />
            </div>
        },
        Resolution::Redirect(page) => html! { <Redirect<Route> to={Route::from(page)} /> },
        Resolution::Render(Page::Login) => html! { <LoginPage /> },
        Resolution::Render(Page::Dashboard) => html! { <DashboardShell /> },
        Resolution::Render(Page::Root | Page::NotFound) => html! { <NotFound /> },
    }
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-100 dark:bg-gray-900">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-gray-100">{ "404" }</h1>
            <p class="text-gray-600 dark:text-gray-400">{ "This page does not exist." }</p>
            <Link<Route> to={Route::Root} classes="text-green-600 dark:text-green-400 hover:underline">
                { "Back to safety" }
            </Link<Route>>
        </div>
    }
}

pub fn switch(route: Route) -> Html {
    html! { <Guard {route} /> }
}
