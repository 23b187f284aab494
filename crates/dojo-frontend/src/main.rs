mod components;
mod hooks;
mod pages;
mod providers;
mod routes;
mod storage;

use yew::prelude::*;
use yew_router::prelude::*;

use providers::{ApiProvider, ConfettiProvider, SessionProvider, ThemeProvider};
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <ApiProvider>
                <SessionProvider>
                    <ConfettiProvider>
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    </ConfettiProvider>
                </SessionProvider>
            </ApiProvider>
        </ThemeProvider>
    }
}

fn main() {
    dojo::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
