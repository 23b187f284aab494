use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use dojo::api::ApiError;
use dojo::client::{PlaceholderHandshake, ProviderHandshake};
use dojo::data::{LoginRequest, OAuthProvider, RegisterRequest};
use dojo::load::InFlight;
use dojo::log::warn;

use crate::components::style::{INPUT_CLASSES, PRIMARY_BUTTON, TEXT_SECONDARY};
use crate::providers::{use_api, use_session, use_theme};
use crate::routes::Route;

const GENERIC_FAILURE: &str = "Authentication failed. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Form {
    email: String,
    password: String,
    username: String,
    full_name: String,
}

fn failure_message(err: &ApiError) -> String {
    err.detail()
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[derive(Properties, PartialEq)]
struct FieldProps {
    id: AttrValue,
    label: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    kind: AttrValue,
    value: String,
    on_input: Callback<String>,
}

#[function_component(Field)]
fn field(props: &FieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };

    html! {
        <div>
            <label for={props.id.clone()} class={classes!("block", "text-sm", "font-medium", "mb-1", TEXT_SECONDARY)}>
                { &props.label }
            </label>
            <input
                id={props.id.clone()}
                type={props.kind.clone()}
                class={INPUT_CLASSES}
                value={props.value.clone()}
                required=true
                {oninput}
            />
        </div>
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_api();
    let session = use_session();
    let theme = use_theme();
    let navigator = use_navigator();

    let mode = use_state(|| Mode::SignIn);
    let form = use_state(Form::default);
    let loading = use_state(|| false);
    let in_flight = use_memo((), |_| InFlight::new());
    let error_msg = use_state(|| None::<String>);

    let update = |apply: fn(&mut Form, String)| {
        let form = form.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
            error_msg.set(None);
        })
    };

    // Shared tail of every sign-in path: store the session, then go to the dashboard.
    let on_authenticated = {
        let login = session.login.clone();
        let navigator = navigator.clone();
        Callback::from(move |response: dojo::data::AuthResponse| {
            login.emit(response.into_parts());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        })
    };

    let on_submit = {
        let api = api.clone();
        let mode = mode.clone();
        let form = form.clone();
        let loading = loading.clone();
        let in_flight = in_flight.clone();
        let error_msg = error_msg.clone();
        let on_authenticated = on_authenticated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !in_flight.try_start() {
                return;
            }
            loading.set(true);
            error_msg.set(None);

            let api = api.clone();
            let mode = *mode;
            let form = (*form).clone();
            let loading = loading.clone();
            let in_flight = in_flight.clone();
            let error_msg = error_msg.clone();
            let on_authenticated = on_authenticated.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let response = match mode {
                    Mode::SignIn => {
                        api.login(&LoginRequest {
                            email: form.email,
                            password: form.password,
                        })
                        .await
                    }
                    Mode::Register => {
                        api.register(&RegisterRequest {
                            email: form.email,
                            password: form.password,
                            username: form.username,
                            full_name: form.full_name,
                        })
                        .await
                    }
                };

                loading.set(false);
                in_flight.finish();
                match response {
                    Ok(response) => on_authenticated.emit(response),
                    Err(err) => {
                        warn!(%err, "Authentication failed");
                        error_msg.set(Some(failure_message(&err)));
                    }
                }
            });
        })
    };

    let on_provider = {
        let api = api.clone();
        let loading = loading.clone();
        let in_flight = in_flight.clone();
        let error_msg = error_msg.clone();
        let on_authenticated = on_authenticated.clone();
        Callback::from(move |provider: OAuthProvider| {
            if !in_flight.try_start() {
                return;
            }
            loading.set(true);
            error_msg.set(None);

            let api = api.clone();
            let loading = loading.clone();
            let in_flight = in_flight.clone();
            let error_msg = error_msg.clone();
            let on_authenticated = on_authenticated.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match PlaceholderHandshake::new().token(provider).await {
                    Ok(token) => api
                        .provider_login(provider, token)
                        .await
                        .map_err(|err| failure_message(&err)),
                    Err(err) => Err(err.to_string()),
                };

                loading.set(false);
                in_flight.finish();
                match outcome {
                    Ok(response) => on_authenticated.emit(response),
                    Err(message) => {
                        warn!(%provider, reason = %message, "Provider sign-in failed");
                        error_msg.set(Some(message));
                    }
                }
            });
        })
    };

    let on_toggle_mode = {
        let mode = mode.clone();
        let error_msg = error_msg.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                Mode::SignIn => Mode::Register,
                Mode::Register => Mode::SignIn,
            });
            error_msg.set(None);
        })
    };

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let registering = *mode == Mode::Register;

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 dark:bg-gray-900 px-4">
            <button
                class="fixed top-4 right-4 p-2 rounded-md text-gray-600 hover:bg-gray-200 dark:text-gray-300 dark:hover:bg-gray-800"
                title="Toggle dark mode"
                onclick={on_toggle_theme}
            >
                { if theme.theme.is_dark() { "☀️" } else { "🌙" } }
            </button>

            <div class="w-full max-w-md bg-white dark:bg-gray-800 rounded-xl shadow-lg p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-green-600 dark:text-green-400">{ "</> Dojo" }</h1>
                    <p class={classes!("mt-2", TEXT_SECONDARY)}>
                        { if registering { "Create your account" } else { "Sign in to keep practicing" } }
                    </p>
                </div>

                <form class="space-y-4" onsubmit={on_submit}>
                    if registering {
                        <Field id="full_name" label="Full name" value={form.full_name.clone()} on_input={update(|f, v| f.full_name = v)} />
                        <Field id="username" label="Username" value={form.username.clone()} on_input={update(|f, v| f.username = v)} />
                    }
                    <Field id="email" label="Email" kind="email" value={form.email.clone()} on_input={update(|f, v| f.email = v)} />
                    <Field id="password" label="Password" kind="password" value={form.password.clone()} on_input={update(|f, v| f.password = v)} />

                    if let Some(error) = error_msg.as_ref() {
                        <div class="p-3 bg-red-100 text-red-700 dark:bg-red-900/40 dark:text-red-300 rounded-md text-sm">
                            { error }
                        </div>
                    }

                    <button type="submit" class={classes!(PRIMARY_BUTTON, "w-full")} disabled={*loading}>
                        {
                            match (*loading, registering) {
                                (true, _) => "Please wait...",
                                (false, true) => "Create account",
                                (false, false) => "Sign in",
                            }
                        }
                    </button>
                </form>

                <div class="my-6 flex items-center gap-3">
                    <div class="flex-1 h-px bg-gray-200 dark:bg-gray-700"></div>
                    <span class={classes!("text-xs", TEXT_SECONDARY)}>{ "or continue with" }</span>
                    <div class="flex-1 h-px bg-gray-200 dark:bg-gray-700"></div>
                </div>

                <div class="grid grid-cols-3 gap-3">
                    { for OAuthProvider::ALL.iter().map(|&provider| {
                        let onclick = {
                            let on_provider = on_provider.clone();
                            Callback::from(move |_: MouseEvent| on_provider.emit(provider))
                        };
                        html! {
                            <button
                                key={provider.slug()}
                                type="button"
                                class="px-3 py-2 border border-gray-300 dark:border-gray-600 rounded-md text-sm font-medium text-gray-700 dark:text-gray-200 hover:bg-gray-50 dark:hover:bg-gray-700 disabled:opacity-50"
                                disabled={*loading}
                                {onclick}
                            >
                                { provider.label() }
                            </button>
                        }
                    })}
                </div>

                <p class={classes!("mt-6", "text-center", "text-sm", TEXT_SECONDARY)}>
                    { if registering { "Already have an account? " } else { "New here? " } }
                    <button class="text-green-600 dark:text-green-400 font-medium hover:underline" onclick={on_toggle_mode}>
                        { if registering { "Sign in" } else { "Create an account" } }
                    </button>
                </p>
            </div>
        </div>
    }
}
