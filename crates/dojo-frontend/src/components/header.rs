use yew::prelude::*;

use crate::providers::{use_session, use_theme};

/// Greeting, points and streak of the signed-in user, plus the theme toggle and logout.
#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let theme = use_theme();

    let Some(identity) = session.identity() else {
        return html! {};
    };

    let on_toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    let on_logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    html! {
        <header class="flex items-center justify-between px-8 py-4 bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
            <div>
                <h1 class="text-lg font-semibold text-gray-900 dark:text-gray-100">
                    { format!("Welcome back, {}", identity.display_name()) }
                </h1>
                <p class="text-sm text-gray-500 dark:text-gray-400">{ format!("@{}", identity.username) }</p>
            </div>
            <div class="flex items-center gap-4">
                <span class="px-3 py-1 rounded-full bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-200 text-sm font-medium">
                    { format!("⭐ {} pts", identity.points) }
                </span>
                <span class="px-3 py-1 rounded-full bg-orange-100 text-orange-800 dark:bg-orange-900 dark:text-orange-200 text-sm font-medium">
                    { format!("🔥 {} day streak", identity.streak_days) }
                </span>
                <button
                    class="p-2 rounded-md text-gray-600 hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-700"
                    title="Toggle dark mode"
                    onclick={on_toggle_theme}
                >
                    { if theme.theme.is_dark() { "☀️" } else { "🌙" } }
                </button>
                <div class="h-9 w-9 bg-green-600 rounded-full flex items-center justify-center">
                    <span class="text-sm font-medium text-white">{ identity.initial() }</span>
                </div>
                <button
                    class="text-sm text-red-600 hover:text-red-700 dark:text-red-400 font-medium"
                    onclick={on_logout}
                >
                    { "Logout" }
                </button>
            </div>
        </header>
    }
}
