use dojo::navigation::Screen;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: Screen,
    pub on_navigate: Callback<Screen>,
}

fn icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Dashboard => "📊",
        Screen::Problems => "🧩",
        Screen::Editor => "💻",
        Screen::Leaderboard => "🏆",
        Screen::Profile => "👤",
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="w-64 shrink-0 bg-gray-900 text-gray-100 min-h-screen flex flex-col">
            <div class="px-6 py-5 border-b border-gray-800">
                <span class="text-xl font-bold text-green-400">{ "</> Dojo" }</span>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-1">
                { for Screen::ALL.iter().map(|&screen| {
                    let onclick = {
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(screen))
                    };
                    let active = screen == props.active;

                    html! {
                        <button
                            key={screen.label()}
                            {onclick}
                            class={classes!(
                                "w-full", "flex", "items-center", "gap-3", "px-3", "py-2", "rounded-md",
                                "text-left", "text-sm", "font-medium", "transition-colors",
                                if active { "bg-green-600 text-white" } else { "text-gray-300 hover:bg-gray-800 hover:text-white" }
                            )}
                        >
                            <span>{ icon(screen) }</span>
                            <span>{ screen.label() }</span>
                        </button>
                    }
                })}
            </nav>
        </aside>
    }
}
