use dojo::navigation::{Screen, ShellAction, ShellState};
use yew::prelude::*;

use crate::components::{
    DashboardScreen, EditorScreen, Header, LeaderboardScreen, ProblemsScreen, ProfileScreen,
    Sidebar,
};

/// The signed-in workspace: sidebar, header and whichever screen is active.
#[function_component(DashboardShell)]
pub fn dashboard_shell() -> Html {
    let shell = use_state(ShellState::default);

    let on_navigate = {
        let shell = shell.clone();
        Callback::from(move |screen: Screen| {
            shell.set(shell.apply(ShellAction::Navigate(screen)));
        })
    };

    let on_select = {
        let shell = shell.clone();
        Callback::from(move |id: String| {
            shell.set(shell.apply(ShellAction::SelectProblem(id)));
        })
    };

    let screen = match shell.active {
        Screen::Dashboard => html! { <DashboardScreen /> },
        Screen::Problems => html! { <ProblemsScreen {on_select} /> },
        Screen::Editor => html! { <EditorScreen problem_id={shell.selected_problem.clone()} /> },
        Screen::Leaderboard => html! { <LeaderboardScreen /> },
        Screen::Profile => html! { <ProfileScreen /> },
    };

    html! {
        <div class="flex min-h-screen bg-gray-100 dark:bg-gray-900">
            <Sidebar active={shell.active} {on_navigate} />
            <div class="flex-1 flex flex-col min-w-0">
                <Header />
                <main class="flex-1 p-8 overflow-y-auto">
                    { screen }
                </main>
            </div>
        </div>
    }
}
