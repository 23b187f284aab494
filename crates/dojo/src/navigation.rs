//! In-page navigation state of the dashboard shell.
//!
//! Screens switch without touching the URL. The selected problem is the only
//! piece of data handed from one screen to another.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Problems,
    Editor,
    Leaderboard,
    Profile,
}

impl Screen {
    /// Sidebar order.
    pub const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Problems,
        Screen::Editor,
        Screen::Leaderboard,
        Screen::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Problems => "Problems",
            Screen::Editor => "Code Editor",
            Screen::Leaderboard => "Leaderboard",
            Screen::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Navigate(Screen),
    SelectProblem(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShellState {
    pub active: Screen,
    /// Kept across navigation; only replaced by the next selection.
    pub selected_problem: Option<String>,
}

impl ShellState {
    pub fn apply(&self, action: ShellAction) -> Self {
        match action {
            ShellAction::Navigate(screen) => Self {
                active: screen,
                selected_problem: self.selected_problem.clone(),
            },
            ShellAction::SelectProblem(id) => Self {
                active: Screen::Editor,
                selected_problem: Some(id),
            },
        }
    }
}
