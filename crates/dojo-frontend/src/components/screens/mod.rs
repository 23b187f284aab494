//! The screens the dashboard shell switches between.

pub mod dashboard;
pub mod editor;
pub mod leaderboard;
pub mod problems;
pub mod profile;

pub use dashboard::*;
pub use editor::*;
pub use leaderboard::*;
pub use problems::*;
pub use profile::*;
