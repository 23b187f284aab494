//! Reusable UI components for the Dojo frontend.
//!
//! The shell chrome (sidebar, header), the screens it switches between, and the
//! small building blocks they share.

pub mod charts;
pub mod confetti;
pub mod header;
pub mod loading;
pub mod screens;
pub mod sidebar;
pub mod stat_card;
pub mod style;

pub use charts::*;
pub use confetti::*;
pub use header::*;
pub use loading::*;
pub use screens::*;
pub use sidebar::*;
pub use stat_card::*;
