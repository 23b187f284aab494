//! Context providers for shared application state and services.

pub mod api;
pub mod confetti;
pub mod session;
pub mod theme;

pub use api::{ApiProvider, use_api};
pub use confetti::{ConfettiProvider, use_confetti};
pub use session::{SessionProvider, use_session};
pub use theme::{ThemeProvider, use_theme};
