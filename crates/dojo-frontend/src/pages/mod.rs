//! Page components for different routes in the application.

pub mod login;
pub mod shell;

pub use login::*;
pub use shell::*;
