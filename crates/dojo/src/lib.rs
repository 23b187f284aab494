//! The shared library for Dojo, the browser client of a coding-challenge platform.
//!
//! This library holds everything the frontend needs that is not a Yew component:
//! wire types, the HTTP client, the session and presentation-mode stores, the
//! routing guard, shell navigation state, problem filters, logging and macros.
//! None of it touches the DOM, so it is unit tested natively.

pub mod api;
pub mod client;
pub mod data;
pub mod errors;
pub mod filters;
pub mod load;
pub mod log;
pub mod macros;
pub mod navigation;
pub mod routing;
pub mod session;
pub mod storage;
pub mod theme;

pub use serde;
pub use serde_json;
pub use tracing;
