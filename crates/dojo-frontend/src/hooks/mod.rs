//! Custom hooks shared by the screens.

pub mod use_load;

pub use use_load::*;
