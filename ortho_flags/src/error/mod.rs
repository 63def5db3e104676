//! Error types produced while registering and parsing flags.

mod helpers;
mod types;

pub use types::{FlagError, ValueError};
