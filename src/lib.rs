pub mod attribute;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod join;
pub mod loader;
pub mod logging;
pub mod output;
pub mod projection;
pub mod session;
pub mod view;

pub use error::{ChoroplethError, Result};

pub const EXIT_SUCCESS: i32 = 0;
/// Inputs could not be loaded or joined.
pub const EXIT_SESSION_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
