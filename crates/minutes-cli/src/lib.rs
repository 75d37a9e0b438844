//! Minutes CLI library
//!
//! Argument parsing, configuration loading and error types for the `minutes`
//! binary.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::{mask_key, Config, API_KEY_ENV, DEFAULT_CONFIG_FILE};
pub use error::{CliError, Result};
