//! wiuser - user identity inspection CLI
//!
//! Materializes identities from command-line arguments and runs the identity
//! contract's accessors against them.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use runner::execute;

#[cfg(test)]
mod tests;
