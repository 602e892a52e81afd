//! Quark command-line front end.
//!
//! The `quark` binary is a thin argument matcher over [`commands`]; the
//! commands themselves return values and errors so they can be tested
//! without spawning a process.

pub mod commands;
pub mod config;
mod error;
pub mod repl;
mod tracing_setup;

pub use config::RunConfig;
pub use error::CliError;
pub use repl::Repl;
pub use tracing_setup::init_tracing;
