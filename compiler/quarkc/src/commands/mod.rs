//! Command handlers for the `quark` CLI.
//!
//! Each submodule implements one command. Handlers return their output (or
//! write it through a print handler) and report failures as [`CliError`];
//! only `main` decides how to exit.

mod check;
mod debug;
mod methods;
mod run;

pub use check::{check_file, check_source};
pub use debug::{lex_file, lex_source};
pub use methods::{method_doc, method_listing};
pub use run::{run_file, run_source};

use crate::CliError;

/// Read a source file, mapping I/O failures to user-facing errors.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::read(path, err))
}
