//! The `check` command: resolve a file without running it.

use quark_eval::{ExecError, MethodRegistry, ParseErrors, Program};

use super::read_file;
use crate::CliError;

/// Resolve `source` against the stock registry.
///
/// Returns the number of instructions, or every parse error at once.
pub fn check_source(source: &str) -> Result<usize, CliError> {
    let program = Program::resolve(source, &MethodRegistry::stock());
    if program.has_errors() {
        let errors = ParseErrors::new(program.errors().to_vec());
        return Err(ExecError::Parse(errors).into());
    }
    Ok(program.instructions().count())
}

/// Check a file and return the success report line.
pub fn check_file(path: &str) -> Result<String, CliError> {
    let source = read_file(path)?;
    let count = check_source(&source)?;
    Ok(format!("OK: {path} ({count} instructions)"))
}
