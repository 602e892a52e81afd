//! The `run` command: execute a Quark file.

use quark_eval::{Interpreter, RunSummary, SharedPrintHandler};

use super::read_file;
use crate::{CliError, RunConfig};

/// Run `source` on a fresh interpreter with the given limits.
pub fn run_source(
    source: &str,
    config: &RunConfig,
    print_handler: SharedPrintHandler,
) -> Result<RunSummary, CliError> {
    let mut interp = Interpreter::builder()
        .limits(config.limits.clone())
        .print_handler(print_handler)
        .build();
    let summary = interp.execute(source)?;
    tracing::debug!(
        path = %config.path,
        steps = summary.steps,
        instructions = summary.instructions,
        "run finished"
    );
    Ok(summary)
}

/// Read `config.path` and run it, printing to `print_handler`.
pub fn run_file(
    config: &RunConfig,
    print_handler: SharedPrintHandler,
) -> Result<RunSummary, CliError> {
    let source = read_file(&config.path)?;
    run_source(&source, config, print_handler)
}
