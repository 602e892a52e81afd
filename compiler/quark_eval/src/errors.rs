//! Error types for resolution and execution.
//!
//! Parse errors are collected across a whole program and reported together;
//! any of them prevents execution. Runtime errors abort the running program
//! immediately and carry the line they happened on.

use std::fmt;
use std::time::Duration;

/// A problem found while resolving one source line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The leading token does not name a registered method.
    #[error("{name} at line {line} is not defined")]
    UndefinedInstruction { name: String, line: usize },
    /// The line supplies the wrong number of arguments.
    #[error(
        "{name} at line {line} has invalid argument count (has: {found}, expected: {expected})"
    )]
    ArgumentCount {
        name: String,
        line: usize,
        found: usize,
        expected: usize,
    },
    /// An argument token failed classification.
    #[error("token '{token}' at line {line} cannot be parsed")]
    UnparsableToken { token: String, line: usize },
}

impl ParseError {
    /// The 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UndefinedInstruction { line, .. }
            | ParseError::ArgumentCount { line, .. }
            | ParseError::UnparsableToken { line, .. } => *line,
        }
    }
}

/// Every parse error of one program, in line order.
///
/// Displays as the individual messages joined by newlines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrors(Vec<ParseError>);

impl ParseErrors {
    pub fn new(errors: Vec<ParseError>) -> Self {
        ParseErrors(errors)
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

/// A fatal condition raised while a program runs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// An instruction tried to write into something that is not a variable.
    #[error("{target} is not a valid variable name")]
    InvalidTarget { target: String },
    /// A jump target that is not a positive integer.
    #[error("{target} is not a valid jump target")]
    InvalidJumpTarget { target: String },
    /// A heap address that is not a non-negative integer.
    #[error("{address} is not a valid heap address")]
    InvalidAddress { address: String },
    /// An allocation amount that is not a non-negative integer.
    #[error("{amount} is not a valid allocation amount")]
    InvalidAmount { amount: String },
    #[error("heap cannot grow to {requested} slots (limit is {limit})")]
    HeapLimitExceeded { requested: usize, limit: usize },
    /// A handler received a different number of operands than it declares.
    #[error("expected {expected} arguments, got {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("step budget of {budget} exceeded")]
    StepBudgetExceeded { budget: u64 },
    #[error("execution exceeded the timeout of {timeout:?}")]
    TimeoutExceeded { timeout: Duration },
    /// Raised by embedder-defined handlers.
    #[error("{message}")]
    Custom { message: String },
}

impl RuntimeError {
    pub fn custom(message: impl Into<String>) -> Self {
        RuntimeError::Custom {
            message: message.into(),
        }
    }
}

/// Failure of one `execute` call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    /// Nothing ran; the context is untouched.
    #[error("{0}")]
    Parse(#[from] ParseErrors),
    /// Execution stopped at `line`; earlier effects remain.
    #[error("runtime error at line {line}: {source}")]
    Runtime { line: usize, source: RuntimeError },
}
