//! Quark Eval - resolver and program-counter interpreter for Quark.
//!
//! # Architecture
//!
//! - [`MethodRegistry`]: name to [`MethodDefinition`] map built by merging
//!   [`MethodGroup`]s; later entries override earlier ones
//! - [`Program`]: whole-source resolution into one [`Step`] per line plus
//!   every [`ParseError`] found
//! - [`Context`]: variables, heap, log buffer, program counter and the
//!   print handler; the only state a handler may touch
//! - [`Interpreter`]: owns a `Context` and runs programs against it
//!
//! # Jumps
//!
//! The engine always increments the counter by one after a step. A handler
//! that wants to continue at line `n` sets the counter to `n - 1`;
//! [`Context::jump_to`] applies that rule.
//!
//! # Re-exports
//!
//! [`Operand`] comes from `quark_lexer`, since handlers receive operands
//! directly.

mod context;
mod docs;
mod errors;
mod host;
pub mod library;
mod limits;
mod method;
mod print_handler;
mod program;
mod registry;
mod value;

pub mod interpreter;

pub use quark_lexer::Operand;

pub use context::Context;
pub use docs::{docstring, listing, signature};
pub use errors::{ExecError, ParseError, ParseErrors, RuntimeError};
pub use host::{host_function, numeric_function, Conversion};
pub use interpreter::{Interpreter, InterpreterBuilder, RunSummary};
pub use limits::{ExecLimits, DEFAULT_HEAP_LIMIT};
pub use method::{fixed_args, Documentation, Handler, MethodDefinition, Param};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler,
};
pub use program::{Instruction, Program, Step};
pub use registry::{MethodGroup, MethodRegistry};
pub use value::Value;
