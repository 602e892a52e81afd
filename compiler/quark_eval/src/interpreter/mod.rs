//! Program-counter interpreter.
//!
//! # Execution loop
//!
//! ```text
//! counter = 1
//! while counter <= lines:
//!     if line[counter] is an instruction: run its handler
//!     counter += 1
//! ```
//!
//! The increment is unconditional. Jump handlers set the counter to
//! `target - 1` (see [`Context::jump_to`]) so the increment lands on
//! `target`. A jump past the last line ends the program and leaves the
//! counter one past the end.
//!
//! Parsing happens before anything runs: if any line fails to resolve,
//! `execute` returns the combined parse report and the context is not
//! touched, not even the counter.

mod builder;

pub use builder::InterpreterBuilder;

use crate::limits::StepBudget;
use crate::{Context, ExecError, ExecLimits, ParseErrors, Program, Step};

/// Counters reported by a successful run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Loop iterations, including no-op lines.
    pub steps: u64,
    /// Handlers invoked.
    pub instructions: u64,
}

/// An execution context plus the limits applied to each run.
///
/// Variables and heap survive between `execute` calls. Instructions and
/// programs do not; every call resolves its source again.
#[derive(Debug)]
pub struct Interpreter {
    ctx: Context,
    limits: ExecLimits,
}

impl Interpreter {
    /// Interpreter with the stock registry, stdout output and no limits.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    pub fn limits(&self) -> &ExecLimits {
        &self.limits
    }

    /// Resolve `source` against this interpreter's registry without running it.
    pub fn parse(&self, source: &str) -> Program {
        Program::resolve(source, self.ctx.registry())
    }

    /// Resolve and run `source`.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn execute(&mut self, source: &str) -> Result<RunSummary, ExecError> {
        let program = self.parse(source);
        self.run(&program)
    }

    /// Run an already resolved program.
    ///
    /// Fails without running anything if the program has parse errors.
    pub fn run(&mut self, program: &Program) -> Result<RunSummary, ExecError> {
        if program.has_errors() {
            tracing::debug!(errors = program.errors().len(), "program has parse errors");
            return Err(ParseErrors::new(program.errors().to_vec()).into());
        }

        let len = program.len();
        let mut budget = StepBudget::start(&self.limits);
        let mut instructions = 0u64;
        self.ctx.set_counter(1);

        while self.ctx.counter() <= len {
            let line = self.ctx.counter();
            budget
                .tick()
                .map_err(|source| runtime_error(line, source))?;
            if let Some(Step::Instruction(instr)) = program.step(line) {
                tracing::trace!(line, instruction = instr.name(), "step");
                instr
                    .invoke(&mut self.ctx)
                    .map_err(|source| runtime_error(line, source))?;
                instructions += 1;
            }
            self.ctx.set_counter(self.ctx.counter().saturating_add(1));
        }

        // Jumps past the end leave the counter anywhere beyond it.
        if self.ctx.counter() > len + 1 {
            self.ctx.set_counter(len + 1);
        }

        let summary = RunSummary {
            steps: budget.steps(),
            instructions,
        };
        tracing::debug!(steps = summary.steps, instructions, "program finished");
        Ok(summary)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn runtime_error(line: usize, source: crate::RuntimeError) -> ExecError {
    tracing::debug!(line, error = %source, "runtime error");
    ExecError::Runtime { line, source }
}
