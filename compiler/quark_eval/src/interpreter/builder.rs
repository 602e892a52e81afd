//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use std::time::Duration;

use super::Interpreter;
use crate::{stdout_handler, Context, ExecLimits, MethodGroup, MethodRegistry, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Without further configuration the interpreter gets the stock registry,
/// prints to stdout and runs without step or time limits.
#[derive(Debug, Default)]
pub struct InterpreterBuilder {
    registry: Option<MethodRegistry>,
    extra: Vec<MethodGroup>,
    print_handler: Option<SharedPrintHandler>,
    limits: ExecLimits,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the base registry (default: [`MethodRegistry::stock`]).
    #[must_use]
    pub fn registry(mut self, registry: MethodRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Merge an extra group on top of the base registry.
    ///
    /// Groups are applied in call order, so later groups override earlier
    /// ones as well as the base.
    #[must_use]
    pub fn methods(mut self, group: MethodGroup) -> Self {
        self.extra.push(group);
        self
    }

    /// Set where `flush` and `dump` write.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: ExecLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Abort any run after `steps` loop iterations.
    #[must_use]
    pub fn max_steps(mut self, steps: u64) -> Self {
        self.limits.max_steps = Some(steps);
        self
    }

    /// Abort any run that takes longer than `timeout`.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.limits.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn heap_limit(mut self, slots: usize) -> Self {
        self.limits.heap_limit = slots;
        self
    }

    pub fn build(self) -> Interpreter {
        let mut registry = self.registry.unwrap_or_else(MethodRegistry::stock);
        for group in self.extra {
            registry.extend(group);
        }
        let print_handler = self.print_handler.unwrap_or_else(stdout_handler);
        Interpreter {
            ctx: Context::new(registry, print_handler, self.limits.heap_limit),
            limits: self.limits,
        }
    }
}
