//! Opt-in execution limits.
//!
//! Quark has unbounded jumps, so a program may loop forever. By default it
//! is allowed to; hosts that cannot afford that set a step budget or a
//! wall-clock timeout per `execute` call. The heap limit always applies.

use std::time::{Duration, Instant};

use crate::RuntimeError;

/// Default maximum heap length in slots.
pub const DEFAULT_HEAP_LIMIT: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecLimits {
    /// Maximum loop iterations per `execute` call (`None` = unlimited).
    pub max_steps: Option<u64>,
    /// Maximum wall-clock time per `execute` call (`None` = unlimited).
    pub timeout: Option<Duration>,
    /// Maximum heap length.
    ///
    /// Unlike the other two limits this one is always on. Without it `write`
    /// would extend the heap to any address; a write or `alloc` past the
    /// limit fails with `HeapLimitExceeded` instead. Raise it for programs
    /// that address more than [`DEFAULT_HEAP_LIMIT`] slots.
    pub heap_limit: usize,
}

impl Default for ExecLimits {
    fn default() -> Self {
        ExecLimits {
            max_steps: None,
            timeout: None,
            heap_limit: DEFAULT_HEAP_LIMIT,
        }
    }
}

/// Per-call budget state, created fresh by each `execute`.
pub(crate) struct StepBudget {
    steps: u64,
    max_steps: Option<u64>,
    deadline: Option<(Instant, Duration)>,
}

impl StepBudget {
    pub(crate) fn start(limits: &ExecLimits) -> Self {
        StepBudget {
            steps: 0,
            max_steps: limits.max_steps,
            // A timeout too large to represent is no timeout.
            deadline: limits.timeout.and_then(|timeout| {
                Instant::now()
                    .checked_add(timeout)
                    .map(|deadline| (deadline, timeout))
            }),
        }
    }

    /// Account for one more step.
    #[inline]
    pub(crate) fn tick(&mut self) -> Result<(), RuntimeError> {
        self.steps = self.steps.saturating_add(1);
        if let Some(budget) = self.max_steps {
            if self.steps > budget {
                return Err(RuntimeError::StepBudgetExceeded { budget });
            }
        }
        if let Some((deadline, timeout)) = self.deadline {
            if Instant::now() >= deadline {
                return Err(RuntimeError::TimeoutExceeded { timeout });
            }
        }
        Ok(())
    }

    pub(crate) fn steps(&self) -> u64 {
        self.steps
    }
}
