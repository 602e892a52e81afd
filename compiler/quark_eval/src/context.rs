//! Execution context: the mutable state of one interpreter.
//!
//! Handlers see the context through the primitives defined here. Variables
//! and the heap persist across `execute` calls; the program counter is reset
//! at the start of each successful one.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{MethodRegistry, Operand, RuntimeError, SharedPrintHandler, Value};

pub struct Context {
    variables: FxHashMap<String, Value>,
    /// Zero-indexed; unwritten slots hold `Value::Empty`.
    heap: Vec<Value>,
    log: String,
    /// 1-based line of the step being executed.
    counter: usize,
    registry: MethodRegistry,
    print_handler: SharedPrintHandler,
    heap_limit: usize,
}

impl Context {
    pub(crate) fn new(
        registry: MethodRegistry,
        print_handler: SharedPrintHandler,
        heap_limit: usize,
    ) -> Self {
        Context {
            variables: FxHashMap::default(),
            heap: Vec::new(),
            log: String::new(),
            counter: 1,
            registry,
            print_handler,
            heap_limit,
        }
    }

    // Variables

    /// Value of an operand. Undefined variables resolve to `Empty`.
    pub fn resolve(&self, operand: &Operand) -> Value {
        match operand {
            Operand::Number(n) => Value::Number(*n),
            Operand::Str(s) => Value::Str(s.clone()),
            Operand::Var(name) => self.variables.get(name).cloned().unwrap_or_default(),
        }
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Copy the current value of `value` into the variable `target`.
    ///
    /// Writing a variable into another copies; no aliasing.
    pub fn write_variable(&mut self, target: &Operand, value: &Operand) -> Result<(), RuntimeError> {
        let value = self.resolve(value);
        self.assign(target, value)
    }

    /// Store an already computed value into the variable `target`.
    pub fn assign(&mut self, target: &Operand, value: Value) -> Result<(), RuntimeError> {
        let Operand::Var(name) = target else {
            return Err(RuntimeError::InvalidTarget {
                target: target.to_string(),
            });
        };
        self.set_variable(name.clone(), value);
        Ok(())
    }

    /// Set a variable by name, bypassing the operand check.
    pub fn set_variable(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    // Heap

    /// Slot `index`, or `Empty` when unset or out of bounds.
    pub fn heap_read(&self, index: usize) -> Value {
        self.heap.get(index).cloned().unwrap_or_default()
    }

    /// Store `value` at `index`, growing the heap so the index exists.
    pub fn heap_write(&mut self, index: usize, value: Value) -> Result<(), RuntimeError> {
        if index >= self.heap.len() {
            self.resize_heap(index.saturating_add(1))?;
        }
        self.heap[index] = value;
        Ok(())
    }

    pub fn heap_size(&self) -> usize {
        self.heap.len()
    }

    /// Append `amount` empty slots.
    pub fn grow(&mut self, amount: usize) -> Result<(), RuntimeError> {
        self.resize_heap(self.heap.len().saturating_add(amount))
    }

    fn resize_heap(&mut self, len: usize) -> Result<(), RuntimeError> {
        if len > self.heap_limit {
            return Err(RuntimeError::HeapLimitExceeded {
                requested: len,
                limit: self.heap_limit,
            });
        }
        self.heap.resize(len, Value::Empty);
        Ok(())
    }

    /// Resolve `operand` to a heap address.
    pub fn address(&self, operand: &Operand) -> Result<usize, RuntimeError> {
        let value = self.resolve(operand);
        value.as_index().ok_or_else(|| RuntimeError::InvalidAddress {
            address: value.to_string(),
        })
    }

    // Log buffer

    pub fn append(&mut self, text: &str) {
        self.log.push_str(text);
    }

    /// Pending, unflushed output.
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Emit the log buffer as one line and clear it.
    pub fn flush(&mut self) {
        self.print_handler.println(&self.log);
        self.log.clear();
    }

    // Program counter

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Set the raw counter. The engine adds one after the current step.
    pub fn set_counter(&mut self, counter: usize) {
        self.counter = counter;
    }

    /// Continue execution at `line` (1-based) after the current step.
    pub fn jump_to(&mut self, line: &Value) -> Result<(), RuntimeError> {
        match line.as_index() {
            Some(target) if target >= 1 => {
                self.counter = target - 1;
                Ok(())
            }
            _ => Err(RuntimeError::InvalidJumpTarget {
                target: line.to_string(),
            }),
        }
    }

    // Environment

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Multi-line debug rendering used by `dump`.
    ///
    /// Variables are sorted by name so the output is stable.
    pub fn dump(&self) -> String {
        let mut variables: Vec<_> = self.variables.iter().collect();
        variables.sort_unstable_by(|a, b| a.0.cmp(b.0));
        let mut out = format!("counter: {}\nvariables:", self.counter);
        for (name, value) in variables {
            out.push_str(&format!("\n  {name} = {value:?}"));
        }
        out.push_str(&format!("\nheap: {:?}\nlogs: {:?}", self.heap, self.log));
        out
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("variables", &self.variables)
            .field("heap", &self.heap)
            .field("log", &self.log)
            .field("counter", &self.counter)
            .field("methods", &self.registry.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
