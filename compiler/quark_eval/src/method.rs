//! Method definitions: documentation plus a handler.

use std::fmt;
use std::sync::Arc;

use crate::{Context, Operand, RuntimeError};

/// Instruction handler.
///
/// Receives the context and the line's operands (unresolved; call
/// [`Context::resolve`] for values). Handlers act only through side effects
/// on the context.
pub type Handler = Arc<dyn Fn(&mut Context, &[Operand]) -> Result<(), RuntimeError> + Send + Sync>;

/// One documented parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub description: String,
    /// Display type for docs; `None` renders as `any`.
    pub kind: Option<String>,
}

/// Summary and ordered parameter list of a method.
///
/// The parameter count is the method's arity: the resolver rejects lines
/// that supply a different number of arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Documentation {
    pub summary: String,
    pub params: Vec<Param>,
}

impl Documentation {
    pub fn new(summary: impl Into<String>) -> Self {
        Documentation {
            summary: summary.into(),
            params: Vec::new(),
        }
    }

    /// Append an untyped parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            description: description.into(),
            kind: None,
        });
        self
    }

    /// Append a parameter with a display type.
    #[must_use]
    pub fn typed_param(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        self.params.push(Param {
            name: name.into(),
            description: description.into(),
            kind: Some(kind.into()),
        });
        self
    }
}

/// A registry entry.
#[derive(Clone)]
pub struct MethodDefinition {
    pub documentation: Documentation,
    pub handler: Handler,
}

impl MethodDefinition {
    pub fn new<F>(documentation: Documentation, handler: F) -> Self
    where
        F: Fn(&mut Context, &[Operand]) -> Result<(), RuntimeError> + Send + Sync + 'static,
    {
        MethodDefinition {
            documentation,
            handler: Arc::new(handler),
        }
    }

    /// Number of arguments a line must supply.
    #[inline]
    pub fn arity(&self) -> usize {
        self.documentation.params.len()
    }
}

impl fmt::Debug for MethodDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDefinition")
            .field("documentation", &self.documentation)
            .finish_non_exhaustive()
    }
}

/// View `args` as a fixed-size array.
///
/// The resolver already checks argument counts, so this only fails when a
/// handler is invoked directly with the wrong number of operands.
///
/// ```
/// use quark_eval::{fixed_args, Operand};
///
/// let args = [Operand::Number(1.0), Operand::Var("x".into())];
/// let [value, target] = fixed_args::<2>(&args).unwrap();
/// assert_eq!(target.as_var(), Some("x"));
/// # let _ = value;
/// ```
pub fn fixed_args<const N: usize>(args: &[Operand]) -> Result<&[Operand; N], RuntimeError> {
    args.try_into().map_err(|_| RuntimeError::ArityMismatch {
        expected: N,
        found: args.len(),
    })
}
