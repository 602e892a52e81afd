//! Classified instruction arguments.

use std::fmt;

/// A classified argument token.
///
/// Closed set fixed at classification time. Variable references keep only
/// the identifier; their value is looked up when the instruction runs, so
/// forward references and self-referencing writes are legal.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Integer or decimal literal.
    Number(f64),
    /// Quoted literal, stored without its quotes.
    Str(String),
    /// Bare alphabetic identifier naming a variable.
    Var(String),
}

impl Operand {
    /// The variable name, if this operand is a variable reference.
    #[inline]
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Operand::Var(name) => Some(name),
            Operand::Number(_) | Operand::Str(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Str(s) => write!(f, "\"{s}\""),
            Operand::Var(name) => f.write_str(name),
        }
    }
}
