//! Instruction resolution: source text to [`Program`].
//!
//! Resolution is pure. It reads the registry but never touches a context or
//! calls a handler, and it always covers the whole source so every error is
//! reported at once.

use std::sync::Arc;

use quark_lexer::{classify, lines, LineKind, RawToken, SourceLine};
use smallvec::SmallVec;

use crate::{Context, MethodDefinition, MethodRegistry, Operand, ParseError, RuntimeError};

/// A resolved, executable line.
#[derive(Clone, Debug)]
pub struct Instruction {
    name: String,
    method: Arc<MethodDefinition>,
    args: SmallVec<[Operand; 3]>,
}

impl Instruction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Operand] {
        &self.args
    }

    pub fn method(&self) -> &MethodDefinition {
        &self.method
    }

    pub(crate) fn invoke(&self, ctx: &mut Context) -> Result<(), RuntimeError> {
        (self.method.handler)(ctx, &self.args)
    }
}

/// Instructions compare by name and operands; handlers are not comparable.
impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

/// One entry per source line.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Blank line, comment, or a line that failed to resolve.
    Noop,
    Instruction(Instruction),
}

/// A resolved program and the errors found while resolving it.
///
/// A program with errors must not run; see [`Program::has_errors`].
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    steps: Vec<Step>,
    errors: Vec<ParseError>,
}

impl Program {
    /// Resolve every line of `source` against `registry`.
    pub fn resolve(source: &str, registry: &MethodRegistry) -> Self {
        let mut errors = Vec::new();
        let steps = lines(source)
            .map(|line| resolve_line(line, registry, &mut errors))
            .collect();
        Program { steps, errors }
    }

    /// Number of lines, including no-ops.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step at 1-based `line`.
    pub fn step(&self, line: usize) -> Option<&Step> {
        line.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.steps.iter().filter_map(|step| match step {
            Step::Instruction(instr) => Some(instr),
            Step::Noop => None,
        })
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn resolve_line(
    line: SourceLine<'_>,
    registry: &MethodRegistry,
    errors: &mut Vec<ParseError>,
) -> Step {
    if line.kind() != LineKind::Code {
        return Step::Noop;
    }

    let mut tokens = line.tokens();
    let name = tokens.next().map_or("", |token| token.text);
    let Some(method) = registry.get(name) else {
        errors.push(ParseError::UndefinedInstruction {
            name: name.to_string(),
            line: line.number,
        });
        return Step::Noop;
    };

    let rest: SmallVec<[RawToken<'_>; 4]> = tokens.collect();
    if rest.len() != method.arity() {
        errors.push(ParseError::ArgumentCount {
            name: name.to_string(),
            line: line.number,
            found: rest.len(),
            expected: method.arity(),
        });
        return Step::Noop;
    }

    let texts: SmallVec<[&str; 4]> = rest.iter().map(|token| token.text).collect();
    let Some(args) = resolve_args(&texts, line.number, errors) else {
        return Step::Noop;
    };

    Step::Instruction(Instruction {
        name: name.to_string(),
        method: Arc::clone(method),
        args,
    })
}

/// Classify every argument token of `line`.
///
/// Each token that fails is reported; any failure suppresses the whole
/// instruction.
fn resolve_args(
    tokens: &[&str],
    line: usize,
    errors: &mut Vec<ParseError>,
) -> Option<SmallVec<[Operand; 3]>> {
    let before = errors.len();
    let mut args = SmallVec::with_capacity(tokens.len());
    for token in tokens {
        match classify(token) {
            Ok(operand) => args.push(operand),
            Err(bad) => errors.push(ParseError::UnparsableToken {
                token: bad.token,
                line,
            }),
        }
    }
    (errors.len() == before).then_some(args)
}

#[cfg(test)]
mod tests;
