//! The `lex` command: show how each line is tokenized and classified.

use std::fmt::Write as _;

use quark_lexer::{classify, lines, LineKind};

use super::read_file;
use crate::CliError;

/// Render the classified tokens of every code line.
///
/// The first token of a line is the instruction name and is shown as-is;
/// the rest are shown as operands, or as `<unparsable ..>`.
pub fn lex_source(source: &str) -> String {
    let mut out = String::new();
    for line in lines(source) {
        if line.kind() != LineKind::Code {
            continue;
        }
        let _ = write!(out, "{:>4}:", line.number);
        let mut tokens = line.tokens();
        if let Some(name) = tokens.next() {
            let _ = write!(out, " {}", name.text);
        }
        for token in tokens {
            match classify(token.text) {
                Ok(operand) => {
                    let _ = write!(out, " {operand:?}");
                }
                Err(bad) => {
                    let _ = write!(out, " <unparsable {}>", bad.token);
                }
            }
        }
        out.push('\n');
    }
    out
}

pub fn lex_file(path: &str) -> Result<String, CliError> {
    let source = read_file(path)?;
    Ok(format!("Tokens for '{path}':\n{}", lex_source(&source)))
}
