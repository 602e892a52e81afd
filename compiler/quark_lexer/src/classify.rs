//! Token classification: raw token text to [`Operand`].
//!
//! Tests run in a fixed order: number, then quoted string, then bare word.
//! Each test matches the whole token. Tokens produced by [`LineScanner`]
//! always pass one of them; arbitrary strings may not, and are reported as
//! [`Unparsable`] rather than coerced to a default value.
//!
//! [`LineScanner`]: crate::LineScanner

use crate::Operand;

/// A token that is neither a number, a quoted string, nor a bare word.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("token '{token}' cannot be parsed")]
pub struct Unparsable {
    pub token: String,
}

/// Classify one raw token.
///
/// ```
/// use quark_lexer::{classify, Operand};
///
/// assert_eq!(classify("2.5"), Ok(Operand::Number(2.5)));
/// assert_eq!(classify("\"hi\""), Ok(Operand::Str("hi".into())));
/// assert_eq!(classify("x"), Ok(Operand::Var("x".into())));
/// assert!(classify("x-1").is_err());
/// ```
pub fn classify(token: &str) -> Result<Operand, Unparsable> {
    let unparsable = || Unparsable {
        token: token.to_string(),
    };
    if is_number(token) {
        return token.parse().map(Operand::Number).map_err(|_| unparsable());
    }
    if let Some(body) = quoted_body(token) {
        return Ok(Operand::Str(body.to_string()));
    }
    if is_word(token) {
        return Ok(Operand::Var(token.to_string()));
    }
    Err(unparsable())
}

/// `digits` or `digits.digits`.
fn is_number(token: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match token.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(token),
    }
}

/// Body of `"..."` with at least one enclosed character and no line break.
fn quoted_body(token: &str) -> Option<&str> {
    let body = token.strip_prefix('"')?.strip_suffix('"')?;
    (!body.is_empty() && !body.contains(['\r', '\n'])).then_some(body)
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphabetic())
}
