//! Runtime values stored in variables and on the heap.

use std::fmt;

/// A runtime value.
///
/// `Empty` is the absent sentinel: reading an undefined variable or an
/// unwritten heap slot yields it instead of an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Empty,
    Number(f64),
    Str(String),
}

impl Value {
    /// Numeric view used by arithmetic, comparisons and jumps.
    ///
    /// Strings are trimmed and parsed; the empty string is `0` and text that
    /// is not a number is `NaN`. `Empty` is `NaN`.
    ///
    /// Accepted text: signed decimals with an optional exponent, `Infinity`
    /// with an optional sign, and unsigned `0x`/`0o`/`0b` integers.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Str(s) => parse_number(s.trim()),
            Value::Empty => f64::NAN,
        }
    }

    /// The value as a heap index or line number: a finite, non-negative
    /// integer that fits in `usize`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "range and fraction are checked before the cast"
    )]
    pub fn as_index(&self) -> Option<usize> {
        let n = self.as_number();
        let in_range = n.is_finite() && n >= 0.0 && n <= usize::MAX as f64;
        (in_range && n.fract() == 0.0).then_some(n as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Loose equality used by `eq`.
    ///
    /// Numbers compare numerically (so `NaN` never equals anything), a
    /// number and a string compare through the string's numeric value,
    /// strings compare textually, and `Empty` equals only `Empty`.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Empty, Value::Empty) => true,
            (Value::Empty, _) | (_, Value::Empty) => false,
            (Value::Str(a), Value::Str(b)) => a == b,
            (a, b) => a.as_number() == b.as_number(),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }
    // `str::parse` also takes `inf` and `nan`; only decimal syntax is a number.
    let decimal = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if decimal {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Exponent form outside `[1e-6, 1e21)`, e.g. `1e+21` and `1.5e-7`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exp = format!("{n:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                write!(f, "{mantissa}e+{power}")
            }
            _ => f.write_str(&exp),
        };
    }
    write!(f, "{n}")
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Number(if b { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Str(s) => f.write_str(s),
            Value::Number(n) if n.is_nan() => f.write_str("NaN"),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // Normalizes `-0` to `0`.
            Value::Number(n) if *n == 0.0 => f.write_str("0"),
            Value::Number(n) => write_number(f, *n),
        }
    }
}

#[cfg(test)]
mod tests;
