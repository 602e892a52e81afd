//! Splitting source text into numbered lines.

use memchr::memchr;

use crate::LineScanner;

/// What a line contributes to a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Zero-length line.
    Blank,
    /// Line whose first byte is `#`.
    Comment,
    /// Anything else, including whitespace-only lines.
    Code,
}

/// One line of source with its 1-based line number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn kind(&self) -> LineKind {
        if self.text.is_empty() {
            LineKind::Blank
        } else if self.text.starts_with('#') {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }

    /// Scan the line into raw tokens.
    pub fn tokens(&self) -> LineScanner<'a> {
        LineScanner::new(self.text)
    }
}

/// Iterator returned by [`lines`].
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
    number: usize,
}

/// Split `source` on `\n`.
///
/// Empty lines are preserved, and so is the empty segment after a trailing
/// newline: `"a\n"` yields two lines. A single `\r` before each `\n` (or at
/// the very end) is dropped so CRLF sources behave like LF sources.
pub fn lines(source: &str) -> Lines<'_> {
    Lines {
        rest: Some(source),
        number: 0,
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = SourceLine<'a>;

    fn next(&mut self) -> Option<SourceLine<'a>> {
        let rest = self.rest?;
        let text = match memchr(b'\n', rest.as_bytes()) {
            Some(nl) => {
                self.rest = Some(&rest[nl + 1..]);
                &rest[..nl]
            }
            None => {
                self.rest = None;
                rest
            }
        };
        self.number += 1;
        Some(SourceLine {
            number: self.number,
            text: text.strip_suffix('\r').unwrap_or(text),
        })
    }
}
