//! Hand-written scanner producing raw tokens for a single line.
//!
//! At every position the scanner tries, in priority order: a quoted string,
//! a decimal number, an integer, and a bare alphabetic word. Bytes that
//! start none of these (whitespace, punctuation, signs, non-ASCII text) are
//! skipped without producing a token, so the scanner never fails.
//!
//! # Quoted strings
//!
//! A quoted string runs from an opening `"` to the *last* `"` on the line
//! and must enclose at least one byte. `print "a" "b"` therefore yields a
//! single token `"a" "b"`. A lone `""` is not a string and is skipped.
//! Strings never cross a carriage return.

use memchr::{memchr, memrchr};

/// The lexical shape of a raw token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// `"..."`, quotes included in the token text.
    Quoted,
    /// `digits.digits`
    Decimal,
    /// `digits`
    Integer,
    /// `[a-zA-Z]+`
    Word,
}

/// A token slice of its line plus the byte offset where it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub tag: RawTag,
    pub text: &'a str,
    pub offset: usize,
}

/// Iterator over the raw tokens of one line.
///
/// The scanner works on bytes. Every token starts and ends on an ASCII
/// byte, so token slices always fall on `char` boundaries even when the
/// line contains multi-byte text.
#[derive(Clone, Debug)]
pub struct LineScanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    /// Create a scanner positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        LineScanner { line, pos: 0 }
    }

    /// End (exclusive) of a quoted string opening at `start`, if any.
    fn quoted(&self, start: usize) -> Option<usize> {
        let bytes = self.line.as_bytes();
        let body = start + 1;
        let limit = memchr(b'\r', &bytes[body..]).map_or(bytes.len(), |cr| body + cr);
        // The closing quote may not be the byte right after the opening one.
        let first_close = start + 2;
        if first_close >= limit {
            return None;
        }
        memrchr(b'"', &bytes[first_close..limit]).map(|rel| first_close + rel + 1)
    }

    /// Tag and end (exclusive) of the number starting at `start`.
    fn number(&self, start: usize) -> (RawTag, usize) {
        let bytes = self.line.as_bytes();
        let int_end = digits_end(bytes, start);
        if bytes.get(int_end) == Some(&b'.') {
            let frac_end = digits_end(bytes, int_end + 1);
            if frac_end > int_end + 1 {
                return (RawTag::Decimal, frac_end);
            }
        }
        (RawTag::Integer, int_end)
    }

    /// End (exclusive) of the word starting at `start`.
    fn word(&self, start: usize) -> usize {
        let bytes = self.line.as_bytes();
        bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_alphabetic())
            .map_or(bytes.len(), |len| start + len)
    }
}

fn digits_end(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.iter().position(|b| !b.is_ascii_digit()))
        .map_or(bytes.len(), |len| from + len)
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<RawToken<'a>> {
        let bytes = self.line.as_bytes();
        while self.pos < bytes.len() {
            let start = self.pos;
            let matched = match bytes[start] {
                b'"' => self.quoted(start).map(|end| (RawTag::Quoted, end)),
                b'0'..=b'9' => Some(self.number(start)),
                b'a'..=b'z' | b'A'..=b'Z' => Some((RawTag::Word, self.word(start))),
                _ => None,
            };
            match matched {
                Some((tag, end)) => {
                    self.pos = end;
                    return Some(RawToken {
                        tag,
                        text: &self.line[start..end],
                        offset: start,
                    });
                }
                None => self.pos += 1,
            }
        }
        None
    }
}
