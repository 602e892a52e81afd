//! Quark Lexer - line splitting, token scanning and token classification.
//!
//! Quark source is line-oriented: every line is either blank, a comment
//! (starts with `#`), or a single instruction followed by its arguments.
//! This crate turns source text into [`SourceLine`]s, scans each line into
//! [`RawToken`]s and classifies raw tokens into [`Operand`]s.
//!
//! # Layers
//!
//! - [`lines`]: splits on `\n`, keeps empty lines so line numbers stay stable
//! - [`LineScanner`]: extracts quoted strings, decimals, integers and words
//! - [`classify`]: re-tests a raw token and produces a typed [`Operand`]
//!
//! Nothing here knows which instructions exist; name lookup and argument
//! count validation happen in `quark_eval`.

mod classify;
mod line;
mod operand;
mod scanner;

pub use classify::{classify, Unparsable};
pub use line::{lines, LineKind, Lines, SourceLine};
pub use operand::Operand;
pub use scanner::{LineScanner, RawTag, RawToken};
