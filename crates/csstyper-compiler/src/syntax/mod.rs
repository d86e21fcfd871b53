//! Parser for CSS value-definition syntax.
//!
//! Turns a syntax string such as `<length> | [ auto || none ]#` into the
//! entity tree defined in `csstyper_core::syntax`.

mod error;
mod invariants;
pub mod lexer;
mod parser;

#[cfg(test)]
mod lexer_tests;

use std::fmt;
use std::ops::Range;

pub use error::ParseError;
pub use parser::{dump, parse};

/// Byte range into the syntax source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
