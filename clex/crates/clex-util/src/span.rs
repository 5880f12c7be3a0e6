//! Span module - Source location tracking.
//!
//! The analyzer works one physical line at a time, so a location is a
//! 1-based line number plus the 1-based column of the first character.
//!
//! # Examples
//!
//! ```
//! use clex_util::span::Span;
//!
//! let span = Span::new(12, 5);
//! assert_eq!(span.line, 12);
//! assert_eq!(span.to_string(), "12:5");
//! ```

use std::fmt;

use serde::Serialize;

/// Source location of a token or diagnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics built before a location is known.
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    /// Create a span at the given line and column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create a span covering the start of a line.
    #[inline]
    pub const fn line_start(line: u32) -> Self {
        Self { line, column: 1 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
