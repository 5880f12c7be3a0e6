//! clex-util - Shared foundation types for the clex pipeline.
//!
//! This crate holds the pieces every stage of the analyzer agrees on:
//! source locations ([`Span`]) and the diagnostic infrastructure
//! ([`Diagnostic`], [`DiagnosticCode`], [`Handler`]).
//!
//! # Example
//!
//! ```
//! use clex_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unterminated string '\"abc'")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(3, 9))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
