//! Fluent builder for diagnostics.

use crate::diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// Builder for [`Diagnostic`] values.
///
/// # Examples
///
/// ```
/// use clex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use clex_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Unterminated block comment (started at line 4)")
///     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
///     .span(Span::line_start(9))
///     .emit(&handler);
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Clone, Debug)]
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(Level::Error, message, Span::DUMMY),
        }
    }

    /// Start building a warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(Level::Warning, message, Span::DUMMY),
        }
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Finish building.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and hand the diagnostic to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}
