//! The line-to-line scanner driver.

use clex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};

use super::Lexer;
use crate::token::{Lexeme, DEFAULT_MAX_TOKEN_LENGTH};

/// State carried from one line to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScannerState {
    /// Inside an unclosed `/* ... */`
    pub in_block_comment: bool,
    /// Line of the `/*` that opened the current comment; 0 when not in one
    pub block_comment_start_line: u32,
}

/// One item of scanner output, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    /// An unclassified lexeme
    Lexeme(Lexeme),
    /// A lexical error found while cutting lexemes
    Diagnostic(Diagnostic),
}

/// Splits source lines into lexemes.
///
/// # Example
///
/// ```
/// use clex_lex::lexer::{ScanEvent, Scanner};
///
/// let mut scanner = Scanner::new();
/// let events = scanner.scan_line(1, "x += 0x1F; /* begin");
/// assert_eq!(events.len(), 4);
/// assert!(scanner.state().in_block_comment);
///
/// let diag = scanner.finish().unwrap();
/// assert_eq!(diag.message, "Unterminated block comment (started at line 1)");
/// ```
#[derive(Clone, Debug)]
pub struct Scanner {
    state: ScannerState,
    max_token_length: usize,
    last_line: u32,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Creates a scanner with the default token cap.
    pub fn new() -> Self {
        Self::with_max_token_length(DEFAULT_MAX_TOKEN_LENGTH)
    }

    /// Creates a scanner storing at most `max_token_length - 1` characters
    /// per lexeme.
    pub fn with_max_token_length(max_token_length: usize) -> Self {
        Self {
            state: ScannerState::default(),
            max_token_length,
            last_line: 0,
        }
    }

    /// Current cross-line state.
    pub fn state(&self) -> ScannerState {
        self.state
    }

    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Scans one physical line. A trailing `\n` or `\r\n` is ignored.
    pub fn scan_line(&mut self, line: u32, text: &str) -> Vec<ScanEvent> {
        self.last_line = line;
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        Lexer::new(text, line, self.max_token_length, &mut self.state).run()
    }

    /// Scans every line of `source`, numbering lines from 1.
    ///
    /// Does not call [`finish`](Self::finish).
    pub fn scan_source(&mut self, source: &str) -> Vec<ScanEvent> {
        source
            .lines()
            .zip(1..)
            .flat_map(|(text, line)| self.scan_line(line, text))
            .collect()
    }

    /// Ends the input. Reports a block comment still open, attributed to
    /// the last line scanned, and resets the state.
    pub fn finish(&mut self) -> Option<Diagnostic> {
        if !self.state.in_block_comment {
            return None;
        }

        let start = self.state.block_comment_start_line;
        self.state = ScannerState::default();
        Some(
            DiagnosticBuilder::error(format!(
                "Unterminated block comment (started at line {})",
                start
            ))
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
            .span(Span::line_start(self.last_line))
            .build(),
        )
    }
}
