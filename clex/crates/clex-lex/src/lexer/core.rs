//! Core lexer implementation.
//!
//! A [`Lexer`] scans exactly one physical line. Block comments are the only
//! construct that outlives a line, so the lexer borrows the
//! [`ScannerState`] from its owning [`Scanner`](super::Scanner) and hands
//! it back updated.

use clex_util::{DiagnosticBuilder, DiagnosticCode, Span};

use super::scanner::{ScanEvent, ScannerState};
use crate::chars::{is_ident_start, is_punctuation, is_whitespace};
use crate::cursor::Cursor;
use crate::token::Lexeme;

/// Per-line lexer.
pub struct Lexer<'a> {
    /// Character cursor over the line.
    pub(crate) cursor: Cursor<'a>,

    /// Comment state carried between lines.
    pub(crate) state: &'a mut ScannerState,

    /// Line number (1-based).
    line: u32,

    /// Most characters a single lexeme may store.
    pub(crate) token_capacity: usize,

    /// Column where the current lexeme starts.
    token_start_column: u32,

    /// Lexemes and diagnostics in source order.
    events: Vec<ScanEvent>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `source`, which must not contain a line break
    /// other than an optional trailing one.
    pub fn new(source: &'a str, line: u32, max_token_length: usize, state: &'a mut ScannerState) -> Self {
        Self {
            cursor: Cursor::new(source),
            state,
            line,
            token_capacity: max_token_length.saturating_sub(1).max(1),
            token_start_column: 1,
            events: Vec::new(),
        }
    }

    /// Scans the whole line, returning its events in source order.
    pub fn run(mut self) -> Vec<ScanEvent> {
        while !self.cursor.is_at_end() {
            if self.state.in_block_comment {
                self.skip_block_comment_body();
                continue;
            }

            self.token_start_column = self.cursor.column();
            let c = self.cursor.current_char();
            let next = self.cursor.peek_char(1);

            match c {
                // Preprocessor directives are not analyzed.
                '#' => break,
                '/' if next == '/' => break,
                '/' if next == '*' => self.enter_block_comment(),
                c if is_whitespace(c) => self.cursor.advance(),
                '"' => self.lex_string(),
                '\'' => self.lex_char(),
                c if c.is_ascii_digit() => self.lex_number(),
                c if is_punctuation(c) => self.lex_punctuation(),
                c if is_ident_start(c) => self.lex_identifier(),
                c => self.lex_unrecognized(c),
            }
        }

        self.events
    }

    /// Span of the lexeme currently being scanned.
    #[inline]
    pub(crate) fn token_span(&self) -> Span {
        Span::new(self.line, self.token_start_column)
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Starts a fresh lexeme buffer sized to the configured cap.
    #[inline]
    pub(crate) fn buffer(&self) -> LexemeBuffer {
        LexemeBuffer::new(self.token_capacity)
    }

    /// Moves characters into `buf` while `pred` holds and the buffer has room.
    pub(crate) fn take_while(&mut self, buf: &mut LexemeBuffer, pred: impl Fn(char) -> bool) {
        while !self.cursor.is_at_end() && buf.has_room() && pred(self.cursor.current_char()) {
            buf.push(self.cursor.current_char());
            self.cursor.advance();
        }
    }

    /// Emits a finished lexeme.
    pub(crate) fn emit_lexeme(&mut self, text: String) {
        let span = self.token_span();
        self.events.push(ScanEvent::Lexeme(Lexeme::new(text, span)));
    }

    /// Reports a lexical error at the current lexeme.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: String) {
        let diagnostic = DiagnosticBuilder::error(message)
            .code(code)
            .span(self.token_span())
            .build();
        self.events.push(ScanEvent::Diagnostic(diagnostic));
    }

    fn lex_unrecognized(&mut self, c: char) {
        self.cursor.advance();
        self.report_error(
            DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            format!("Unrecognized character '{}'", c),
        );
    }
}

/// Fixed-capacity text buffer for one lexeme.
///
/// Pushes past the capacity are dropped, which is how over-long lexemes
/// get truncated.
#[derive(Debug)]
pub(crate) struct LexemeBuffer {
    text: String,
    len: usize,
    capacity: usize,
}

impl LexemeBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            len: 0,
            capacity,
        }
    }

    #[inline]
    pub(crate) fn has_room(&self) -> bool {
        self.len < self.capacity
    }

    /// Appends `c` if there is room.
    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        if self.has_room() {
            self.push_unchecked(c);
        }
    }

    /// Appends `c` regardless of capacity.
    #[inline]
    pub(crate) fn push_unchecked(&mut self, c: char) {
        self.text.push(c);
        self.len += 1;
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}
