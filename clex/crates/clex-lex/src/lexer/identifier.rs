//! Identifier lexing.
//!
//! Keywords and identifiers share a shape; telling them apart is the
//! classifier's job.

use super::Lexer;
use crate::chars::is_ident_continue;

impl<'a> Lexer<'a> {
    /// Lexes a run of `[A-Za-z0-9_]`. Characters past the token cap start
    /// a new lexeme.
    pub(crate) fn lex_identifier(&mut self) {
        let mut buf = self.buffer();
        self.take_while(&mut buf, is_ident_continue);
        self.emit_lexeme(buf.into_string());
    }
}
