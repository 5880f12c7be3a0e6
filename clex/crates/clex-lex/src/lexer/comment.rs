//! Comment handling.
//!
//! Line comments and preprocessor lines simply end the line in
//! [`Lexer::run`]. Block comments may span lines, so their progress lives
//! in the shared [`ScannerState`](super::ScannerState).

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the `/*` opener and records where the comment began.
    pub(crate) fn enter_block_comment(&mut self) {
        self.state.in_block_comment = true;
        self.state.block_comment_start_line = self.line();
        self.cursor.advance_n(2);
    }

    /// Consumes comment text up to and including the next `*/` on this
    /// line. Comments do not nest.
    pub(crate) fn skip_block_comment_body(&mut self) {
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                self.state.in_block_comment = false;
                self.state.block_comment_start_line = 0;
                return;
            }
            self.cursor.advance();
        }
    }
}
