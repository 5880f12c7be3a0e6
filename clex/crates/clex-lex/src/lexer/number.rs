//! Numeric literal lexing.
//!
//! The scanner only cuts the run of characters that looks like a number.
//! Whether the run is a well-formed constant is decided later by
//! [`classify`](crate::classify), so `08`, `0x` and `1.2.3` all come out
//! of here as single lexemes.

use super::Lexer;
use super::core::LexemeBuffer;
use crate::chars::is_binary_digit;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at an ASCII digit.
    ///
    /// # Number Formats
    ///
    /// - Hexadecimal: `0x1F`, `0XFF`
    /// - Binary: `0b1010`
    /// - Octal: `017` (digits `8` and `9` are swallowed too)
    /// - Decimal and floating point: `42`, `3.14`, `6.02e23`, `1e-9`
    pub(crate) fn lex_number(&mut self) {
        let mut buf = self.buffer();
        let first = self.cursor.current_char();
        let second = self.cursor.peek_char(1);

        match (first, second) {
            ('0', 'x' | 'X') => {
                buf.push_unchecked(first);
                buf.push_unchecked(second);
                self.cursor.advance_n(2);
                self.take_while(&mut buf, |c| c.is_ascii_hexdigit());
            },
            ('0', 'b' | 'B') => {
                buf.push_unchecked(first);
                buf.push_unchecked(second);
                self.cursor.advance_n(2);
                self.take_while(&mut buf, is_binary_digit);
            },
            ('0', d) if d.is_ascii_digit() => {
                self.take_while(&mut buf, |c| c.is_ascii_digit());
            },
            _ => self.lex_decimal(&mut buf),
        }

        self.emit_lexeme(buf.into_string());
    }

    /// Digits and dots, then an optional exponent with optional sign.
    fn lex_decimal(&mut self, buf: &mut LexemeBuffer) {
        self.take_while(buf, |c| c.is_ascii_digit() || c == '.');

        if matches!(self.cursor.current_char(), 'e' | 'E') && buf.has_room() {
            buf.push(self.cursor.current_char());
            self.cursor.advance();

            if matches!(self.cursor.current_char(), '+' | '-') && buf.has_room() {
                buf.push(self.cursor.current_char());
                self.cursor.advance();
            }

            self.take_while(buf, |c| c.is_ascii_digit());
        }
    }
}
