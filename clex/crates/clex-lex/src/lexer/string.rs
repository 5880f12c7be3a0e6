//! String and character literal lexing.

use clex_util::DiagnosticCode;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Content runs to the next `"` on the same line with no escape
    /// processing. Content past the token cap is consumed but not stored.
    pub(crate) fn lex_string(&mut self) {
        let mut buf = self.buffer();
        buf.push_unchecked('"');
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            buf.push(self.cursor.current_char());
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            self.report_error(
                DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                format!("Unterminated string '{}'", buf.as_str()),
            );
            return;
        }

        buf.push_unchecked('"');
        self.cursor.advance();
        self.emit_lexeme(buf.into_string());
    }

    /// Lexes a character literal.
    ///
    /// A backslash pairs with the following character; the first unescaped
    /// `'` closes the literal. Running out of line or of token capacity
    /// first makes it unterminated.
    pub(crate) fn lex_char(&mut self) {
        let mut buf = self.buffer();
        buf.push_unchecked('\'');
        self.cursor.advance();

        let mut escaped = false;
        let mut closed = false;
        while !self.cursor.is_at_end() && buf.has_room() {
            let c = self.cursor.current_char();
            buf.push(c);
            self.cursor.advance();

            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '\'' {
                closed = true;
                break;
            }
        }

        if closed {
            self.emit_lexeme(buf.into_string());
        } else {
            self.report_error(
                DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
                format!("Unterminated character literal '{}'", buf.as_str()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use clex_util::DiagnosticCode;

    use crate::lexer::{ScanEvent, Scanner};

    fn scan(source: &str) -> Vec<ScanEvent> {
        Scanner::new().scan_line(1, source)
    }

    fn lexeme(event: &ScanEvent) -> &str {
        match event {
            ScanEvent::Lexeme(l) => &l.text,
            ScanEvent::Diagnostic(d) => panic!("unexpected diagnostic: {}", d),
        }
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        let events = scan(r#"printf("Hello, World!");"#);
        assert_eq!(lexeme(&events[2]), r#""Hello, World!""#);
        assert_eq!(lexeme(&events[3]), ")");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(lexeme(&scan(r#""""#)[0]), r#""""#);
    }

    #[test]
    fn test_unterminated_string() {
        let events = scan(r#"s = "abc"#);
        assert_eq!(events.len(), 3);
        match &events[2] {
            ScanEvent::Diagnostic(d) => {
                assert_eq!(d.message, "Unterminated string '\"abc'");
                assert_eq!(d.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
            },
            other => panic!("expected diagnostic, got {other:?}"),
        }
    }

    #[test]
    fn test_string_has_no_escapes() {
        let events = scan(r#""a\"b""#);
        assert_eq!(lexeme(&events[0]), r#""a\""#);
        assert_eq!(lexeme(&events[1]), "b");
        assert!(matches!(events[2], ScanEvent::Diagnostic(_)));
    }

    #[test]
    fn test_long_string_truncated_but_closed() {
        let source = format!("\"{}\" x", "s".repeat(200));
        let events = scan(&source);
        let text = lexeme(&events[0]);
        assert_eq!(text.len(), 100);
        assert!(text.ends_with('"'));
        assert_eq!(lexeme(&events[1]), "x");
    }

    #[test]
    fn test_char_literals() {
        let events = scan(r"'a' '\n' '\''");
        assert_eq!(lexeme(&events[0]), "'a'");
        assert_eq!(lexeme(&events[1]), r"'\n'");
        assert_eq!(lexeme(&events[2]), r"'\''");
    }

    #[test]
    fn test_empty_char_literal_is_lexed() {
        assert_eq!(lexeme(&scan("''")[0]), "''");
    }

    #[test]
    fn test_unterminated_char() {
        let events = scan("c = 'x");
        match &events[2] {
            ScanEvent::Diagnostic(d) => {
                assert_eq!(d.message, "Unterminated character literal ''x'");
                assert_eq!(d.code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_CHAR));
            },
            other => panic!("expected diagnostic, got {other:?}"),
        }
    }
}
