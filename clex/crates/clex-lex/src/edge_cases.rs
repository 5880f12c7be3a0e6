//! Edge case tests spanning the scanner and the classifier.

#[cfg(test)]
mod tests {
    use crate::{classify_lexeme, ScanEvent, Scanner, Token, TokenType};

    /// Scans and classifies `source`, returning tokens and diagnostic
    /// messages in source order.
    fn lex_all(source: &str) -> (Vec<Token>, Vec<String>) {
        let mut scanner = Scanner::new();
        let mut tokens = Vec::new();
        let mut messages = Vec::new();

        for event in scanner.scan_source(source) {
            match event {
                ScanEvent::Lexeme(lexeme) => {
                    let (token, diag) = classify_lexeme(lexeme);
                    messages.extend(diag.map(|d| d.message));
                    tokens.push(token);
                },
                ScanEvent::Diagnostic(diag) => messages.push(diag.message),
            }
        }
        messages.extend(scanner.finish().map(|d| d.message));

        (tokens, messages)
    }

    fn kinds(source: &str) -> Vec<(String, TokenType)> {
        lex_all(source)
            .0
            .into_iter()
            .map(|t| (t.text, t.kind))
            .collect()
    }

    fn pair(text: &str, kind: TokenType) -> (String, TokenType) {
        (text.to_string(), kind)
    }

    // ==================== VALID INPUT ====================

    #[test]
    fn test_edge_empty_source() {
        let (tokens, messages) = lex_all("");
        assert!(tokens.is_empty());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_edge_declaration() {
        assert_eq!(
            kinds("int x = 42;"),
            vec![
                pair("int", TokenType::Keyword),
                pair("x", TokenType::Identifier),
                pair("=", TokenType::Operator),
                pair("42", TokenType::Constant),
                pair(";", TokenType::SpecialCharacter),
            ]
        );
    }

    #[test]
    fn test_edge_comment_between_tokens() {
        let (tokens, messages) = lex_all("a /* c\n still c */ b");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(tokens[1].line(), 2);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_edge_shift_assign() {
        assert_eq!(kinds("x <<= 2;")[1], pair("<<=", TokenType::Operator));
    }

    #[test]
    fn test_edge_member_access() {
        assert_eq!(
            kinds("p->next.value"),
            vec![
                pair("p", TokenType::Identifier),
                pair("->", TokenType::Operator),
                pair("next", TokenType::Identifier),
                pair(".", TokenType::SpecialCharacter),
                pair("value", TokenType::Identifier),
            ]
        );
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(
            kinds("While while"),
            vec![pair("While", TokenType::Identifier), pair("while", TokenType::Keyword)]
        );
    }

    #[test]
    fn test_edge_literals_are_constants() {
        for (text, kind) in kinds(r#""s" 'c' 0x1F 0b11 017 3.14 1e-3"#) {
            assert_eq!(kind, TokenType::Constant, "{text}");
        }
    }

    #[test]
    fn test_edge_preprocessor_and_line_comment() {
        assert!(kinds("#define N 10\n// nothing here").is_empty());
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unterminated_string() {
        let (tokens, messages) = lex_all("char *s = \"abc\n");
        assert_eq!(tokens.len(), 4);
        assert_eq!(messages, vec!["Unterminated string '\"abc'"]);
    }

    #[test]
    fn test_err_hex_without_digits() {
        let (tokens, messages) = lex_all("0x");
        assert_eq!(tokens[0].kind, TokenType::Unknown);
        assert_eq!(messages, vec!["Incomplete hexadecimal constant '0x'"]);
    }

    #[test]
    fn test_err_invalid_octal() {
        let (tokens, messages) = lex_all("x = 08;");
        assert_eq!(tokens[2], Token::new("08", tokens[2].span, TokenType::Unknown));
        assert_eq!(messages, vec!["Invalid octal constant '08' (digit '8' out of range)"]);
    }

    #[test]
    fn test_err_multiple_decimal_points() {
        let (_, messages) = lex_all("1.2.3");
        assert_eq!(messages, vec!["Multiple decimal points in '1.2.3'"]);
    }

    #[test]
    fn test_err_bad_exponent() {
        let (tokens, messages) = lex_all("3.14e;");
        assert_eq!(tokens[0].text, "3.14e");
        assert_eq!(messages, vec!["Invalid exponent format in '3.14e'"]);
    }

    #[test]
    fn test_err_unrecognized_then_continue() {
        let (tokens, messages) = lex_all("a ` b");
        assert_eq!(tokens.len(), 2);
        assert_eq!(messages, vec!["Unrecognized character '`'"]);
    }

    #[test]
    fn test_err_unterminated_comment_reported_once() {
        let (tokens, messages) = lex_all("int a; /* open\nint b;\n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(messages, vec!["Unterminated block comment (started at line 1)"]);
    }

    #[test]
    fn test_err_stray_dollar() {
        let (tokens, messages) = lex_all("$");
        assert_eq!(tokens[0].kind, TokenType::Unknown);
        assert_eq!(messages, vec!["Invalid character '$' in numeric constant '$'"]);
    }

    #[test]
    fn test_err_hash_hides_rest_of_line() {
        let (tokens, messages) = lex_all("x # \"unterminated");
        assert_eq!(tokens.len(), 1);
        assert!(messages.is_empty());
    }
}
