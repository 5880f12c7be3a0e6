//! Operator matching and punctuation lexing.
//!
//! Punctuation is resolved by longest match: the three-character shift
//! assignments first, then the two-character catalog, otherwise a single
//! character.

use super::Lexer;
use crate::catalog::{THREE_CHAR_OPERATORS, TWO_CHAR_OPERATORS};

/// Result of matching the longest operator at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorMatch {
    /// `<<=` or `>>=`
    Three(&'static str),
    /// A two-character operator from the catalog
    Two(&'static str),
    /// Any other single punctuation character
    Single(char),
}

impl OperatorMatch {
    /// Number of characters the match consumes.
    pub fn width(&self) -> usize {
        match self {
            OperatorMatch::Three(_) => 3,
            OperatorMatch::Two(_) => 2,
            OperatorMatch::Single(_) => 1,
        }
    }

    /// Matched text.
    pub fn text(&self) -> String {
        match self {
            OperatorMatch::Three(op) | OperatorMatch::Two(op) => (*op).to_string(),
            OperatorMatch::Single(c) => c.to_string(),
        }
    }
}

/// Returns the two-character operator spelled by `first` and `second`, if any.
///
/// ```
/// use clex_lex::lexer::match_two_char_operator;
///
/// assert_eq!(match_two_char_operator('-', '>'), Some("->"));
/// assert_eq!(match_two_char_operator('=', '>'), None);
/// ```
pub fn match_two_char_operator(first: char, second: char) -> Option<&'static str> {
    TWO_CHAR_OPERATORS
        .iter()
        .copied()
        .find(|op| spells(op, &[first, second]))
}

/// Longest operator starting with `first`, given up to two characters of
/// lookahead (`'\0'` past end of line).
///
/// ```
/// use clex_lex::lexer::{longest_operator, OperatorMatch};
///
/// assert_eq!(longest_operator('<', '<', '='), OperatorMatch::Three("<<="));
/// assert_eq!(longest_operator('<', '<', ' '), OperatorMatch::Two("<<"));
/// assert_eq!(longest_operator('(', 'x', '\0'), OperatorMatch::Single('('));
/// ```
pub fn longest_operator(first: char, second: char, third: char) -> OperatorMatch {
    if let Some(op) = THREE_CHAR_OPERATORS
        .iter()
        .copied()
        .find(|op| spells(op, &[first, second, third]))
    {
        return OperatorMatch::Three(op);
    }

    match match_two_char_operator(first, second) {
        Some(op) => OperatorMatch::Two(op),
        None => OperatorMatch::Single(first),
    }
}

fn spells(op: &str, chars: &[char]) -> bool {
    op.chars().eq(chars.iter().copied())
}

impl<'a> Lexer<'a> {
    /// Lexes an operator or single punctuation character.
    pub(crate) fn lex_punctuation(&mut self) {
        let matched = longest_operator(
            self.cursor.current_char(),
            self.cursor.peek_char(1),
            self.cursor.peek_char(2),
        );
        self.cursor.advance_n(matched.width());
        self.emit_lexeme(matched.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{ScanEvent, Scanner};

    fn texts(source: &str) -> Vec<String> {
        Scanner::new()
            .scan_line(1, source)
            .into_iter()
            .filter_map(|e| match e {
                ScanEvent::Lexeme(l) => Some(l.text),
                ScanEvent::Diagnostic(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_every_two_char_operator_matches() {
        for op in TWO_CHAR_OPERATORS {
            let mut chars = op.chars();
            let (a, b) = (chars.next().unwrap(), chars.next().unwrap());
            assert_eq!(match_two_char_operator(a, b), Some(op));
        }
    }

    #[test]
    fn test_shift_assign_preferred() {
        assert_eq!(texts("x <<= 2; y >>= 1;")[1], "<<=");
        assert_eq!(texts("y >>= 1;")[1], ">>=");
    }

    #[test]
    fn test_increment_greedy() {
        assert_eq!(texts("a+++b"), vec!["a", "++", "+", "b"]);
    }

    #[test]
    fn test_arrow_and_compare() {
        assert_eq!(texts("p->x>=0"), vec!["p", "->", "x", ">=", "0"]);
    }

    #[test]
    fn test_single_punctuation() {
        assert_eq!(texts("@$?"), vec!["@", "$", "?"]);
    }

    #[test]
    fn test_operator_match_len() {
        assert_eq!(OperatorMatch::Three(">>=").width(), 3);
        assert_eq!(OperatorMatch::Single('~').text(), "~");
    }
}
