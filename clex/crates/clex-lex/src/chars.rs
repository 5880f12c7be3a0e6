//! Character class predicates used by the scanner and classifier.
//!
//! All classes are ASCII-only; any other character is unrecognized.

/// Whitespace: space, tab, newline, vertical tab, form feed, carriage return.
///
/// ```
/// use clex_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Printable ASCII punctuation other than `_`, which starts identifiers.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() && c != '_'
}

/// Checks if a character may start an identifier.
///
/// ```
/// use clex_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('x'));
/// assert!(!is_ident_start('9'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character may continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}
