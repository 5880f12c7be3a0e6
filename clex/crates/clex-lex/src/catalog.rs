//! Fixed lexical catalogs: reserved words, special characters, operators.

/// The reserved words of C89, matched case-sensitively.
pub const KEYWORDS: [&str; 32] = [
    "int", "float", "char", "double", "if", "else", "for", "while", "do", "break", "void",
    "switch", "case", "default", "return", "continue", "struct", "typedef", "const", "sizeof",
    "auto", "register", "extern", "static", "volatile", "unsigned", "signed", "long", "short",
    "enum", "union", "goto",
];

/// Single-character grouping and separator punctuation.
pub const SPECIAL_CHARACTERS: [char; 9] = ['(', ')', '{', '}', '[', ']', ';', ',', '.'];

/// Operators three characters long. Matched before any shorter operator.
pub const THREE_CHAR_OPERATORS: [&str; 2] = ["<<=", ">>="];

/// Operators two characters long.
pub const TWO_CHAR_OPERATORS: [&str; 19] = [
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "->", "<<",
    ">>", "&=", "|=", "^=",
];

/// Single-character operators, including the conditional `?` and `:`.
pub const SINGLE_CHAR_OPERATORS: [char; 15] = [
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~', '?', ':',
];

/// Checks if `text` is a reserved word.
///
/// ```
/// use clex_lex::catalog::is_keyword;
///
/// assert!(is_keyword("goto"));
/// assert!(!is_keyword("Int"));
/// ```
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Checks if `text` is exactly one special character.
pub fn is_special_character(text: &str) -> bool {
    single_char(text).is_some_and(|c| SPECIAL_CHARACTERS.contains(&c))
}

/// Checks if `text` is an operator of any length.
///
/// ```
/// use clex_lex::catalog::is_operator;
///
/// assert!(is_operator("<<="));
/// assert!(is_operator("~"));
/// assert!(!is_operator("=>"));
/// ```
pub fn is_operator(text: &str) -> bool {
    match single_char(text) {
        Some(c) => SINGLE_CHAR_OPERATORS.contains(&c),
        None => TWO_CHAR_OPERATORS.contains(&text) || THREE_CHAR_OPERATORS.contains(&text),
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
