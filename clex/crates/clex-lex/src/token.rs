//! Token definitions for the C lexical analyzer.

use std::fmt;

use clex_util::Span;
use serde::Serialize;

/// Default upper bound on a token buffer, including the terminator slot.
///
/// A token therefore stores at most `DEFAULT_MAX_TOKEN_LENGTH - 1`
/// characters; longer lexemes are silently truncated.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 100;

/// The category assigned to a lexeme by the classifier.
///
/// Variant order matches the order of the summary table in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// One of the 32 reserved words
    Keyword,
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword
    Identifier,
    /// String, character, or numeric literal
    Constant,
    /// Arithmetic, relational, logical, bitwise, or assignment operator
    Operator,
    /// Grouping and separator punctuation: `( ) { } [ ] ; , .`
    SpecialCharacter,
    /// Anything no other rule accepted
    Unknown,
}

impl TokenType {
    /// Every token type, in report order.
    pub const ALL: [TokenType; 6] = [
        TokenType::Keyword,
        TokenType::Identifier,
        TokenType::Constant,
        TokenType::Operator,
        TokenType::SpecialCharacter,
        TokenType::Unknown,
    ];

    /// Upper-case display name used in the report's TYPE column.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "KEYWORD",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::Constant => "CONSTANT",
            TokenType::Operator => "OPERATOR",
            TokenType::SpecialCharacter => "SPECIAL CHARACTER",
            TokenType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw lexeme cut from a line by the scanner, not yet classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    /// Exact (possibly truncated) source text
    pub text: String,
    /// Where the lexeme starts
    pub span: Span,
}

impl Lexeme {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

/// A classified token, ready for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Exact (possibly truncated) source text
    pub text: String,
    /// Where the token starts
    #[serde(flatten)]
    pub span: Span,
    /// Assigned category
    #[serde(rename = "type")]
    pub kind: TokenType,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span, kind: TokenType) -> Self {
        Self {
            text: text.into(),
            span,
            kind,
        }
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.text, self.span)
    }
}
