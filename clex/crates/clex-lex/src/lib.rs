//! clex-lex - Lexical analysis for C-like source text.
//!
//! Analysis runs in two stages:
//!
//! 1. The [`Scanner`] cuts each physical line into raw [`Lexeme`]s and
//!    reports lexical errors (unterminated literals, unrecognized
//!    characters, unterminated block comments). It carries only the
//!    block-comment flag from one line to the next.
//! 2. [`classify`](classify::classify) assigns every lexeme a
//!    [`TokenType`] by an ordered rule table and validates numeric
//!    constants.
//!
//! # Example Usage
//!
//! ```
//! use clex_lex::{classify::classify_lexeme, ScanEvent, Scanner, TokenType};
//!
//! let mut scanner = Scanner::new();
//! let mut kinds = Vec::new();
//! for event in scanner.scan_line(1, "int x = 0x1F;") {
//!     if let ScanEvent::Lexeme(lexeme) = event {
//!         let (token, _) = classify_lexeme(lexeme);
//!         kinds.push(token.kind);
//!     }
//! }
//!
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenType::Keyword,
//!         TokenType::Identifier,
//!         TokenType::Operator,
//!         TokenType::Constant,
//!         TokenType::SpecialCharacter,
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and lexeme types
//! - [`lexer`] - Line scanner and operator matching
//! - [`classify`] - Rule-table classifier and constant validation
//! - [`catalog`] - Keywords, special characters, operators
//! - [`cursor`] - Character cursor over one line
//! - [`chars`] - Character class predicates
//!
//! # Token Categories
//!
//! - **Keywords**: the 32 reserved words of C89
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Constants**: strings, characters, hexadecimal `0x1F`, binary
//!   `0b101`, octal `017`, decimal and floating `3.14e-2`
//! - **Operators**: arithmetic, relational, logical, bitwise, assignment,
//!   increment, `->`, conditional `?` `:`
//! - **Special characters**: `( ) { } [ ] ; , .`

pub mod catalog;
pub mod chars;
pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use classify::{classify, classify_lexeme, Classification, ConstantError};
pub use lexer::{ScanEvent, Scanner, ScannerState};
pub use token::{Lexeme, Token, TokenType, DEFAULT_MAX_TOKEN_LENGTH};
