//! Lexer module.
//!
//! The scanner is split into focused components:
//! - `scanner` - [`Scanner`], the line-to-line driver owning the comment state
//! - `core` - per-line [`Lexer`] and dispatch
//! - `identifier` - identifier and keyword-shaped runs
//! - `number` - numeric literal runs
//! - `string` - string and character literals
//! - `operator` - operator matching and punctuation
//! - `comment` - line and block comments

mod comment;
mod core;
mod identifier;
mod number;
pub mod operator;
mod scanner;
mod string;

pub use self::core::Lexer;
pub use operator::{longest_operator, match_two_char_operator, OperatorMatch};
pub use scanner::{ScanEvent, Scanner, ScannerState};
