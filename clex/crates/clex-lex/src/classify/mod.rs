//! Token classification.
//!
//! Classification is a pure function of the lexeme text. Rules are tried
//! in the order of [`RULES`]; the first rule that accepts the text decides
//! its [`TokenType`]. The constant rule is the only one that can reject a
//! lexeme with a reason, in which case the token becomes
//! [`TokenType::Unknown`] and the reason is reported as a diagnostic.
//!
//! ```
//! use clex_lex::classify::classify;
//! use clex_lex::TokenType;
//!
//! assert_eq!(classify("while").kind, TokenType::Keyword);
//! assert_eq!(classify("<<=").kind, TokenType::Operator);
//!
//! let rejected = classify("0x1G");
//! assert_eq!(rejected.kind, TokenType::Unknown);
//! assert!(rejected.error.is_some());
//! ```

mod constant;

pub use constant::{recognize_constant, ConstantError, ConstantForm};

use clex_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode};

use crate::catalog::{is_keyword, is_operator, is_special_character};
use crate::chars::{is_ident_continue, is_ident_start};
use crate::token::{Lexeme, Token, TokenType};

/// Outcome of one classification rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The rule accepts the text.
    Match,
    /// The rule does not apply; try the next one.
    NoMatch,
    /// The rule applies but the text is malformed.
    Rejected(ConstantError),
}

/// A classification rule: the type it assigns and its recognizer.
pub type Rule = (TokenType, fn(&str) -> RuleOutcome);

/// Classification rules in priority order.
pub const RULES: [Rule; 5] = [
    (TokenType::Keyword, keyword_rule),
    (TokenType::Identifier, identifier_rule),
    (TokenType::SpecialCharacter, special_character_rule),
    (TokenType::Operator, operator_rule),
    (TokenType::Constant, constant_rule),
];

/// Result of classifying a lexeme's text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub kind: TokenType,
    /// Why a constant-shaped lexeme was rejected
    pub error: Option<ConstantError>,
}

/// Classifies `text` by the first accepting rule, falling back to
/// [`TokenType::Unknown`].
pub fn classify(text: &str) -> Classification {
    for (kind, recognize) in RULES {
        match recognize(text) {
            RuleOutcome::Match => return Classification { kind, error: None },
            RuleOutcome::NoMatch => continue,
            RuleOutcome::Rejected(error) => {
                return Classification {
                    kind: TokenType::Unknown,
                    error: Some(error),
                }
            },
        }
    }

    Classification {
        kind: TokenType::Unknown,
        error: None,
    }
}

/// Turns a scanned lexeme into a token, plus the diagnostic explaining a
/// rejected constant.
pub fn classify_lexeme(lexeme: Lexeme) -> (Token, Option<Diagnostic>) {
    let Classification { kind, error } = classify(&lexeme.text);
    let diagnostic = error.map(|error| {
        DiagnosticBuilder::error(error.to_string())
            .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .span(lexeme.span)
            .build()
    });
    (Token::new(lexeme.text, lexeme.span, kind), diagnostic)
}

fn matched(accepted: bool) -> RuleOutcome {
    if accepted {
        RuleOutcome::Match
    } else {
        RuleOutcome::NoMatch
    }
}

fn keyword_rule(text: &str) -> RuleOutcome {
    matched(is_keyword(text))
}

fn identifier_rule(text: &str) -> RuleOutcome {
    let mut chars = text.chars();
    matched(chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue))
}

fn special_character_rule(text: &str) -> RuleOutcome {
    matched(is_special_character(text))
}

fn operator_rule(text: &str) -> RuleOutcome {
    matched(is_operator(text))
}

fn constant_rule(text: &str) -> RuleOutcome {
    match recognize_constant(text) {
        Ok(Some(_)) => RuleOutcome::Match,
        Ok(None) => RuleOutcome::NoMatch,
        Err(error) => RuleOutcome::Rejected(error),
    }
}
