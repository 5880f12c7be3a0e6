//! Constant recognition and numeric validation.
//!
//! Sub-rules are tried in a fixed order: string, character, hexadecimal,
//! binary, octal, then decimal/floating. The first sub-rule whose shape
//! matches decides the outcome, so `0x` is an incomplete hexadecimal
//! constant rather than a decimal with a stray `x`.

use thiserror::Error;

use crate::chars::{is_binary_digit, is_octal_digit};

/// Why a lexeme shaped like a constant was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstantError {
    #[error("Incomplete hexadecimal constant '{text}'")]
    IncompleteHex { text: String },

    #[error("Invalid hexadecimal constant '{text}' (invalid digit '{digit}')")]
    InvalidHexDigit { text: String, digit: char },

    #[error("Incomplete binary constant '{text}'")]
    IncompleteBinary { text: String },

    #[error("Invalid binary constant '{text}' (invalid digit '{digit}')")]
    InvalidBinaryDigit { text: String, digit: char },

    #[error("Invalid octal constant '{text}' (digit '{digit}' out of range)")]
    OctalDigitOutOfRange { text: String, digit: char },

    #[error("Multiple decimal points in '{text}'")]
    MultipleDecimalPoints { text: String },

    #[error("Multiple exponents in '{text}'")]
    MultipleExponents { text: String },

    #[error("Exponent without preceding digits in '{text}'")]
    ExponentWithoutDigits { text: String },

    #[error("Invalid exponent format in '{text}'")]
    InvalidExponent { text: String },

    #[error("Invalid character '{character}' in numeric constant '{text}'")]
    InvalidCharacter { text: String, character: char },
}

/// Which constant sub-rule accepted a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstantForm {
    String,
    Character,
    Hexadecimal,
    Binary,
    Octal,
    Decimal,
}

/// Decides whether `text` is a constant.
///
/// Returns `Ok(Some(form))` when accepted, `Ok(None)` when the text simply
/// isn't a constant (for example it is empty or has no digits), and `Err`
/// when it is a malformed one.
///
/// ```
/// use clex_lex::classify::{recognize_constant, ConstantError, ConstantForm};
///
/// assert_eq!(recognize_constant("0x1F"), Ok(Some(ConstantForm::Hexadecimal)));
/// assert_eq!(recognize_constant(""), Ok(None));
/// assert_eq!(
///     recognize_constant("089").unwrap_err().to_string(),
///     "Invalid octal constant '089' (digit '8' out of range)",
/// );
/// ```
pub fn recognize_constant(text: &str) -> Result<Option<ConstantForm>, ConstantError> {
    if text.is_empty() {
        return Ok(None);
    }

    if is_quoted(text, '"') {
        return Ok(Some(ConstantForm::String));
    }
    if is_quoted(text, '\'') && matches!(text.chars().count(), 3 | 4) {
        return Ok(Some(ConstantForm::Character));
    }

    if let Some(digits) = strip_radix_prefix(text, 'x') {
        return validate_digits(digits, |c| c.is_ascii_hexdigit())
            .map(|()| Some(ConstantForm::Hexadecimal))
            .map_err(|digit| match digit {
                None => ConstantError::IncompleteHex { text: text.to_string() },
                Some(digit) => ConstantError::InvalidHexDigit { text: text.to_string(), digit },
            });
    }

    if let Some(digits) = strip_radix_prefix(text, 'b') {
        return validate_digits(digits, is_binary_digit)
            .map(|()| Some(ConstantForm::Binary))
            .map_err(|digit| match digit {
                None => ConstantError::IncompleteBinary { text: text.to_string() },
                Some(digit) => ConstantError::InvalidBinaryDigit { text: text.to_string(), digit },
            });
    }

    if let Some(rest) = text.strip_prefix('0') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return match rest.chars().find(|&c| !is_octal_digit(c)) {
                None => Ok(Some(ConstantForm::Octal)),
                Some(digit) => Err(ConstantError::OctalDigitOutOfRange { text: text.to_string(), digit }),
            };
        }
    }

    validate_decimal(text)
}

/// At least two characters, opening and closing with `quote`.
fn is_quoted(text: &str, quote: char) -> bool {
    text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote)
}

/// `0x...`/`0X...` (or the `b` analogue) minus its prefix.
fn strip_radix_prefix(text: &str, radix: char) -> Option<&str> {
    let rest = text.strip_prefix('0')?;
    rest.strip_prefix(radix)
        .or_else(|| rest.strip_prefix(radix.to_ascii_uppercase()))
}

/// `Err(None)` for no digits, `Err(Some(c))` for the first bad digit.
fn validate_digits(digits: &str, is_digit: impl Fn(char) -> bool) -> Result<(), Option<char>> {
    if digits.is_empty() {
        return Err(None);
    }
    match digits.chars().find(|&c| !is_digit(c)) {
        None => Ok(()),
        Some(bad) => Err(Some(bad)),
    }
}

fn validate_decimal(text: &str) -> Result<Option<ConstantForm>, ConstantError> {
    let owned = || text.to_string();
    let mut chars = text.chars().peekable();
    let mut dots = 0;
    let mut has_exponent = false;
    let mut has_digit = false;

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => has_digit = true,
            '.' => {
                dots += 1;
                if dots > 1 {
                    return Err(ConstantError::MultipleDecimalPoints { text: owned() });
                }
            },
            'e' | 'E' => {
                if has_exponent {
                    return Err(ConstantError::MultipleExponents { text: owned() });
                }
                if !has_digit {
                    return Err(ConstantError::ExponentWithoutDigits { text: owned() });
                }
                has_exponent = true;
                chars.next_if(|&c| c == '+' || c == '-');
                if !chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                    return Err(ConstantError::InvalidExponent { text: owned() });
                }
            },
            character => {
                return Err(ConstantError::InvalidCharacter { text: owned(), character });
            },
        }
    }

    Ok(has_digit.then_some(ConstantForm::Decimal))
}
