use thiserror::Error;

use crate::parser::LogicalChar;

/// A decode failure, located at the character where decoding stopped.
///
/// `line` and `column` are 1-based and count logical characters, so a `\r\n`
/// pair occupies a single column. The rendered form is
/// `"<message> at line <line>, column <column>"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line}, column {column}")]
pub struct DecodeError {
    pub(crate) kind: SyntaxError,
    /// Line of the offending character.
    pub line: u32,
    /// Column of the offending character.
    pub column: u32,
}

impl DecodeError {
    /// The class of failure.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }

    /// The message without its position suffix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Every way a JSON text can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("Unexpected end of JSON")]
    UnexpectedEndOfInput,
    #[error("'{found}' is not allowed (expected: {})", expected_list(.expected))]
    UnexpectedToken {
        found: LogicalChar,
        expected: &'static [char],
    },
    #[error("Invalid value format")]
    InvalidValue,
    /// A `t`, `f` or `n` that does not start `true`, `false` or `null`.
    #[error("Unexpected character found")]
    InvalidLiteral,
    #[error("Unexpected character '{0}' after JSON value")]
    TrailingCharacters(LogicalChar),
    #[error("Unicode code point %x{0:x} is not allowed for string")]
    ControlCharacter(u32),
    #[error("Invalid escape sequence")]
    InvalidEscape,
    #[error("Invalid hexadecimal sequence")]
    InvalidHexSequence,
    #[error("Invalid surrogate pair")]
    InvalidSurrogate,
    #[error("End of quotation mark not found")]
    UnterminatedString,
    #[error("Integral part must not start with 0")]
    LeadingZero,
    #[error("Invalid number format")]
    InvalidNumber,
    #[error("Closing bracket after comma is not permitted")]
    TrailingComma,
    #[error("Invalid UTF-8 sequence")]
    InvalidUtf8,
    #[error("Maximum nesting depth exceeded")]
    DepthLimitExceeded,
}

fn expected_list(tokens: &[char]) -> String {
    tokens
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returned when parsing a [`DecodeOption`](crate::DecodeOption) from an
/// unrecognized key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown decode option '{0}'")]
pub struct UnknownOption(pub String);
