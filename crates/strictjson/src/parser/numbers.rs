use super::cursor::Cursor;
use crate::{
    Value,
    error::{DecodeError, SyntaxError},
};

/// Integers in `[-INTEGER_LIMIT, INTEGER_LIMIT)` decode as [`Value::Integer`].
pub(crate) const INTEGER_LIMIT: i64 = 1 << 32;

/// Lexical hint so classification can distinguish ints vs floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Float(&'a str),   // has '.' or exponent
}

impl NumberLexeme<'_> {
    /// Picks the value representation for a lexically valid number.
    ///
    /// Out-of-range integers become their decimal text when
    /// `bigint_as_string` is set and a float approximation otherwise.
    fn classify(self, bigint_as_string: bool) -> Result<Value, core::num::ParseFloatError> {
        match self {
            Self::Float(text) => text.parse().map(Value::Float),
            Self::Integer(text) => match text.parse::<i64>() {
                Ok(n) if (-INTEGER_LIMIT..INTEGER_LIMIT).contains(&n) => Ok(Value::Integer(n)),
                _ if bigint_as_string => Ok(Value::BigInt(text.to_owned())),
                _ => text.parse().map(Value::Float),
            },
        }
    }
}

/// `number = [ "-" ] int [ frac ] [ exp ]`
pub(crate) fn parse_number(cursor: &mut Cursor) -> Result<Value, DecodeError> {
    let mut text = String::new();
    let mut float = false;

    if cursor.current_char() == Some('-') {
        cursor.advance()?;
        text.push('-');
    }

    parse_integral(cursor, &mut text)?;

    if cursor.current_char() == Some('.') {
        cursor.advance()?;
        text.push('.');
        float = true;
        parse_digits(cursor, &mut text)?;
    }

    if let Some(e @ ('e' | 'E')) = cursor.current_char() {
        cursor.advance()?;
        text.push(e);
        float = true;
        if let Some(sign @ ('+' | '-')) = cursor.current_char() {
            cursor.advance()?;
            text.push(sign);
        }
        parse_digits(cursor, &mut text)?;
    }

    let lexeme = if float {
        NumberLexeme::Float(&text)
    } else {
        NumberLexeme::Integer(&text)
    };
    lexeme
        .classify(cursor.options.bigint_as_string)
        .map_err(|_| cursor.error(SyntaxError::InvalidNumber))
}

fn parse_integral(cursor: &mut Cursor, text: &mut String) -> Result<(), DecodeError> {
    if cursor.current_char() != Some('0') {
        // A first digit of 1-9 followed by any digits.
        return parse_digits(cursor, text);
    }
    if is_leading_zero(&cursor.peek_sequence(2)) {
        return Err(cursor.error(SyntaxError::LeadingZero));
    }
    cursor.advance()?;
    text.push('0');
    Ok(())
}

fn is_leading_zero(pair: &str) -> bool {
    let mut chars = pair.chars();
    chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// One or more ASCII digits.
fn parse_digits(cursor: &mut Cursor, text: &mut String) -> Result<(), DecodeError> {
    if !cursor.current_char().is_some_and(|c| c.is_ascii_digit()) {
        return Err(cursor.error(SyntaxError::InvalidNumber));
    }
    while let Some(c) = cursor.current_char().filter(char::is_ascii_digit) {
        cursor.advance()?;
        text.push(c);
    }
    Ok(())
}
