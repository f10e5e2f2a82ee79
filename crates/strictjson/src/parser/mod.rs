//! Recursive-descent decoder, one function per JSON grammar production.
//!
//! Every production reads from and advances the same [`Cursor`]. Array and
//! object decoding recurse through [`parse_value`], so recursion depth follows
//! the nesting depth of the input (capped by the cursor).
//!
//! Containers share one state machine:
//!
//! ```text
//! ExpectValue -> HaveValue -> ExpectSeparatorOrEnd -+-> ExpectValue   (',')
//!                                                   +-> Terminal      (']' / '}')
//! ```
//!
//! An empty container goes straight from its opening bracket to `Terminal`.

mod cursor;
mod numbers;
mod string;


pub(crate) use cursor::Cursor;
pub use cursor::LogicalChar;

use crate::{
    Array, Map, Value,
    error::{DecodeError, SyntaxError},
};

const ARRAY_OPEN: &[char] = &['['];
const ARRAY_SEPARATORS: &[char] = &[',', ']'];
const OBJECT_OPEN: &[char] = &['{'];
const OBJECT_SEPARATORS: &[char] = &[',', '}'];
const NAME_SEPARATOR: &[char] = &[':'];

/// `JSON-text = ws value ws`, with nothing after it.
pub(crate) fn parse_root(cursor: &mut Cursor) -> Result<Value, DecodeError> {
    skip_whitespace(cursor)?;
    let value = parse_value(cursor)?;
    skip_whitespace(cursor)?;
    if let Some(ch) = cursor.current() {
        return Err(cursor.error(SyntaxError::TrailingCharacters(ch)));
    }
    Ok(value)
}

fn skip_whitespace(cursor: &mut Cursor) -> Result<(), DecodeError> {
    while cursor.current().is_some_and(LogicalChar::is_whitespace) {
        cursor.advance()?;
    }
    Ok(())
}

/// Consumes one structural character from `expected`, along with the
/// whitespace on either side, and returns it.
fn expect_token(cursor: &mut Cursor, expected: &'static [char]) -> Result<char, DecodeError> {
    skip_whitespace(cursor)?;
    let Some(found) = cursor.current() else {
        return Err(cursor.error(SyntaxError::UnexpectedEndOfInput));
    };
    let matched = match found.as_char() {
        Some(c) if expected.contains(&c) => c,
        _ => return Err(cursor.error(SyntaxError::UnexpectedToken { found, expected })),
    };
    cursor.advance()?;
    skip_whitespace(cursor)?;
    Ok(matched)
}

fn at(cursor: &Cursor, c: char) -> bool {
    cursor.current() == Some(LogicalChar::Char(c))
}

pub(crate) fn parse_value(cursor: &mut Cursor) -> Result<Value, DecodeError> {
    let Some(current) = cursor.current() else {
        return Err(cursor.error(SyntaxError::UnexpectedEndOfInput));
    };
    match current.as_char() {
        Some('f') => expect_literal(cursor, "false").map(|()| Value::Boolean(false)),
        Some('n') => expect_literal(cursor, "null").map(|()| Value::Null),
        Some('t') => expect_literal(cursor, "true").map(|()| Value::Boolean(true)),
        Some('"') => string::parse_string(cursor).map(Value::String),
        Some('{') => parse_object(cursor).map(Value::Object),
        Some('[') => parse_array(cursor).map(Value::Array),
        Some('-' | '0'..='9') => numbers::parse_number(cursor),
        _ => Err(cursor.error(SyntaxError::InvalidValue)),
    }
}

fn expect_literal(cursor: &mut Cursor, literal: &str) -> Result<(), DecodeError> {
    // Literals are ASCII, so bytes and code points agree.
    if cursor.peek_sequence(literal.len()) != literal {
        return Err(cursor.error(SyntaxError::InvalidLiteral));
    }
    cursor.skip(literal.len())
}

fn parse_array(cursor: &mut Cursor) -> Result<Array, DecodeError> {
    cursor.enter()?;
    expect_token(cursor, ARRAY_OPEN)?;

    let mut array = Array::new();
    if at(cursor, ']') {
        expect_token(cursor, ARRAY_SEPARATORS)?;
        cursor.leave();
        return Ok(array);
    }

    loop {
        array.push(parse_value(cursor)?);
        if expect_token(cursor, ARRAY_SEPARATORS)? == ']' {
            break;
        }
    }
    cursor.leave();
    Ok(array)
}

fn parse_object(cursor: &mut Cursor) -> Result<Map, DecodeError> {
    cursor.enter()?;
    expect_token(cursor, OBJECT_OPEN)?;

    let mut map = Map::new();
    if at(cursor, '}') {
        expect_token(cursor, OBJECT_SEPARATORS)?;
        cursor.leave();
        return Ok(map);
    }

    loop {
        if at(cursor, '}') {
            return Err(cursor.error(SyntaxError::TrailingComma));
        }
        let (key, value) = parse_member(cursor)?;
        // Later duplicates overwrite the value but keep the first position.
        map.insert(key, value);
        if expect_token(cursor, OBJECT_SEPARATORS)? == '}' {
            break;
        }
    }
    cursor.leave();
    Ok(map)
}

/// `member = string name-separator value`
fn parse_member(cursor: &mut Cursor) -> Result<(String, Value), DecodeError> {
    let key = string::parse_string(cursor)?;
    expect_token(cursor, NAME_SEPARATOR)?;
    let value = parse_value(cursor)?;
    Ok((key, value))
}
