use super::cursor::{Cursor, LogicalChar};
use crate::{
    error::{DecodeError, SyntaxError},
    escape_buffer::{UnicodeEscapeBuffer, combine_surrogates, is_high_surrogate},
};

/// Decodes a quoted string starting at the cursor's opening `"`.
pub(crate) fn parse_string(cursor: &mut Cursor) -> Result<String, DecodeError> {
    match cursor.current() {
        Some(LogicalChar::Char('"')) => {
            cursor.advance()?;
        }
        Some(found) => {
            return Err(cursor.error(SyntaxError::UnexpectedToken {
                found,
                expected: &['"'],
            }));
        }
        None => return Err(cursor.error(SyntaxError::UnexpectedEndOfInput)),
    }

    let mut out = String::new();
    let mut escaped = false;
    while let Some(c) = cursor.current_char() {
        if escaped {
            parse_escape(cursor, &mut out)?;
            escaped = false;
            continue;
        }
        if u32::from(c) < 0x20 {
            return Err(cursor.error(SyntaxError::ControlCharacter(c.into())));
        }
        match cursor.advance()? {
            LogicalChar::Char('"') => return Ok(out),
            LogicalChar::Char('\\') => escaped = true,
            ch => ch.push_to(&mut out),
        }
    }
    Err(cursor.error(SyntaxError::UnterminatedString))
}

/// Decodes the escape whose backslash has already been consumed.
fn parse_escape(cursor: &mut Cursor, out: &mut String) -> Result<(), DecodeError> {
    let decoded = match cursor.current_char() {
        Some('"') => '"',
        Some('\\') => '\\',
        Some('/') => '/',
        Some('b') => '\u{0008}',
        Some('f') => '\u{000C}',
        Some('n') => '\n',
        Some('r') => '\r',
        Some('t') => '\t',
        Some('u') => {
            cursor.advance()?;
            out.push(parse_unicode_escape(cursor)?);
            return Ok(());
        }
        _ => return Err(cursor.error(SyntaxError::InvalidEscape)),
    };
    cursor.advance()?;
    out.push(decoded);
    Ok(())
}

/// Decodes `XXXX` after `\u`, pulling in the trailing `\uXXXX` when the first
/// unit is a high surrogate.
fn parse_unicode_escape(cursor: &mut Cursor) -> Result<char, DecodeError> {
    let mut buffer = UnicodeEscapeBuffer::new();
    let unit = read_code_unit(cursor, &mut buffer)?;
    if is_high_surrogate(unit) {
        if cursor.peek_sequence(2) != "\\u" {
            return Err(cursor.error(SyntaxError::InvalidSurrogate));
        }
        cursor.skip(2)?;
        let low = read_code_unit(cursor, &mut buffer)?;
        return combine_surrogates(unit, low).ok_or_else(|| cursor.error(SyntaxError::InvalidSurrogate));
    }
    // Only a lone low surrogate fails here.
    char::from_u32(unit).ok_or_else(|| cursor.error(SyntaxError::InvalidSurrogate))
}

fn read_code_unit(cursor: &mut Cursor, buffer: &mut UnicodeEscapeBuffer) -> Result<u32, DecodeError> {
    let unit = buffer
        .decode(&cursor.peek_sequence(4))
        .map_err(|kind| cursor.error(kind))?;
    cursor.skip(4)?;
    Ok(unit)
}
