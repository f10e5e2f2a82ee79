//! A strict [RFC 7159] JSON decoder with line/column diagnostics.
//!
//! The decoder turns one complete JSON text into a [`Value`] tree, or fails
//! with a [`DecodeError`] pointing at the offending character. Nothing outside
//! the grammar is accepted: no comments, no trailing commas, no leading zeros,
//! no raw control characters in strings, and nothing after the top-level
//! value.
//!
//! ```rust
//! use strictjson::{DecodeOptions, Value, decode};
//!
//! let value = decode(r#"{"a":1,"b":[true,false,null]}"#, DecodeOptions::default()).unwrap();
//! assert_eq!(value.get("a"), Some(&Value::Integer(1)));
//!
//! let err = decode("{\"a\":1,\r\n}", DecodeOptions::default()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Closing bracket after comma is not permitted at line 2, column 1"
//! );
//! ```
//!
//! [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159

#![allow(missing_docs)]

mod error;
mod escape_buffer;
mod factory;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{DecodeError, SyntaxError, UnknownOption};
pub use factory::{JsonFactory, StdFactory, materialize};
pub use options::{DecodeOption, DecodeOptions};
pub use parser::LogicalChar;
pub use value::{Array, Map, Value};

use parser::Cursor;

/// Decodes a complete JSON text.
///
/// # Errors
///
/// Returns the first syntax error found; no partial value is produced.
pub fn decode(text: &str, options: DecodeOptions) -> Result<Value, DecodeError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = text.len(), ?options, "decoding JSON text");

    let mut cursor = Cursor::new(text, options);
    traced(parser::parse_root(&mut cursor))
}

/// Decodes a complete JSON text from UTF-8 bytes.
///
/// # Errors
///
/// As [`decode`], plus [`SyntaxError::InvalidUtf8`] at the position of the
/// first byte sequence that is not valid UTF-8.
pub fn decode_slice(bytes: &[u8], options: DecodeOptions) -> Result<Value, DecodeError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = bytes.len(), ?options, "decoding JSON bytes");

    let result = Cursor::from_bytes(bytes, options).and_then(|mut cursor| parser::parse_root(&mut cursor));
    traced(result)
}

/// Decodes `text` and builds `factory`'s representation of the result.
///
/// # Errors
///
/// As [`decode`].
pub fn decode_with<F: JsonFactory>(text: &str, options: DecodeOptions, factory: &F) -> Result<F::Any, DecodeError> {
    decode(text, options).map(|value| materialize(value, &options, factory))
}

#[inline]
fn traced(result: Result<Value, DecodeError>) -> Result<Value, DecodeError> {
    #[cfg(feature = "tracing")]
    if let Err(err) = &result {
        tracing::debug!(line = err.line, column = err.column, error = %err.kind(), "JSON decode failed");
    }
    result
}
