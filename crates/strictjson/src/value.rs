//! JSON value types and utilities.
//!
//! This module defines the [`Value`] enum, the result of a decode, and the
//! helper that escapes strings for its compact [`Display`](core::fmt::Display)
//! rendering.
//!
use indexmap::IndexMap;

/// Object members in insertion order.
pub type Map = IndexMap<String, Value>;
pub type Array = Vec<Value>;

/// A decoded JSON value as defined by [RFC 7159].
///
/// Numbers are split by how they were written: integers within
/// `[-2^32, 2^32)` are [`Integer`], numbers with a fraction or exponent are
/// [`Float`], and larger integers are either [`Float`] approximations or,
/// with [`DecodeOptions::bigint_as_string`], their exact text in [`BigInt`].
///
/// # Examples
///
/// ```
/// use strictjson::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// map.insert("n".to_string(), Value::Integer(1));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value","n":1}"#);
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
/// [`Integer`]: Value::Integer
/// [`Float`]: Value::Float
/// [`BigInt`]: Value::BigInt
/// [`DecodeOptions::bigint_as_string`]: crate::DecodeOptions::bigint_as_string
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    /// An out-of-range integer kept as its decimal text.
    BigInt(String),
    String(String),
    Array(Array),
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` for [`Integer`], [`Float`] and [`BigInt`].
    ///
    /// [`Integer`]: Value::Integer
    /// [`Float`]: Value::Float
    /// [`BigInt`]: Value::BigInt
    ///
    /// # Examples
    ///
    /// ```
    /// use strictjson::Value;
    ///
    /// assert!(Value::Integer(42).is_number());
    /// assert!(Value::BigInt("99999999999999999999".into()).is_number());
    /// assert!(!Value::String("42".into()).is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..) | Self::BigInt(..))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Looks up `key` if this is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// This function writes to the provided formatter, replacing quotes,
/// backslashes, control characters (<= U+001F) and the Unicode line
/// separators with their JSON escape sequences.
pub(crate) fn write_escaped_string<W: core::fmt::Write>(src: &str, f: &mut W) -> core::fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{2028}' | '\u{2029}' => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            // Only the BMP needs escaping here: JSON requires exactly 4 hex
            // digits, and every control character lies below U+FFFF.
            c if c.is_ascii_control() || c.is_control() && c as u32 <= 0xFFFF => {
                write!(f, "\\u{:04X}", c as u32)?;
            }
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Compact rendering: no whitespace, members in insertion order.
///
/// Floats always carry a fraction or exponent so the text decodes back to a
/// [`Value::Float`]. Non-finite floats have no JSON form and render as Rust
/// does (`inf`, `NaN`).
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n:?}"),
            Value::BigInt(digits) => f.write_str(digits),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped_string(s, f)?;
                f.write_str("\"")
            }
            Value::Array(arr) => {
                f.write_str("[")?;
                let mut first = true;
                for v in arr {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    f.write_str("\"")?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
