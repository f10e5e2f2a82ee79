use core::{fmt, str::FromStr};

use crate::error::UnknownOption;

/// Configuration options for [`decode`](crate::decode).
///
/// Options are read-only for the duration of a decode call, so one value can
/// be shared freely between threads.
///
/// # Examples
///
/// ```rust
/// use strictjson::{DecodeOption, DecodeOptions};
///
/// let options = DecodeOptions::default().with_bigint_as_string(true);
/// assert!(options.get(DecodeOption::BigIntAsString));
///
/// let parsed: DecodeOptions = ["BIGINT_AS_STRING", "OBJECT_AS_ARRAY"]
///     .iter()
///     .map(|key| key.parse::<DecodeOption>())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert!(parsed.object_as_array);
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether integers outside `[-2^32, 2^32)` are returned as their exact
    /// decimal text ([`Value::BigInt`](crate::Value::BigInt)) instead of an
    /// approximate [`Value::Float`](crate::Value::Float).
    ///
    /// Numbers with a fraction or exponent are always floats.
    ///
    /// # Default
    ///
    /// `false`
    pub bigint_as_string: bool,

    /// Whether [`materialize`](crate::materialize) hands objects to the
    /// factory as arrays of `[key, value]` entries instead of keyed objects.
    ///
    /// The decoder itself always produces [`Value::Object`](crate::Value::Object).
    ///
    /// # Default
    ///
    /// `false`
    pub object_as_array: bool,
}

impl DecodeOptions {
    /// Builds options by looking up every key; absent keys should map to
    /// `false`.
    pub fn from_lookup(mut lookup: impl FnMut(DecodeOption) -> bool) -> Self {
        let mut options = Self::default();
        for key in DecodeOption::ALL {
            options.set(key, lookup(key));
        }
        options
    }

    #[must_use]
    pub fn get(&self, key: DecodeOption) -> bool {
        match key {
            DecodeOption::BigIntAsString => self.bigint_as_string,
            DecodeOption::ObjectAsArray => self.object_as_array,
        }
    }

    pub fn set(&mut self, key: DecodeOption, value: bool) {
        match key {
            DecodeOption::BigIntAsString => self.bigint_as_string = value,
            DecodeOption::ObjectAsArray => self.object_as_array = value,
        }
    }

    #[must_use]
    pub fn with_bigint_as_string(mut self, value: bool) -> Self {
        self.bigint_as_string = value;
        self
    }

    #[must_use]
    pub fn with_object_as_array(mut self, value: bool) -> Self {
        self.object_as_array = value;
        self
    }
}

/// Enabling every listed key.
impl FromIterator<DecodeOption> for DecodeOptions {
    fn from_iter<I: IntoIterator<Item = DecodeOption>>(iter: I) -> Self {
        let mut options = Self::default();
        for key in iter {
            options.set(key, true);
        }
        options
    }
}

/// The boolean keys recognized by [`DecodeOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeOption {
    /// `BIGINT_AS_STRING`
    BigIntAsString,
    /// `OBJECT_AS_ARRAY`
    ObjectAsArray,
}

impl DecodeOption {
    pub const ALL: [Self; 2] = [Self::BigIntAsString, Self::ObjectAsArray];

    /// The canonical key name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BigIntAsString => "BIGINT_AS_STRING",
            Self::ObjectAsArray => "OBJECT_AS_ARRAY",
        }
    }
}

impl fmt::Display for DecodeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecodeOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| UnknownOption(s.to_owned()))
    }
}
