//! Decoding of four-digit `\uXXXX` escapes.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit. Code units in the
//! surrogate range are not characters on their own; [`combine_surrogates`]
//! joins a high/low pair into the scalar value it encodes.
//!
//! # Errors
//!
//! - Feeding a non-hexadecimal character returns
//!   [`SyntaxError::InvalidHexSequence`].
//! - Completing a sequence with fewer than four digits (the input ran out)
//!   also returns [`SyntaxError::InvalidHexSequence`].

use crate::error::SyntaxError;

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Accumulates four hexadecimal digits into a UTF-16 code unit.
#[derive(Debug, Default)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u32,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Clears any accumulated digits.
    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(c: char) -> Option<u32> {
        c.to_digit(16)
    }

    /// Feeds a single hexadecimal digit.
    ///
    /// Returns `Ok(None)` until four digits have been seen, then the code
    /// unit they spell, after which the buffer is empty again.
    pub fn feed(&mut self, c: char) -> Result<Option<u32>, SyntaxError> {
        let d = Self::hex_val(c).ok_or(SyntaxError::InvalidHexSequence)?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }

    /// Decodes a complete four-digit sequence.
    pub fn decode(&mut self, digits: &str) -> Result<u32, SyntaxError> {
        self.reset();
        for c in digits.chars() {
            if let Some(unit) = self.feed(c)? {
                return Ok(unit);
            }
        }
        self.reset();
        Err(SyntaxError::InvalidHexSequence)
    }
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u32) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

/// Joins a UTF-16 surrogate pair; `None` unless `high` and `low` are a high
/// and a low surrogate respectively.
pub(crate) fn combine_surrogates(high: u32, low: u32) -> Option<char> {
    if !is_high_surrogate(high) || !LOW_SURROGATES.contains(&low) {
        return None;
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}
