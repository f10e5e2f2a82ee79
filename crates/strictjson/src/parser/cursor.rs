//! Position-tracking cursor over the code points of one input text.
//!
//! The input is decoded to `char`s once, up front, so every lookahead and
//! every position is measured in code points. `line`/`column` always describe
//! the character at `index`, with a `\r\n` pair treated as a single logical
//! character.

use core::fmt::{self, Write};

use crate::{
    DecodeOptions,
    error::{DecodeError, SyntaxError},
};

/// Containers nested deeper than this are rejected.
pub(crate) const MAX_DEPTH: usize = 512;

/// One character for position-tracking purposes.
///
/// A `\r` immediately followed by `\n` is collapsed into [`CrLf`]; every
/// other code point stands alone.
///
/// [`CrLf`]: LogicalChar::CrLf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalChar {
    Char(char),
    CrLf,
}

impl LogicalChar {
    /// The single code point, or `None` for a `\r\n` pair.
    #[must_use]
    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::CrLf => None,
        }
    }

    #[must_use]
    pub fn is_line_break(self) -> bool {
        matches!(self, Self::Char('\r' | '\n') | Self::CrLf)
    }

    /// JSON insignificant whitespace: space, tab, CR, LF.
    #[must_use]
    pub fn is_whitespace(self) -> bool {
        self.is_line_break() || matches!(self, Self::Char(' ' | '\t'))
    }

    /// Number of code points this character spans.
    fn width(self) -> usize {
        match self {
            Self::Char(_) => 1,
            Self::CrLf => 2,
        }
    }

    pub(crate) fn push_to(self, out: &mut String) {
        match self {
            Self::Char(c) => out.push(c),
            Self::CrLf => out.push_str("\r\n"),
        }
    }
}

// Diagnostics print invisible characters as escapes so messages stay on one
// line.
impl fmt::Display for LogicalChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Self::CrLf => return f.write_str("\\r\\n"),
            Self::Char(c) => c,
        };
        match c {
            '\u{0008}' => f.write_str("\\b"),
            '\u{000C}' => f.write_str("\\f"),
            '\n' => f.write_str("\\n"),
            '\r' => f.write_str("\\r"),
            '\t' => f.write_str("\\t"),
            '\0' => f.write_str("\\0"),
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32),
            c if c.is_whitespace() && !c.is_ascii_whitespace() => {
                write!(f, "\\u{:04X}", c as u32)
            }
            c => f.write_char(c),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    pub(crate) index: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    current: Option<LogicalChar>,
    pub(crate) options: DecodeOptions,
    depth: usize,
}

impl Cursor {
    pub(crate) fn new(text: &str, options: DecodeOptions) -> Self {
        Self::from_chars(text.chars().collect(), options)
    }

    /// Decodes `bytes` as UTF-8, failing at the position of the first
    /// invalid sequence.
    pub(crate) fn from_bytes(bytes: &[u8], options: DecodeOptions) -> Result<Self, DecodeError> {
        let mut chars = Vec::with_capacity(bytes.len());
        let mut rest = bytes;
        while !rest.is_empty() {
            let (ch, len) = bstr::decode_utf8(rest);
            let Some(ch) = ch else {
                // Walk the valid prefix so the error lands where a text
                // decode would have placed it.
                let mut prefix = Self::from_chars(chars, options);
                while prefix.has_next() {
                    prefix.advance()?;
                }
                return Err(prefix.error(SyntaxError::InvalidUtf8));
            };
            chars.push(ch);
            rest = &rest[len..];
        }
        Ok(Self::from_chars(chars, options))
    }

    fn from_chars(chars: Vec<char>, options: DecodeOptions) -> Self {
        let mut cursor = Self {
            chars,
            index: 0,
            line: 1,
            column: 1,
            current: None,
            options,
            depth: 0,
        };
        cursor.current = cursor.compute_current();
        cursor
    }

    fn compute_current(&self) -> Option<LogicalChar> {
        let &c = self.chars.get(self.index)?;
        if c == '\r' && self.chars.get(self.index + 1) == Some(&'\n') {
            Some(LogicalChar::CrLf)
        } else {
            Some(LogicalChar::Char(c))
        }
    }

    #[inline]
    pub(crate) fn has_next(&self) -> bool {
        self.index < self.chars.len()
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<LogicalChar> {
        self.current
    }

    /// The raw code point at `index`, without `\r\n` merging.
    #[inline]
    pub(crate) fn current_char(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    /// Consumes one logical character and returns it.
    pub(crate) fn advance(&mut self) -> Result<LogicalChar, DecodeError> {
        let Some(ch) = self.current else {
            return Err(self.error(SyntaxError::UnexpectedEndOfInput));
        };
        if ch.is_line_break() {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.index += ch.width();
        self.current = self.compute_current();
        Ok(ch)
    }

    /// The next `n` code points (fewer at end of input), without consuming
    /// them.
    pub(crate) fn peek_sequence(&self, n: usize) -> String {
        self.chars[self.index..].iter().take(n).collect()
    }

    /// Consumes exactly `n` code points that are known not to contain a line
    /// break.
    pub(crate) fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        if self.chars.len() - self.index < n {
            return Err(self.error(SyntaxError::UnexpectedEndOfInput));
        }
        self.index += n;
        self.column = self
            .column
            .saturating_add(u32::try_from(n).unwrap_or(u32::MAX));
        self.current = self.compute_current();
        Ok(())
    }

    pub(crate) fn error(&self, kind: SyntaxError) -> DecodeError {
        DecodeError {
            kind,
            line: self.line,
            column: self.column,
        }
    }

    /// Enters one container level; call before consuming its opening bracket.
    pub(crate) fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(SyntaxError::DepthLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
