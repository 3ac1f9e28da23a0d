//! Decoding of `\uXXXX` escapes.
//!
//! [`UnicodeEscapeBuffer`] accumulates exactly four ASCII hexadecimal digits
//! (`0-9`, `A-F`, `a-f`) into one UTF-16 code unit. [`SurrogateJoiner`] turns
//! a sequence of code units into characters, pairing a high surrogate with an
//! immediately following low surrogate.
//!
//! # Errors
//!
//! Feeding a non-hexadecimal character returns
//! [`SyntaxError::InvalidUnicodeEscapeChar`]. Unpaired surrogates are not an
//! error; they decode to U+FFFD.

use alloc::string::String;

use crate::parser::error::SyntaxError;

const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

#[derive(Debug, Default)]
/// Accumulates up to four hexadecimal digits into a UTF-16 code unit.
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn hex_val(c: char) -> Option<u16> {
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one hexadecimal digit.
    ///
    /// - Returns `Ok(None)` while fewer than four digits have been provided.
    /// - Returns `Ok(Some(unit))` on the fourth digit and resets the buffer.
    /// - Returns `Err` if `c` is not an ASCII hex digit.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<u16>, SyntaxError> {
        let d = Self::hex_val(c).ok_or(SyntaxError::InvalidUnicodeEscapeChar(c))?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        *self = Self::default();
        Ok(Some(unit))
    }
}

/// Joins decoded UTF-16 code units into characters.
///
/// A high surrogate is held back until the next code unit arrives. Anything
/// other than a low surrogate arriving next (another escape, a literal
/// character, the end of the string) releases it as U+FFFD.
#[derive(Debug, Default)]
pub(crate) struct SurrogateJoiner {
    high: Option<u16>,
}

impl SurrogateJoiner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, dst: &mut String, unit: u16) {
        if HIGH_SURROGATES.contains(&unit) {
            self.flush(dst);
            self.high = Some(unit);
            return;
        }

        if LOW_SURROGATES.contains(&unit) {
            match self.high.take() {
                Some(high) => {
                    let code = 0x10000
                        + ((u32::from(high) - 0xD800) << 10)
                        + (u32::from(unit) - 0xDC00);
                    dst.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                None => dst.push(char::REPLACEMENT_CHARACTER),
            }
            return;
        }

        self.flush(dst);
        dst.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    /// Releases a held high surrogate as U+FFFD.
    pub(crate) fn flush(&mut self, dst: &mut String) {
        if self.high.take().is_some() {
            dst.push(char::REPLACEMENT_CHARACTER);
        }
    }
}
