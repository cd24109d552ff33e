/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Radix validation, the 36-symbol digit alphabet and integer numerals.
//!
//! A [`Radix`] can only be obtained through [`Radix::new`], so every function
//! that takes one can index [`DIGITS`] with any value `< radix` without a
//! bounds check failing.

use std::fmt;

use crate::error::FractionError;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (`0-9` plus `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Digit value → display symbol. Lowercase; callers upper-case the final
/// result.
pub const DIGITS: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
    'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

// ── Radix ─────────────────────────────────────────────────────────────────────

/// A radix known to lie in `[MIN_RADIX, MAX_RADIX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// Validate `radix`.
    ///
    /// # Errors
    /// [`FractionError::InvalidRadix`] when `radix` is outside `[2, 36]`.
    pub fn new(radix: u32) -> Result<Self, FractionError> {
        if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(FractionError::InvalidRadix(i64::from(radix)))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Symbol for a single digit value.
    ///
    /// `value` must be `< self`; the digit generator guarantees this because
    /// every digit is `remainder * radix / denominator` with
    /// `remainder < denominator`.
    pub fn digit(self, value: u64) -> char {
        debug_assert!(value < u64::from(self.0), "digit {value} out of range");
        DIGITS[value as usize]
    }
}

impl TryFrom<u32> for Radix {
    type Error = FractionError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Numerals ──────────────────────────────────────────────────────────────────

/// Render a non-negative integer in `radix`, lowercase, without leading zeros.
///
/// `0` renders as `"0"`.
pub fn to_numeral(mut value: u64, radix: Radix) -> String {
    if value == 0 {
        return String::from("0");
    }

    let base = u64::from(radix.get());
    let mut digits = Vec::new();
    while value != 0 {
        digits.push(radix.digit(value % base));
        value /= base;
    }
    digits.iter().rev().collect()
}

/// Parse a numeral written in `radix`.
///
/// Digits are case-insensitive (`"x"` and `"X"` are both 33) and an optional
/// leading `+` or `-` is accepted.
///
/// # Errors
/// [`FractionError::ParseFailure`] for an empty string, a digit outside the
/// radix, or a value that does not fit in `i64`.
pub fn parse_numeral(text: &str, radix: Radix) -> Result<i64, FractionError> {
    i64::from_str_radix(text, radix.get()).map_err(|_| FractionError::ParseFailure {
        numeral: text.to_string(),
        radix: radix.get(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
