/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Exact positional expansion of a rational number.
//!
//! The conversion is a four-stage pipeline of stateless functions:
//!
//! ```text
//! (n, d) ──reduce──► (n', d') ──pre_period_length──► k ──generate_fraction──► digits ──format_fraction──► ".PRE(PERIOD)"
//! ```
//!
//! [`Converter`] validates the inputs, renders the integer part and the sign,
//! and drives the pipeline.  It carries only an immutable digit limit, so one
//! instance can be shared freely between threads.
//!
//! # Example
//! ```rust
//! use fraction_finder::{to_radix_string, numerals_to_radix_string};
//!
//! assert_eq!(to_radix_string(43, 15, 10).unwrap(), "2.8(6)");
//! assert_eq!(numerals_to_radix_string("72", "X", 36).unwrap(), "7.P(39TGD)");
//! ```

pub mod digits;
pub mod format;
pub mod math;

use tracing::debug;

use crate::error::FractionError;
use crate::radix::{parse_numeral, to_numeral, Radix};
use digits::generate_fraction;
use format::format_fraction;
use math::{pre_period_length, reduce};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Default cap on fractional digits per conversion.
///
/// A prime denominator `p` coprime to the radix can have a period of `p - 1`
/// digits; the cap keeps a single call from allocating gigabytes.  Callers
/// that want a different bound use [`Converter::with_limit`].
pub const DEFAULT_DIGIT_LIMIT: usize = 1_000_000;

// ── Converter ─────────────────────────────────────────────────────────────────

/// Converts fractions to radix strings under a fixed digit limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    digit_limit: usize,
}

impl Converter {
    /// Create a converter with [`DEFAULT_DIGIT_LIMIT`].
    pub fn new() -> Self {
        Self {
            digit_limit: DEFAULT_DIGIT_LIMIT,
        }
    }

    /// Create a converter with a custom digit limit.
    pub fn with_limit(digit_limit: usize) -> Self {
        Self { digit_limit }
    }

    pub fn digit_limit(&self) -> usize {
        self.digit_limit
    }

    /// Expand `numerator / denominator` in `radix`.
    ///
    /// The result is the upper-cased integer part, followed by `.` and the
    /// fractional digits when the value is not an integer, with the repeating
    /// period in parentheses.  A negative value gets a leading `-`.
    ///
    /// # Errors
    /// * [`FractionError::InvalidRadix`] – `radix` outside `[2, 36]`.
    /// * [`FractionError::DivisionByZero`] – `denominator == 0`.
    /// * [`FractionError::ExpansionTooLong`] – more fractional digits than the
    ///   digit limit.
    pub fn convert(
        &self,
        numerator: i64,
        denominator: i64,
        radix: u32,
    ) -> Result<String, FractionError> {
        let radix = Radix::new(radix)?;
        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        let negative = numerator != 0 && (numerator < 0) != (denominator < 0);
        let sign = if negative { "-" } else { "" };
        let num = numerator.unsigned_abs();
        let den = denominator.unsigned_abs();

        let integer_part = to_numeral(num / den, radix).to_uppercase();
        if num % den == 0 {
            return Ok(format!("{sign}{integer_part}"));
        }

        let (g, num, den) = reduce(num, den);
        let pre_period = pre_period_length(den, radix);
        debug!(gcd = g, num, den, radix = radix.get(), pre_period, "reduced fraction");

        let digits = generate_fraction(num, den, radix, pre_period, self.digit_limit)?;
        Ok(format!(
            "{sign}{integer_part}{}",
            format_fraction(Some(&digits), pre_period)
        ))
    }

    /// Parse two numerals written in `radix`, then expand their quotient in
    /// the same radix.
    ///
    /// # Errors
    /// Everything [`convert`](Self::convert) returns, plus
    /// [`FractionError::ParseFailure`] if either numeral is malformed.  The
    /// radix is validated first.
    pub fn convert_numerals(
        &self,
        numerator: &str,
        denominator: &str,
        radix: u32,
    ) -> Result<String, FractionError> {
        let r = Radix::new(radix)?;
        let numerator = parse_numeral(numerator, r)?;
        let denominator = parse_numeral(denominator, r)?;
        self.convert(numerator, denominator, radix)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

// ── Free-function entry points ────────────────────────────────────────────────

/// [`Converter::convert`] with the default digit limit.
///
/// Besides the radix, parse and zero-denominator failures, this can return
/// [`FractionError::ExpansionTooLong`]: a denominator whose expansion needs
/// more than [`DEFAULT_DIGIT_LIMIT`] fractional digits (e.g. a prime near
/// 10^7 with a full-length period) is rejected rather than expanded.  Use
/// [`Converter::with_limit`] with a larger limit for such inputs.
pub fn to_radix_string(
    numerator: i64,
    denominator: i64,
    radix: u32,
) -> Result<String, FractionError> {
    Converter::new().convert(numerator, denominator, radix)
}

/// [`Converter::convert_numerals`] with the default digit limit; see
/// [`to_radix_string`] for when that limit is hit.
pub fn numerals_to_radix_string(
    numerator: &str,
    denominator: &str,
    radix: u32,
) -> Result<String, FractionError> {
    Converter::new().convert_numerals(numerator, denominator, radix)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── reference scenarios ───────────────────────────────────────────────────

    #[test]
    fn integer_result() {
        assert_eq!(to_radix_string(999, 9, 18).unwrap(), "63");
        assert_eq!(to_radix_string(1, 1, 10).unwrap(), "1");
    }

    #[test]
    fn purely_periodic_binary() {
        assert_eq!(to_radix_string(67, 7, 2).unwrap(), "1001.(100)");
    }

    #[test]
    fn mixed_decimal() {
        assert_eq!(to_radix_string(43, 15, 10).unwrap(), "2.8(6)");
    }

    #[test]
    fn radix_14_period_is_shortest_block() {
        // 9/13 in base 14 is 0.999..., so the period is the single digit 9
        assert_eq!(to_radix_string(100, 13, 14).unwrap(), "7.(9)");
    }

    #[test]
    fn numerals_radix_36() {
        assert_eq!(numerals_to_radix_string("72", "X", 36).unwrap(), "7.P(39TGD)");
        assert_eq!(numerals_to_radix_string("72", "x", 36).unwrap(), "7.P(39TGD)");
    }

    // ── shapes ────────────────────────────────────────────────────────────────

    #[test]
    fn terminating_fraction_has_no_parentheses() {
        assert_eq!(to_radix_string(1, 8, 10).unwrap(), "0.125");
        assert_eq!(to_radix_string(5, 2, 2).unwrap(), "10.1");
    }

    #[test]
    fn unreduced_input_is_reduced_first() {
        assert_eq!(to_radix_string(86, 30, 10).unwrap(), "2.8(6)");
        assert_eq!(to_radix_string(2, 6, 10).unwrap(), "0.(3)");
    }

    #[test]
    fn integer_part_is_uppercase() {
        assert_eq!(to_radix_string(511, 2, 16).unwrap(), "FF.8");
    }

    #[test]
    fn radix_with_repeated_prime_factor() {
        // terminating: prefix clamped to the digits produced
        assert_eq!(to_radix_string(1, 4, 4).unwrap(), "0.1");
        assert_eq!(to_radix_string(1, 3, 9).unwrap(), "0.3");
        // periodic: prefix is exactly pre_period_length digits
        assert_eq!(to_radix_string(1, 12, 4).unwrap(), "0.01(1)");
        assert_eq!(to_radix_string(1, 12, 16).unwrap(), "0.15(5)");
        assert_eq!(to_radix_string(1, 18, 9).unwrap(), "0.04(4)");
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(to_radix_string(0, 7, 10).unwrap(), "0");
    }

    // ── sign ──────────────────────────────────────────────────────────────────

    #[test]
    fn negative_operands() {
        assert_eq!(to_radix_string(-43, 15, 10).unwrap(), "-2.8(6)");
        assert_eq!(to_radix_string(43, -15, 10).unwrap(), "-2.8(6)");
        assert_eq!(to_radix_string(-43, -15, 10).unwrap(), "2.8(6)");
        assert_eq!(to_radix_string(-1, 3, 10).unwrap(), "-0.(3)");
        assert_eq!(to_radix_string(0, -5, 10).unwrap(), "0");
    }

    #[test]
    fn extreme_values() {
        assert_eq!(to_radix_string(i64::MIN, 1, 16).unwrap(), "-8000000000000000");
        assert_eq!(to_radix_string(i64::MIN, i64::MIN, 10).unwrap(), "1");
        assert_eq!(to_radix_string(1, i64::MIN, 2).unwrap(), format!("-0.{}1", "0".repeat(62)));
    }

    // ── errors ────────────────────────────────────────────────────────────────

    #[test]
    fn invalid_radix() {
        assert_eq!(to_radix_string(1, 3, 1), Err(FractionError::InvalidRadix(1)));
        assert_eq!(to_radix_string(1, 3, 37), Err(FractionError::InvalidRadix(37)));
    }

    #[test]
    fn radix_checked_before_denominator() {
        assert_eq!(to_radix_string(1, 0, 99), Err(FractionError::InvalidRadix(99)));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(to_radix_string(1, 0, 10), Err(FractionError::DivisionByZero));
        assert_eq!(
            numerals_to_radix_string("1", "0", 10),
            Err(FractionError::DivisionByZero)
        );
    }

    #[test]
    fn bad_numeral() {
        assert_eq!(
            numerals_to_radix_string("9", "1", 8),
            Err(FractionError::ParseFailure {
                numeral: "9".into(),
                radix: 8
            })
        );
        assert_eq!(
            numerals_to_radix_string("z", "z", 40),
            Err(FractionError::InvalidRadix(40))
        );
    }

    #[test]
    fn digit_limit_is_enforced() {
        let conv = Converter::with_limit(3);
        assert_eq!(conv.digit_limit(), 3);
        assert_eq!(
            conv.convert(1, 7, 10),
            Err(FractionError::ExpansionTooLong { limit: 3 })
        );
        // integers and short expansions are unaffected
        assert_eq!(conv.convert(14, 7, 10).unwrap(), "2");
        assert_eq!(conv.convert(1, 3, 10).unwrap(), "0.(3)");
    }

    #[test]
    fn default_converter_uses_default_limit() {
        assert_eq!(Converter::default().digit_limit(), DEFAULT_DIGIT_LIMIT);
    }

    #[test]
    fn free_functions_reject_periods_past_default_limit() {
        // 2 has order 2 * 3^14 = 9_565_938 modulo 3^15
        let den = 3i64.pow(15);
        assert_eq!(
            to_radix_string(1, den, 2),
            Err(FractionError::ExpansionTooLong {
                limit: DEFAULT_DIGIT_LIMIT
            })
        );
        assert!(Converter::with_limit(10_000_000).convert(1, den, 2).is_ok());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let conv = Converter::new();
        let first = conv.convert(100, 13, 14).unwrap();
        let second = conv.convert(100, 13, 14).unwrap();
        assert_eq!(first, second);
    }
}
