/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Long division in an arbitrary radix with cycle detection.

use tracing::debug;

use crate::error::FractionError;
use crate::radix::Radix;

/// Generate the fractional digits of `numerator / denominator` in `radix`.
///
/// The fraction must already be in lowest terms; only
/// `numerator % denominator` is used.  The first `pre_period_length` digits
/// form the non-repeating prefix.  Once that many digits are out, the current
/// remainder is remembered, and generation stops as soon as it comes around
/// again: everything emitted after the prefix is exactly one period.  A
/// terminating expansion stops when the remainder hits zero, which is also the
/// value of the not-yet-armed marker.
///
/// Remainders stay below `denominator`, so the loop runs at most
/// `denominator` times.  `limit` caps the number of digits on top of that.
///
/// # Errors
/// [`FractionError::ExpansionTooLong`] if more than `limit` digits would be
/// produced.
pub fn generate_fraction(
    numerator: u64,
    denominator: u64,
    radix: Radix,
    pre_period_length: usize,
    limit: usize,
) -> Result<String, FractionError> {
    let base = u128::from(radix.get());
    let den = u128::from(denominator);

    let mut digits = String::new();
    let mut remainder = u128::from(numerator % denominator);
    let mut period_start = 0u128;
    let mut iteration = 0usize;

    while remainder != period_start {
        if iteration == limit {
            debug!(numerator, denominator, limit, "digit limit reached");
            return Err(FractionError::ExpansionTooLong { limit });
        }
        if iteration == pre_period_length {
            period_start = remainder;
        }

        let shifted = remainder * base;
        // shifted < den * base, so the digit is < base
        digits.push(radix.digit((shifted / den) as u64));
        remainder = shifted % den;
        iteration += 1;
    }

    debug!(
        numerator,
        denominator,
        radix = radix.get(),
        pre_period_length,
        digits = digits.len(),
        "generated fraction digits"
    );
    Ok(digits)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(n: u64, d: u64, r: u32, pre: usize) -> String {
        generate_fraction(n, d, Radix::new(r).unwrap(), pre, 10_000).unwrap()
    }

    #[test]
    fn purely_periodic() {
        // 1/7 = 0.(142857)
        assert_eq!(gen(1, 7, 10, 0), "142857");
        // 67/7 in binary: fraction part 4/7 = 0.(100)
        assert_eq!(gen(67, 7, 2, 0), "100");
    }

    #[test]
    fn mixed_prefix_and_period() {
        // 43/15 = 2.8(6)
        assert_eq!(gen(43, 15, 10, 1), "86");
        // 1/12 = 0.08(3)
        assert_eq!(gen(1, 12, 10, 2), "083");
    }

    #[test]
    fn terminating_stops_at_zero_remainder() {
        assert_eq!(gen(1, 2, 10, 1), "5");
        assert_eq!(gen(1, 8, 10, 3), "125");
        assert_eq!(gen(3, 8, 2, 3), "011");
    }

    #[test]
    fn terminating_shorter_than_pre_period() {
        // 1/4 in radix 4 is 0.1, although the analyzer reports 2
        assert_eq!(gen(1, 4, 4, 2), "1");
    }

    #[test]
    fn radix_36_digits_are_lowercase() {
        // 254/33: fractional part 23/33 = 0.p(39tgd) in base 36
        assert_eq!(gen(254, 33, 36, 1), "p39tgd");
    }

    #[test]
    fn uses_numerator_modulo_denominator() {
        assert_eq!(gen(100, 13, 14, 0), gen(100 % 13, 13, 14, 0));
    }

    #[test]
    fn huge_denominator_does_not_overflow() {
        let d = u64::MAX;
        // 2 has order 64 modulo 2^64 - 1, so four digits cannot close the period
        let digits = generate_fraction(d - 1, d, Radix::new(2).unwrap(), 0, 4);
        assert_eq!(digits, Err(FractionError::ExpansionTooLong { limit: 4 }));
    }

    #[test]
    fn limit_exactly_fits() {
        let r = Radix::new(10).unwrap();
        assert_eq!(generate_fraction(1, 7, r, 0, 6).unwrap(), "142857");
        assert_eq!(
            generate_fraction(1, 7, r, 0, 5),
            Err(FractionError::ExpansionTooLong { limit: 5 })
        );
    }
}
