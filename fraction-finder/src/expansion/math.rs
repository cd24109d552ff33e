/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Pure arithmetic helpers: GCD, reduction to lowest terms and the pre-period
//! length.
//!
//! These are free functions rather than methods so they can be used and tested
//! independently of the [`Converter`](super::Converter).

use crate::radix::Radix;

/// Iterative Euclidean GCD.  `gcd(0, x) == x`, and `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Reduce `numerator / denominator` to lowest terms.
///
/// Returns `(g, numerator / g, denominator / g)` where `g` is the GCD.  The
/// two reduced values are coprime.
///
/// `denominator` must be non-zero; the facade rejects a zero denominator
/// before calling this.
pub fn reduce(numerator: u64, denominator: u64) -> (u64, u64, u64) {
    let g = gcd(numerator, denominator);
    (g, numerator / g, denominator / g)
}

/// Number of fractional digits that precede the repeating period.
///
/// For every `i` in `2..=radix` that divides the radix, count how many times
/// `i` divides `denominator`; the result is the largest such count.  Composite
/// divisors never beat their prime factors, so scanning all of them leaves the
/// maximum unchanged.
///
/// For radices with a repeated prime factor (4, 8, 9, ...) a terminating
/// expansion can end before this many digits; the formatter clamps the prefix
/// to the digits actually produced.
///
/// A zero denominator has no meaningful answer and returns `0`.
pub fn pre_period_length(denominator: u64, radix: Radix) -> usize {
    if denominator == 0 {
        return 0;
    }

    let r = u64::from(radix.get());
    (2..=r)
        .filter(|i| r % i == 0)
        .map(|i| {
            let mut working = denominator;
            let mut count = 0;
            while working % i == 0 {
                working /= i;
                count += 1;
            }
            count
        })
        .max()
        .unwrap_or(0)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
