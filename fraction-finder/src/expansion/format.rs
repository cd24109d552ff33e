/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Assembles the fractional suffix: `.`, prefix, `(period)`.

/// Build the upper-cased fractional suffix from generated digits.
///
/// * `None` or an empty digit string means the value was an integer → `""`.
/// * The first `pre_period_length` digits are the prefix; the rest, if any,
///   is the period and goes in parentheses.
///
/// The prefix length is clamped to the digits available: a terminating
/// expansion can end before the analyzer's pre-period count (1/4 in radix 4 is
/// `0.1`, with a reported pre-period of 2).
pub fn format_fraction(digits: Option<&str>, pre_period_length: usize) -> String {
    let digits = match digits {
        Some(d) if !d.is_empty() => d,
        _ => return String::new(),
    };

    let (prefix, period) = digits.split_at(pre_period_length.min(digits.len()));

    let mut out = String::with_capacity(digits.len() + 3);
    out.push('.');
    out.push_str(prefix);
    if !period.is_empty() {
        out.push('(');
        out.push_str(period);
        out.push(')');
    }
    out.to_uppercase()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
