/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type for the conversion core.
//!
//! Every failure the core can report is a distinct variant, so the shell can
//! match on it instead of parsing a message. All variants are recoverable:
//! the computation is deterministic, so none of them is worth retrying.

use thiserror::Error;

/// Failure returned by [`Converter::convert`](crate::Converter::convert) and
/// the free-function entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FractionError {
    /// The radix is outside `[2, 36]`.
    ///
    /// Checked before any other input, including numeral parsing.  Signed so
    /// that a negative radix typed at the shell is reported as-is.
    #[error("radix must be between 2 and 36, got {0}")]
    InvalidRadix(i64),

    /// A numeral could not be parsed under the given radix (bad digit, empty
    /// string, or a value outside `i64`).
    #[error("'{numeral}' is not a valid base-{radix} numeral")]
    ParseFailure { numeral: String, radix: u32 },

    /// The denominator is zero.
    #[error("denominator must not be zero")]
    DivisionByZero,

    /// The fractional expansion would need more digits than the converter's
    /// limit allows. Only reachable for very large denominators.
    #[error("expansion exceeds the limit of {limit} digits")]
    ExpansionTooLong { limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            FractionError::InvalidRadix(37).to_string(),
            "radix must be between 2 and 36, got 37"
        );
        assert_eq!(
            FractionError::InvalidRadix(-4).to_string(),
            "radix must be between 2 and 36, got -4"
        );
        assert_eq!(
            FractionError::ParseFailure {
                numeral: "9".into(),
                radix: 8
            }
            .to_string(),
            "'9' is not a valid base-8 numeral"
        );
        assert_eq!(
            FractionError::DivisionByZero.to_string(),
            "denominator must not be zero"
        );
        assert_eq!(
            FractionError::ExpansionTooLong { limit: 10 }.to_string(),
            "expansion exceeds the limit of 10 digits"
        );
    }
}
