/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Fraction Finder – exact radix expansion of rational numbers
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── error         – FractionError, the tagged failure type of the core
//! ├── radix         – validated Radix, digit alphabet, numeral parse/render
//! ├── expansion/    – Converter facade over the four pipeline stages
//! │   ├── math      – gcd, reduce, pre_period_length
//! │   ├── digits    – long division with cycle detection
//! │   └── format    – ".PREFIX(PERIOD)" assembly
//! ├── config/       – optional YAML shell settings
//! └── shell         – line-oriented interactive loop
//! ```

pub mod config;
pub mod error;
pub mod expansion;
pub mod radix;
pub mod shell;

pub use error::FractionError;
pub use expansion::{numerals_to_radix_string, to_radix_string, Converter, DEFAULT_DIGIT_LIMIT};
pub use radix::Radix;
