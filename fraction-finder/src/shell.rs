/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Line-oriented interactive shell around the converter.
//!
//! Each input line holds three whitespace-separated tokens: numerator,
//! denominator and radix.  The shell prints either the expansion or one of a
//! fixed set of messages, then reads the next line.  Bad input never ends the
//! loop; only the exit command or end of input does.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::FractionError;
use crate::expansion::Converter;

// ── Input errors ──────────────────────────────────────────────────────────────

/// Why a shell line produced no expansion.
///
/// `Display` is exactly the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line did not split into exactly three tokens.
    #[error("Invalid input. Print three integers")]
    WrongTokenCount(usize),

    /// A token is not an integer (or, in numeral mode, the radix token is
    /// not a base-10 integer).
    #[error("Invalid input. Numerator, denominator and radix must be integers")]
    NotAnInteger(String),

    /// The converter rejected otherwise well-formed input.
    #[error("Invalid input. {0}")]
    Conversion(#[from] FractionError),
}

// ── Evaluation ────────────────────────────────────────────────────────────────

/// Evaluate one line of input.
pub fn evaluate_line(
    line: &str,
    converter: &Converter,
    numerals: bool,
) -> Result<String, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    evaluate_tokens(&tokens, converter, numerals)
}

/// Evaluate `[numerator, denominator, radix]`.
///
/// The radix is always base 10.  Numerator and denominator are base-10
/// integers, or numerals in that radix when `numerals` is set.
pub fn evaluate_tokens(
    tokens: &[&str],
    converter: &Converter,
    numerals: bool,
) -> Result<String, InputError> {
    let [numerator, denominator, radix] = tokens else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };

    let radix = parse_integer(radix)?;
    let radix = u32::try_from(radix).map_err(|_| FractionError::InvalidRadix(radix))?;

    let result = if numerals {
        converter.convert_numerals(numerator, denominator, radix)?
    } else {
        let numerator = parse_integer(numerator)?;
        let denominator = parse_integer(denominator)?;
        converter.convert(numerator, denominator, radix)?
    };
    Ok(result)
}

fn parse_integer(token: &str) -> Result<i64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))
}

// ── Loop ──────────────────────────────────────────────────────────────────────

/// Run the shell until the exit command or end of input.
///
/// Returns the number of lines evaluated (the exit command is not counted).
///
/// # Errors
/// Only I/O failures on `input` or `output` end the loop with an error.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, settings: &Settings) -> Result<usize> {
    let converter = settings.converter();
    writeln!(output, "{}", settings.banner).context("Failed to write banner")?;

    let mut evaluated = 0;
    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        if line.trim() == settings.exit_command {
            info!("Exit command received");
            break;
        }

        evaluated += 1;
        let reply = match evaluate_line(&line, &converter, settings.numerals) {
            Ok(expansion) => {
                debug!(input = %line, %expansion, "Converted");
                expansion
            }
            Err(e) => {
                warn!(input = %line, error = ?e, "Rejected input");
                e.to_string()
            }
        };
        writeln!(output, "{reply}").context("Failed to write reply")?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(evaluated)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
