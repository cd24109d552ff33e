/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Optional YAML settings for the interactive shell.
//!
//! The expected YAML structure is (every key is optional):
//! ```yaml
//! shell:
//!   banner: "Enter numerator, denominator and radix"
//!   exit_command: quit
//!   numerals: true
//! conversion:
//!   digit_limit: 50000
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::expansion::{Converter, DEFAULT_DIGIT_LIMIT};

/// Banner printed when the shell starts, unless the config overrides it.
pub const DEFAULT_BANNER: &str =
    "Print numerator, denominator and radix through whitespace. Type 'exit' to exit";

/// Line that ends the shell, unless the config overrides it.
pub const DEFAULT_EXIT_COMMAND: &str = "exit";

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    shell: ShellEntry,
    #[serde(default)]
    conversion: ConversionEntry,
}

#[derive(Debug, Default, Deserialize)]
struct ShellEntry {
    banner: Option<String>,
    exit_command: Option<String>,
    #[serde(default)]
    numerals: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ConversionEntry {
    digit_limit: Option<usize>,
}

// ── Public settings ───────────────────────────────────────────────────────────

/// Resolved shell settings: file values with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub banner: String,
    pub exit_command: String,
    /// When `true`, numerator and denominator tokens are numerals in the radix
    /// given on the same line instead of base-10 integers.
    pub numerals: bool,
    pub digit_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            exit_command: DEFAULT_EXIT_COMMAND.to_string(),
            numerals: false,
            digit_limit: DEFAULT_DIGIT_LIMIT,
        }
    }
}

impl Settings {
    /// Parse `path` and resolve it against the defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the YAML is structurally
    /// invalid, `digit_limit` is zero, or `exit_command` is blank.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading shell settings from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open configuration file: {}", path.display()))?;

        let file: SettingsFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        let defaults = Self::default();
        let settings = Self {
            banner: file.shell.banner.unwrap_or(defaults.banner),
            exit_command: file
                .shell
                .exit_command
                .map(|c| c.trim().to_string())
                .unwrap_or(defaults.exit_command),
            numerals: file.shell.numerals,
            digit_limit: file.conversion.digit_limit.unwrap_or(defaults.digit_limit),
        };
        settings.validate()?;

        debug!(
            exit_command = %settings.exit_command,
            numerals = settings.numerals,
            digit_limit = settings.digit_limit,
            "Resolved shell settings"
        );
        Ok(settings)
    }

    /// Replace the digit limit, e.g. from a command-line override.
    ///
    /// # Errors
    /// Returns an error if `digit_limit` is zero.
    pub fn with_digit_limit(mut self, digit_limit: usize) -> Result<Self> {
        self.digit_limit = digit_limit;
        self.validate()?;
        Ok(self)
    }

    /// The converter every shell line is evaluated with.
    pub fn converter(&self) -> Converter {
        Converter::with_limit(self.digit_limit)
    }

    fn validate(&self) -> Result<()> {
        if self.digit_limit == 0 {
            bail!("digit_limit must be greater than zero");
        }
        if self.exit_command.is_empty() {
            bail!("exit_command must not be empty");
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
