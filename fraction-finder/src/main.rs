/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};

use fraction_finder::config::Settings;
use fraction_finder::shell;

// ── CLI argument definition ───────────────────────────────────────────────────

/// Expand numerator/denominator in radix 2-36, period in parentheses.
///
/// Example:
///   fraction-finder 43 15 10          → 2.8(6)
///   fraction-finder --numerals 72 X 36 → 7.P(39TGD)
///   fraction-finder                   → interactive shell on stdin
#[derive(Debug, Parser)]
#[command(
    name = "fraction-finder",
    about = "Exact radix expansion of rational numbers",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML shell settings file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Maximum number of fractional digits per conversion.
    #[arg(short = 'l', long = "limit")]
    limit: Option<usize>,

    /// Read numerator and denominator as numerals in the given radix.
    #[arg(long = "numerals", default_value_t = false)]
    numerals: bool,

    /// NUMERATOR DENOMINATOR RADIX for a single conversion; omit for the shell.
    #[arg(
        num_args = 3,
        value_names = ["NUMERATOR", "DENOMINATOR", "RADIX"],
        allow_negative_numbers = true
    )]
    values: Vec<String>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Results go to stdout; logs go to stderr.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        config   = ?cli.config,
        limit    = ?cli.limit,
        numerals = cli.numerals,
        one_shot = !cli.values.is_empty(),
        "Configuration"
    );

    // ── Resolve settings ──────────────────────────────────────────────────────
    let settings = match resolve_settings(&cli) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {:#}", e);
            process::exit(1);
        }
    };

    // ── One-shot conversion ───────────────────────────────────────────────────
    if !cli.values.is_empty() {
        let tokens: Vec<&str> = cli.values.iter().map(String::as_str).collect();
        match shell::evaluate_tokens(&tokens, &settings.converter(), settings.numerals) {
            Ok(expansion) => println!("{expansion}"),
            Err(e) => {
                println!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    // ── Interactive shell ─────────────────────────────────────────────────────
    let stdin = io::stdin();
    match shell::run(stdin.lock(), io::stdout().lock(), &settings) {
        Ok(lines) => info!(lines, "Shell finished"),
        Err(e) => {
            error!("Shell aborted: {:#}", e);
            process::exit(1);
        }
    }
}

fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    if cli.numerals {
        settings.numerals = true;
    }
    if let Some(limit) = cli.limit {
        settings = settings.with_digit_limit(limit)?;
    }
    Ok(settings)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
