//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

/// advisory-policy - fail CI when accepted advisory exceptions expire
#[derive(Parser, Debug, Default)]
#[command(name = "advisory-policy")]
#[command(about = "Fail the build if any accepted security-advisory exception has expired")]
#[command(long_about = r#"
advisory-policy reads the baseline of accepted security-advisory exceptions
(security/advisory-baseline.toml under the repository root) and checks every
exception's expiry date against today.

Exceptions with a missing, malformed or past expiry date fail the gate.
A missing baseline file means there is nothing to enforce.

EXAMPLES:
  # Check the default baseline
  advisory-policy

  # Check a specific file as of a fixed date
  advisory-policy --baseline ci/advisories.toml --today 2026-01-31

  # Emit the result as canonical JSON
  advisory-policy --json

BASELINE FORMAT:
  [[advisory]]
  id = "RUSTSEC-2024-0001"
  expires = "2026-03-31"
  reason = "no patched release yet"

EXIT CODES:
  0  No baseline, or every exception is within its expiry window
  1  One or more exceptions are expired or lack a valid expiry date
  2  Invalid arguments, or the baseline could not be read or parsed
  3  Unexpected failure while writing the report

ENVIRONMENT:
  ADVISORY_BASELINE  Baseline path used when --baseline is not given
  RUST_LOG           Log filter (logs are written to stderr)
"#)]
#[command(version)]
pub struct Cli {
    /// Path to the baseline file (must exist when given)
    #[arg(long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,

    /// Reference date in YYYY-MM-DD form (default: today's local date)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Output the gate result as JSON (advisory-gate.v1 schema)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Arguments relevant to configuration resolution
    #[must_use]
    pub fn to_cli_args(&self) -> crate::CliArgs {
        crate::CliArgs {
            baseline: self.baseline.clone(),
            today: self.today.clone(),
            json: self.json,
            verbose: self.verbose,
        }
    }
}

/// Build the clap command (used for help/version rendering in tests)
#[must_use]
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}
