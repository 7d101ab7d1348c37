//! CLI entry point and dispatch logic
//!
//! `run()` parses arguments, initialises logging, resolves configuration,
//! runs the gate and handles all error output.

use clap::Parser;

use super::args::Cli;
use super::commands;

use crate::{AdvisoryError, Config, ExitCode};

/// Main CLI execution function.
///
/// Returns `Ok(())` when the gate passes. Otherwise prints any error to
/// stderr and returns the exit code; main.rs only maps it to the process
/// exit status.
pub fn run() -> Result<(), ExitCode> {
    let cli = Cli::parse();
    run_with(&cli)
}

/// Run with already-parsed arguments.
pub fn run_with(cli: &Cli) -> Result<(), ExitCode> {
    if let Err(e) = advisory_utils::init_tracing(cli.verbose) {
        eprintln!("⚠ Failed to initialize logging: {e}");
    }

    let config = match Config::discover(&cli.to_cli_args()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("✗ {}", err.display_for_user());
            return Err(err.to_exit_code());
        }
    };

    let mut stdout = std::io::stdout().lock();
    match commands::execute_check_command(&config, &mut stdout) {
        Ok(code) if code == ExitCode::SUCCESS => Ok(()),
        Ok(code) => Err(code),
        Err(error) => {
            if let Some(advisory_error) = error.downcast_ref::<AdvisoryError>() {
                eprintln!("✗ {}", advisory_error.display_for_user());
                Err(advisory_error.to_exit_code())
            } else {
                eprintln!("✗ Unexpected error: {error:#}");
                Err(ExitCode::INTERNAL)
            }
        }
    }
}
