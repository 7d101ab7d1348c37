//! Command-line interface for advisory-policy
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions (clap)
//! - `run`: Main entry point and error reporting
//! - `commands`: Command implementations
//! - `tests`: Test module (cfg(test) only)

pub mod args;
mod commands;
mod run;


pub use args::{Cli, build_cli};
pub use commands::execute_check_command;
pub use run::{run, run_with};
