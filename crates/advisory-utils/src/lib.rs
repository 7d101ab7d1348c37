//! Foundation utilities for advisory-policy
//!
//! Error types, exit codes, logging setup and canonical JSON emission shared
//! by the gate crate and the CLI.

pub mod canonicalization;
pub mod error;
pub mod exit_codes;
pub mod logging;

pub use canonicalization::emit_jcs;
pub use error::{AdvisoryError, BaselineError, ConfigError, ErrorCategory, UserFriendlyError};
pub use exit_codes::ExitCode;
pub use logging::init_tracing;
