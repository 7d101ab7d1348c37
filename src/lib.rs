//! advisory-policy - CI gate for time-boxed security-advisory exceptions
//!
//! Reads `security/advisory-baseline.toml`, classifies each accepted
//! exception as active or failing against a reference date, prints a report
//! and exits non-zero when any exception needs attention.
//!
//! ```bash
//! # In CI
//! advisory-policy
//!
//! # Reproduce a CI run for a given day
//! advisory-policy --today 2026-01-31 --json
//! ```
//!
//! The gate logic lives in [`advisory_gate`] and can be used directly:
//!
//! ```rust
//! use advisory_policy::gate::{AdvisoryException, BaselineDocument, evaluate};
//! use chrono::NaiveDate;
//!
//! let doc = BaselineDocument::new(vec![AdvisoryException::new(
//!     Some("GHSA-2".to_string()),
//!     Some("2000-01-01".to_string()),
//!     Some("waiting on upstream".to_string()),
//! )]);
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let result = evaluate(&doc, today, "advisory-baseline.toml".to_string());
//! assert!(!result.passed);
//! ```

pub mod cli;
pub mod config;

pub use config::{CliArgs, Config};

pub use advisory_utils::error::{AdvisoryError, BaselineError, ConfigError};
pub use advisory_utils::exit_codes::ExitCode;
pub use advisory_utils::emit_jcs;

pub use advisory_gate as gate;
