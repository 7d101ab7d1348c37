//! Exit code constants for advisory-policy.
//!
//! The process exit status is the only machine-readable output of the gate,
//! so the numeric values are part of the public contract.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | No baseline, or no failing exceptions |
//! | 1 | `POLICY_VIOLATION` | One or more exceptions are expired or lack a valid expiry |
//! | 2 | `CONFIG_ERROR` | Invalid CLI values, or the baseline could not be read or parsed |
//! | 3 | `INTERNAL` | Unexpected failure, e.g. the report could not be written |

/// Exit codes matching the documented exit code table.
///
/// # Example
///
/// ```rust
/// use advisory_utils::ExitCode;
///
/// assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
/// assert_eq!(ExitCode::POLICY_VIOLATION.as_i32(), 1);
/// assert_eq!(ExitCode::from_i32(2), ExitCode::CONFIG_ERROR);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - no baseline, or every exception is within its window
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Policy violation - at least one exception failed enforcement
    pub const POLICY_VIOLATION: ExitCode = ExitCode(1);

    /// Configuration error - bad CLI value, unreadable or unparseable baseline
    pub const CONFIG_ERROR: ExitCode = ExitCode(2);

    /// Internal error - anything that is neither a verdict nor a setup problem
    pub const INTERNAL: ExitCode = ExitCode(3);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an ExitCode from a raw i32 value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
