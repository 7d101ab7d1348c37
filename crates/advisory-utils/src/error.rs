use std::fmt;
use std::io;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type with user-friendly reporting.
///
/// Policy violations (expired or undated exceptions) are not errors: they are
/// part of a successful evaluation and surface through the gate result.
/// `AdvisoryError` covers everything that prevents an evaluation from
/// happening at all.
///
/// | Category | Description |
/// |----------|-------------|
/// | `Config` | Invalid CLI values or baseline discovery failures |
/// | `Baseline` | The baseline file exists but could not be read or parsed |
/// | `Io` | Other I/O failures |
///
/// Every variant maps to [`ExitCode::CONFIG_ERROR`] so CI can tell a broken
/// setup apart from a policy violation.
///
/// # Example
///
/// ```rust
/// use advisory_utils::error::{AdvisoryError, ConfigError};
/// use advisory_utils::ExitCode;
///
/// let err = AdvisoryError::Config(ConfigError::InvalidValue {
///     key: "today".to_string(),
///     value: "yesterday".to_string(),
/// });
/// assert_eq!(err.to_exit_code(), ExitCode::CONFIG_ERROR);
/// assert!(err.display_for_user().contains("Suggestions:"));
/// ```
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Baseline error: {0}")]
    Baseline(#[from] BaselineError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Validation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::FileSystem => write!(f, "File System"),
            Self::Validation => write!(f, "Validation"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Baseline discovery failed: {reason}")]
    DiscoveryFailed { reason: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::DiscoveryFailed { reason } => {
                format!("Could not locate the advisory baseline: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' option has specific format requirements."
            )),
            Self::DiscoveryFailed { .. } => Some(
                "The baseline is looked up at security/advisory-baseline.toml under the repository root."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidValue { key, .. } => match key.as_str() {
                "today" => vec![
                    "Use a calendar date in YYYY-MM-DD form (e.g., 2026-01-31)".to_string(),
                    "Omit --today to use the current local date".to_string(),
                ],
                _ => vec!["Run with --help to see accepted values".to_string()],
            },
            Self::DiscoveryFailed { .. } => vec![
                "Run from inside the repository checkout".to_string(),
                "Pass the baseline path explicitly with --baseline".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Failures loading the baseline document itself.
#[derive(Error, Debug)]
pub enum BaselineError {
    #[error("Baseline file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read baseline file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse baseline TOML {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl UserFriendlyError for BaselineError {
    fn user_message(&self) -> String {
        match self {
            Self::NotFound { path } => format!("Baseline file not found: {path}"),
            Self::ReadFailed { path, source } => {
                format!("Could not read baseline file {path}: {source}")
            }
            Self::ParseFailed { path, source } => {
                format!("Baseline file {path} is not valid: {}", source.message())
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::NotFound { .. } => Some(
                "An explicitly requested baseline must exist; only the default location may be absent."
                    .to_string(),
            ),
            Self::ReadFailed { .. } => None,
            Self::ParseFailed { .. } => Some(
                "The baseline is a TOML document with one [[advisory]] table per exception."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { .. } => vec![
                "Check the path passed to --baseline".to_string(),
                "Drop --baseline to use security/advisory-baseline.toml".to_string(),
            ],
            Self::ReadFailed { .. } => vec!["Check file permissions".to_string()],
            Self::ParseFailed { .. } => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Ensure id, expires and reason are quoted strings".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } | Self::ReadFailed { .. } => ErrorCategory::FileSystem,
            Self::ParseFailed { .. } => ErrorCategory::Validation,
        }
    }
}

impl UserFriendlyError for AdvisoryError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Baseline(err) => err.user_message(),
            Self::Io(err) => format!("I/O failure: {err}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Baseline(err) => err.context(),
            Self::Io(_) => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Baseline(err) => err.suggestions(),
            Self::Io(_) => Vec::new(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Baseline(err) => err.category(),
            Self::Io(_) => ErrorCategory::FileSystem,
        }
    }
}

impl AdvisoryError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::CONFIG_ERROR
    }
}
