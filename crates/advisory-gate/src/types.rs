//! Baseline and gate result types
//!
//! This module provides the record model read from the baseline and the
//! result types produced by gate evaluation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use advisory_utils::ExitCode;

/// Identifier used when a record has no `id`.
pub const UNKNOWN_ID: &str = "UNKNOWN";

/// Reason used when a record has no `reason`.
pub const DEFAULT_REASON: &str = "no reason given";

/// Schema tag carried by every emitted gate result.
pub const GATE_SCHEMA_VERSION: &str = "advisory-gate.v1";

/// One time-boxed exception to the advisory policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryException {
    /// Advisory identifier (e.g. `GHSA-xxxx` or `RUSTSEC-2024-0001`)
    pub id: String,

    /// Expiry date as written in the baseline, expected `YYYY-MM-DD`
    pub expires: Option<String>,

    /// Free-text justification
    pub reason: String,
}

impl AdvisoryException {
    /// Build a record, applying the `UNKNOWN` id and default reason fallbacks.
    pub fn new(id: Option<String>, expires: Option<String>, reason: Option<String>) -> Self {
        Self {
            id: id.unwrap_or_else(|| UNKNOWN_ID.to_string()),
            expires,
            reason: reason.unwrap_or_else(|| DEFAULT_REASON.to_string()),
        }
    }
}

/// Ordered list of exceptions loaded from one baseline file.
///
/// Ids are not required to be unique; file order is kept for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineDocument {
    pub exceptions: Vec<AdvisoryException>,
}

impl BaselineDocument {
    pub fn new(exceptions: Vec<AdvisoryException>) -> Self {
        Self { exceptions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exceptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exceptions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdvisoryException> {
        self.exceptions.iter()
    }

    /// Ids that appear more than once, in first-seen order.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for exception in &self.exceptions {
            let id = exception.id.as_str();
            if !seen.insert(id) && !duplicates.contains(&id) {
                duplicates.push(id);
            }
        }
        duplicates
    }
}

/// Outcome of classifying a single exception against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Expiry parses and is today or later
    Active { expires: NaiveDate },
    /// Expiry is absent or empty
    MissingExpiry,
    /// Expiry is present but not a `YYYY-MM-DD` date
    InvalidDate,
    /// Expiry parses and is strictly before today
    Expired { expires: NaiveDate },
}

impl Classification {
    /// Whether this outcome fails the gate
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Active { .. })
    }

    /// Parsed expiry date, if the record had a valid one
    #[must_use]
    pub fn expires_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Active { expires } | Self::Expired { expires } => Some(*expires),
            Self::MissingExpiry | Self::InvalidDate => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> ExceptionStatus {
        match self {
            Self::Active { .. } => ExceptionStatus::Active,
            Self::MissingExpiry => ExceptionStatus::MissingExpiry,
            Self::InvalidDate => ExceptionStatus::InvalidDate,
            Self::Expired { .. } => ExceptionStatus::Expired,
        }
    }
}

/// Serializable form of [`Classification`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExceptionStatus {
    Active,
    MissingExpiry,
    InvalidDate,
    Expired,
}

/// An exception together with its classification and report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedException {
    pub id: String,

    /// Expiry text as written in the baseline
    pub expires: Option<String>,

    /// Parsed expiry; `None` when missing or malformed
    pub expires_date: Option<NaiveDate>,

    pub reason: String,
    pub status: ExceptionStatus,

    /// Report text without the id prefix, e.g. `expired 2000-01-01 — waiting on upstream`
    pub message: String,
}

impl ClassifiedException {
    pub fn new(exception: &AdvisoryException, classification: Classification) -> Self {
        let expires = exception.expires.clone().unwrap_or_default();
        let message = match classification {
            Classification::MissingExpiry => "missing expiry date".to_string(),
            Classification::InvalidDate => format!("invalid date format '{expires}'"),
            Classification::Expired { .. } => {
                format!("expired {expires} — {}", exception.reason)
            }
            Classification::Active { .. } => {
                format!("expires {expires} — {}", exception.reason)
            }
        };

        Self {
            id: exception.id.clone(),
            expires: exception.expires.clone(),
            expires_date: classification.expires_date(),
            reason: exception.reason.clone(),
            status: classification.status(),
            message,
        }
    }

    /// Indented report line, `  <id>: <message>`
    #[must_use]
    pub fn report_line(&self) -> String {
        format!("  {}: {}", self.id, self.message)
    }
}

/// Result of gate evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResult {
    /// Always [`GATE_SCHEMA_VERSION`]
    pub schema_version: String,

    /// Baseline path that was evaluated (or looked for)
    pub baseline: String,

    /// Whether the baseline file existed
    pub baseline_found: bool,

    /// Reference date used for classification
    pub today: NaiveDate,

    /// Whether the gate passed
    pub passed: bool,

    /// Human-readable summary of result
    pub summary: String,

    /// Number of records in the baseline
    pub total: usize,

    /// Exceptions still within their window, in file order
    pub active: Vec<ClassifiedException>,

    /// Missing, malformed and expired exceptions, in file order
    pub failing: Vec<ClassifiedException>,
}

impl GateResult {
    /// Process exit code for this result
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.passed {
            ExitCode::SUCCESS
        } else {
            ExitCode::POLICY_VIOLATION
        }
    }
}
