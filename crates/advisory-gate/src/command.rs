//! Gate command for advisory baseline enforcement
//!
//! Loads the baseline once, classifies every exception against the reference
//! date and collects all failures in a single pass.

use chrono::NaiveDate;
use tracing::debug;

use advisory_utils::error::AdvisoryError;

use crate::baseline::{BaselineLocation, load_baseline};
use crate::classify::classify;
use crate::types::{BaselineDocument, ClassifiedException, GATE_SCHEMA_VERSION, GateResult};

/// Gate command for advisory baseline enforcement
pub struct GateCommand {
    location: BaselineLocation,
    today: NaiveDate,
}

impl GateCommand {
    /// Create a new gate command
    pub fn new(location: BaselineLocation, today: NaiveDate) -> Self {
        Self { location, today }
    }

    /// Execute gate evaluation
    ///
    /// A missing baseline passes. Read and parse failures are returned as
    /// errors before any record is classified.
    pub fn execute(&self) -> Result<GateResult, AdvisoryError> {
        let path = &self.location.path;
        debug!(
            path = %path.display(),
            source = %self.location.source,
            today = %self.today,
            "Evaluating advisory baseline"
        );

        let baseline = path.display().to_string();
        match load_baseline(path)? {
            Some(document) => Ok(evaluate(&document, self.today, baseline)),
            None => Ok(GateResult {
                schema_version: GATE_SCHEMA_VERSION.to_string(),
                baseline,
                baseline_found: false,
                today: self.today,
                passed: true,
                summary: "Baseline not found; no exceptions to enforce".to_string(),
                total: 0,
                active: vec![],
                failing: vec![],
            }),
        }
    }
}

/// Classify every exception in `document` against `today`.
///
/// File order is preserved within the active and failing groups.
pub fn evaluate(document: &BaselineDocument, today: NaiveDate, baseline: String) -> GateResult {
    for id in document.duplicate_ids() {
        debug!(id = %id, "Advisory listed more than once; each entry is checked independently");
    }

    let mut active = Vec::new();
    let mut failing = Vec::new();

    for exception in document.iter() {
        let classification = classify(exception, today);
        let classified = ClassifiedException::new(exception, classification);
        if classification.is_failure() {
            debug!(id = %classified.id, status = ?classified.status, "{}", classified.message);
            failing.push(classified);
        } else {
            active.push(classified);
        }
    }

    let passed = failing.is_empty();
    let summary = if document.is_empty() {
        "No advisory exceptions; baseline is clean".to_string()
    } else if passed {
        format!("All {} advisory exceptions are within their expiry window", active.len())
    } else {
        format!(
            "{} of {} advisory exceptions must be resolved",
            failing.len(),
            document.len()
        )
    };

    GateResult {
        schema_version: GATE_SCHEMA_VERSION.to_string(),
        baseline,
        baseline_found: true,
        today,
        passed,
        summary,
        total: document.len(),
        active,
        failing,
    }
}
