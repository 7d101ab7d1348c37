//! Advisory baseline gate
//!
//! Loads the baseline of accepted advisory exceptions, classifies each one
//! against a reference date and reports whether the gate passes.

pub mod baseline;
pub mod classify;
pub mod command;
pub mod json;
pub mod paths;
pub mod report;
pub mod types;

// Re-exports for convenience
pub use baseline::{
    BaselineLocation, BaselineSource, load_baseline, parse_baseline, resolve_baseline_path,
    resolve_baseline_path_from,
};
pub use classify::{classify, parse_expiry};
pub use command::{GateCommand, evaluate};
pub use json::emit_gate_json;
pub use report::render_text;
pub use types::{
    AdvisoryException, BaselineDocument, Classification, ClassifiedException, ExceptionStatus,
    GateResult,
};
