//! Human-readable report rendering

use std::path::Path;

use crate::types::GateResult;

/// Render the text report for a gate result.
///
/// Active exceptions come first, then the failing ones, then at most one
/// summary sentence. The returned string ends with a newline.
pub fn render_text(result: &GateResult) -> String {
    let mut out = String::new();

    if !result.baseline_found {
        let name = Path::new(&result.baseline)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| result.baseline.clone());
        out.push_str(&format!("{name} not found — no exceptions to enforce\n"));
        return out;
    }

    if result.total == 0 {
        out.push_str("No advisory exceptions — baseline is clean\n");
        return out;
    }

    if !result.active.is_empty() {
        out.push_str(&format!("Active exceptions ({}):\n", result.active.len()));
        for entry in &result.active {
            out.push_str(&entry.report_line());
            out.push('\n');
        }
    }

    if !result.failing.is_empty() {
        out.push_str(&format!(
            "\nEXPIRED exceptions ({}) — these MUST be resolved:\n",
            result.failing.len()
        ));
        for entry in &result.failing {
            out.push_str(&entry.report_line());
            out.push('\n');
        }
        return out;
    }

    out.push_str("All advisory exceptions are within their expiry window\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::evaluate;
    use crate::types::{AdvisoryException, BaselineDocument, GATE_SCHEMA_VERSION};
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn record(id: &str, expires: Option<&str>, reason: &str) -> AdvisoryException {
        AdvisoryException::new(
            Some(id.to_string()),
            expires.map(str::to_string),
            Some(reason.to_string()),
        )
    }

    fn render(records: Vec<AdvisoryException>) -> String {
        let doc = BaselineDocument::new(records);
        render_text(&evaluate(&doc, today(), "advisory-baseline.toml".to_string()))
    }

    #[test]
    fn test_mixed_report() {
        let text = render(vec![
            record("GHSA-1", Some("2099-01-01"), "vendor patch pending"),
            record("GHSA-2", Some("2000-01-01"), "waiting on upstream"),
        ]);

        assert_eq!(
            text,
            "Active exceptions (1):\n\
             \x20 GHSA-1: expires 2099-01-01 — vendor patch pending\n\
             \n\
             EXPIRED exceptions (1) — these MUST be resolved:\n\
             \x20 GHSA-2: expired 2000-01-01 — waiting on upstream\n"
        );
    }

    #[test]
    fn test_only_failures_still_separated_by_blank_line() {
        let text = render(vec![
            record("A", None, "r"),
            record("B", Some("31-12-2030"), "r"),
        ]);

        assert_eq!(
            text,
            "\nEXPIRED exceptions (2) — these MUST be resolved:\n\
             \x20 A: missing expiry date\n\
             \x20 B: invalid date format '31-12-2030'\n"
        );
    }

    #[test]
    fn test_all_active_report() {
        let text = render(vec![record("GHSA-9", Some("2027-01-01"), "r")]);
        assert!(text.starts_with("Active exceptions (1):\n"));
        assert!(text.ends_with("All advisory exceptions are within their expiry window\n"));
        assert!(!text.contains("EXPIRED"));
    }

    #[test]
    fn test_clean_report() {
        assert_eq!(render(vec![]), "No advisory exceptions — baseline is clean\n");
    }

    #[test]
    fn test_not_found_uses_file_name() {
        let result = GateResult {
            schema_version: GATE_SCHEMA_VERSION.to_string(),
            baseline: "/repo/security/advisory-baseline.toml".to_string(),
            baseline_found: false,
            today: today(),
            passed: true,
            summary: String::new(),
            total: 0,
            active: vec![],
            failing: vec![],
        };

        assert_eq!(
            render_text(&result),
            "advisory-baseline.toml not found — no exceptions to enforce\n"
        );
    }
}
