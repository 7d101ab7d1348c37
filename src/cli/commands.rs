//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use advisory_gate::{GateCommand, GateResult, emit_gate_json, render_text};

use crate::{Config, ExitCode};

/// Execute the advisory baseline gate and write the report to `out`.
///
/// Returns the exit code for the verdict. Errors are load failures or
/// output failures; policy violations are not errors.
pub fn execute_check_command(config: &Config, out: &mut dyn Write) -> Result<ExitCode> {
    let gate = GateCommand::new(config.location.clone(), config.today);
    let result = gate.execute()?;

    debug!(
        baseline = %result.baseline,
        total = result.total,
        active = result.active.len(),
        failing = result.failing.len(),
        "Gate evaluated"
    );

    write_report(&result, config.json, out)?;

    if result.passed {
        info!("{}", result.summary);
    } else {
        info!(failing = result.failing.len(), "{}", result.summary);
    }

    Ok(result.exit_code())
}

fn write_report(result: &GateResult, json: bool, out: &mut dyn Write) -> Result<()> {
    if json {
        let json_output = emit_gate_json(result)?;
        writeln!(out, "{json_output}").context("Failed to write gate JSON")?;
    } else {
        out.write_all(render_text(result).as_bytes())
            .context("Failed to write gate report")?;
    }
    out.flush().context("Failed to flush gate report")
}
