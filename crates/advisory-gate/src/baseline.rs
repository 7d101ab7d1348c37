//! Baseline location and loading
//!
//! The baseline is a TOML document with one `[[advisory]]` table per accepted
//! exception:
//!
//! ```toml
//! [[advisory]]
//! id = "RUSTSEC-2024-0001"
//! expires = "2026-03-31"
//! reason = "no patched release yet"
//! ```
//!
//! A missing file at the default location means no policy is in force.

use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use advisory_utils::error::{AdvisoryError, BaselineError, ConfigError};

use crate::paths::{BASELINE_ENV_VAR, default_baseline_path};
use crate::types::{AdvisoryException, BaselineDocument};

/// Where the baseline path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineSource {
    /// `--baseline` on the command line
    Explicit,
    /// The `ADVISORY_BASELINE` environment variable
    Environment,
    /// `security/advisory-baseline.toml` under the repository root
    Default,
}

impl std::fmt::Display for BaselineSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "cli"),
            Self::Environment => write!(f, "env"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A resolved baseline path and its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineLocation {
    pub path: PathBuf,
    pub source: BaselineSource,
}

/// Resolve the baseline path from the CLI argument, environment or default.
///
/// Uses the current working directory as the starting point for repository
/// root discovery.
pub fn resolve_baseline_path(explicit: Option<&Path>) -> Result<BaselineLocation, AdvisoryError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
        reason: format!("failed to get current directory: {e}"),
    })?;
    resolve_baseline_path_from(&cwd, explicit, std::env::var_os(BASELINE_ENV_VAR))
}

/// Path-driven variant of [`resolve_baseline_path`] that avoids process-global state.
///
/// Searches in the following order:
/// 1. Explicit path (must exist)
/// 2. `env_override`, when set and non-empty
/// 3. `security/advisory-baseline.toml` under the repository root of `start_dir`
pub fn resolve_baseline_path_from(
    start_dir: &Path,
    explicit: Option<&Path>,
    env_override: Option<OsString>,
) -> Result<BaselineLocation, AdvisoryError> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(BaselineLocation {
                path: path.to_path_buf(),
                source: BaselineSource::Explicit,
            });
        }
        return Err(BaselineError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    if let Some(value) = env_override.filter(|v| !v.is_empty()) {
        return Ok(BaselineLocation {
            path: PathBuf::from(value),
            source: BaselineSource::Environment,
        });
    }

    Ok(BaselineLocation {
        path: default_baseline_path(start_dir),
        source: BaselineSource::Default,
    })
}

/// On-disk shape of the baseline
#[derive(Debug, Deserialize)]
struct BaselineFile {
    #[serde(default)]
    advisory: Vec<RawAdvisory>,
}

#[derive(Debug, Deserialize)]
struct RawAdvisory {
    id: Option<String>,
    expires: Option<toml::Value>,
    reason: Option<String>,
}

impl From<RawAdvisory> for AdvisoryException {
    fn from(raw: RawAdvisory) -> Self {
        AdvisoryException::new(raw.id, raw.expires.map(expiry_text), raw.reason)
    }
}

/// Text form of an `expires` value.
///
/// Quoted strings pass through unchanged. A bare TOML date renders as
/// `YYYY-MM-DD`; any other value keeps its TOML rendering so it is reported
/// as an invalid date.
fn expiry_text(value: toml::Value) -> String {
    match value {
        toml::Value::String(text) => text,
        toml::Value::Datetime(datetime) => datetime.to_string(),
        other => other.to_string(),
    }
}

/// Load the baseline at `path`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_baseline(path: &Path) -> Result<Option<BaselineDocument>, BaselineError> {
    if !path.exists() {
        debug!(path = %path.display(), "Baseline file not present");
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|source| BaselineError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    let document = parse_baseline(&content, path)?;
    debug!(
        path = %path.display(),
        records = document.len(),
        "Loaded advisory baseline"
    );
    Ok(Some(document))
}

/// Parse baseline TOML content. `path` is only used in error messages.
pub fn parse_baseline(content: &str, path: &Path) -> Result<BaselineDocument, BaselineError> {
    let file: BaselineFile =
        toml::from_str(content).map_err(|source| BaselineError::ParseFailed {
            path: path.display().to_string(),
            source,
        })?;

    Ok(BaselineDocument::new(
        file.advisory.into_iter().map(AdvisoryException::from).collect(),
    ))
}
