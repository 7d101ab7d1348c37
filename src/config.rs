//! Configuration resolution for advisory-policy
//!
//! Precedence: CLI flags > environment > defaults. There is no config file;
//! the baseline itself is the only input document.

use chrono::NaiveDate;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use advisory_gate::baseline::{BaselineLocation, resolve_baseline_path_from};
use advisory_gate::classify::parse_expiry;
use advisory_gate::paths::BASELINE_ENV_VAR;
use advisory_utils::error::{AdvisoryError, ConfigError};

/// Raw CLI values before resolution
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub baseline: Option<PathBuf>,
    pub today: Option<String>,
    pub json: bool,
    pub verbose: bool,
}

/// Effective configuration for one gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub location: BaselineLocation,
    pub today: NaiveDate,
    pub json: bool,
    pub verbose: bool,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// This is the only place the system clock is read.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, AdvisoryError> {
        let start_dir = std::env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("failed to get current directory: {e}"),
        })?;
        let clock_today = chrono::Local::now().date_naive();
        Self::discover_from(
            &start_dir,
            cli_args,
            std::env::var_os(BASELINE_ENV_VAR),
            clock_today,
        )
    }

    /// Path-driven variant used by tests to avoid process-global state.
    pub fn discover_from(
        start_dir: &Path,
        cli_args: &CliArgs,
        env_baseline: Option<OsString>,
        clock_today: NaiveDate,
    ) -> Result<Self, AdvisoryError> {
        let today = match cli_args.today.as_deref() {
            Some(value) => parse_today(value)?,
            None => clock_today,
        };

        let location =
            resolve_baseline_path_from(start_dir, cli_args.baseline.as_deref(), env_baseline)?;

        Ok(Self {
            location,
            today,
            json: cli_args.json,
            verbose: cli_args.verbose,
        })
    }
}

/// Parse the `--today` override with the same rules as baseline expiries
fn parse_today(value: &str) -> Result<NaiveDate, ConfigError> {
    parse_expiry(value).ok_or_else(|| ConfigError::InvalidValue {
        key: "today".to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisory_gate::baseline::BaselineSource;
    use advisory_utils::error::BaselineError;

    fn clock() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config =
            Config::discover_from(temp.path(), &CliArgs::default(), None, clock()).unwrap();

        assert_eq!(config.today, clock());
        assert_eq!(config.location.source, BaselineSource::Default);
        assert!(config.location.path.ends_with("security/advisory-baseline.toml"));
        assert!(!config.json);
    }

    #[test]
    fn test_today_override() {
        let temp = tempfile::tempdir().unwrap();
        let args = CliArgs {
            today: Some("2030-02-01".to_string()),
            ..CliArgs::default()
        };
        let config = Config::discover_from(temp.path(), &args, None, clock()).unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2030, 2, 1).unwrap());
    }

    #[test]
    fn test_invalid_today_is_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let args = CliArgs {
            today: Some("next tuesday".to_string()),
            ..CliArgs::default()
        };
        let err = Config::discover_from(temp.path(), &args, None, clock()).unwrap_err();
        assert!(matches!(
            err,
            AdvisoryError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "today"
        ));
    }

    #[test]
    fn test_two_digit_year_today_is_config_error() {
        let temp = tempfile::tempdir().unwrap();
        let args = CliArgs {
            today: Some("26-10-19".to_string()),
            ..CliArgs::default()
        };
        let err = Config::discover_from(temp.path(), &args, None, clock()).unwrap_err();
        assert!(matches!(
            err,
            AdvisoryError::Config(ConfigError::InvalidValue { ref key, ref value })
                if key == "today" && value == "26-10-19"
        ));
    }

    #[test]
    fn test_missing_explicit_baseline_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let args = CliArgs {
            baseline: Some(temp.path().join("missing.toml")),
            ..CliArgs::default()
        };
        let err = Config::discover_from(temp.path(), &args, None, clock()).unwrap_err();
        assert!(matches!(
            err,
            AdvisoryError::Baseline(BaselineError::NotFound { .. })
        ));
    }

    #[test]
    fn test_env_baseline() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::discover_from(
            temp.path(),
            &CliArgs::default(),
            Some(OsString::from("ci/advisories.toml")),
            clock(),
        )
        .unwrap();
        assert_eq!(config.location.source, BaselineSource::Environment);
        assert_eq!(config.location.path, PathBuf::from("ci/advisories.toml"));
    }
}
