//! Configuration discovery against the real process environment
//!
//! These tests mutate process-global state (cwd and environment) and are
//! serialized.

use serial_test::serial;
use std::path::PathBuf;

use advisory_policy::gate::BaselineSource;
use advisory_policy::{CliArgs, Config};

struct EnvGuard {
    previous: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(value: &str) -> Self {
        let previous = std::env::var_os("ADVISORY_BASELINE");
        // SAFETY: tests in this file are #[serial], so no other thread reads the environment.
        unsafe { std::env::set_var("ADVISORY_BASELINE", value) };
        Self { previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::set.
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var("ADVISORY_BASELINE", value),
                None => std::env::remove_var("ADVISORY_BASELINE"),
            }
        }
    }
}

#[test]
#[serial]
fn env_var_selects_baseline() {
    let _guard = EnvGuard::set("/ci/advisories.toml");

    let config = Config::discover(&CliArgs::default()).unwrap();

    assert_eq!(config.location.source, BaselineSource::Environment);
    assert_eq!(config.location.path, PathBuf::from("/ci/advisories.toml"));
}

#[test]
#[serial]
fn explicit_flag_beats_env_var() {
    let temp = tempfile::tempdir().unwrap();
    let explicit = temp.path().join("explicit.toml");
    std::fs::write(&explicit, "").unwrap();
    let _guard = EnvGuard::set("/ci/advisories.toml");

    let args = CliArgs {
        baseline: Some(explicit.clone()),
        ..CliArgs::default()
    };
    let config = Config::discover(&args).unwrap();

    assert_eq!(config.location.source, BaselineSource::Explicit);
    assert_eq!(config.location.path, explicit);
}

#[test]
#[serial]
fn empty_env_var_falls_back_to_default() {
    let _guard = EnvGuard::set("");

    let config = Config::discover(&CliArgs::default()).unwrap();

    assert_eq!(config.location.source, BaselineSource::Default);
    assert!(
        config
            .location
            .path
            .ends_with("security/advisory-baseline.toml")
    );
}
