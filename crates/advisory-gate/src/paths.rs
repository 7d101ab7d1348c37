//! Path utilities for locating the advisory baseline

use std::path::{Path, PathBuf};

/// Environment variable that overrides the default baseline location
pub const BASELINE_ENV_VAR: &str = "ADVISORY_BASELINE";

/// Baseline location relative to the repository root
pub const DEFAULT_BASELINE_RELATIVE: &str = "security/advisory-baseline.toml";

/// How many parent directories to inspect when looking for `.git`
const MAX_ROOT_SEARCH_DEPTH: usize = 10;

/// Find repository root by looking for a `.git` entry.
///
/// Falls back to `start` when no ancestor within the search depth has one.
pub fn find_repo_root(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();

    for _ in 0..MAX_ROOT_SEARCH_DEPTH {
        if current.join(".git").exists() {
            return current;
        }

        if !current.pop() {
            break;
        }
    }

    start.to_path_buf()
}

/// Default baseline path for a working directory
pub fn default_baseline_path(start: &Path) -> PathBuf {
    find_repo_root(start).join(DEFAULT_BASELINE_RELATIVE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_root_found_from_subdirectory() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("crates").join("deep");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_repo_root(&nested), temp.path());
        assert!(
            default_baseline_path(&nested).ends_with("security/advisory-baseline.toml")
        );
        assert!(default_baseline_path(&nested).starts_with(temp.path()));
    }

    #[test]
    fn test_git_file_counts_as_root() {
        // Worktrees and submodules use a `.git` file instead of a directory.
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join(".git"), "gitdir: ../elsewhere").unwrap();
        let nested = temp.path().join("src");
        std::fs::create_dir(&nested).unwrap();

        assert_eq!(find_repo_root(&nested), temp.path());
    }
}
