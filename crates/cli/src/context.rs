use anyhow::{Context, Result};
use apibump_apex::apex_detectors;
use apibump_core::ProjectRoot;
use apibump_utils::Session;
use std::path::{Path, PathBuf};

/// Resolve the project root from `--path`, falling back to the current directory.
///
/// # Errors
/// Returns error if the directory does not exist or cannot be read.
pub fn resolve_root(path: Option<&Path>) -> Result<ProjectRoot> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => current_dir()?,
    };
    Ok(ProjectRoot::new(&path)?)
}

/// Open a pipeline session with the Apex detectors registered.
///
/// # Errors
/// Returns error if the project root cannot be resolved.
pub fn open_session(path: Option<&Path>) -> Result<Session> {
    Ok(Session::new(resolve_root(path)?, apex_detectors()))
}

/// # Errors
/// Returns error if retrieving the current directory fails.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to read the current directory")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = resolve_root(Some(temp_dir.path())).unwrap();
        assert_eq!(root.path(), temp_dir.path().canonicalize().unwrap());
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_resolve_root_missing_path() {
        let temp_dir = TempDir::new().unwrap();
        let err = resolve_root(Some(&temp_dir.path().join("missing"))).unwrap_err();
        assert!(err.to_string().contains("is not usable"));
        temp_dir.close().unwrap();
    }
}
