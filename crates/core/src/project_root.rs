use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Canonical, absolute path of the project a pipeline run operates on.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    /// # Errors
    /// Returns [`Error::Path`] if the path does not exist, is not a directory, or cannot be listed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let path_error = |reason: String| Error::Path {
            path: path.to_path_buf(),
            reason,
        };
        let canonical = std::fs::canonicalize(path).map_err(|e| path_error(e.to_string()))?;
        if !canonical.is_dir() {
            return Err(path_error("not a directory".to_string()));
        }
        std::fs::read_dir(&canonical).map_err(|e| path_error(e.to_string()))?;
        Ok(Self(canonical))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolve a path relative to the root
    #[must_use]
    pub fn join(&self, relative: &Path) -> PathBuf {
        self.0.join(relative)
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_root_is_absolute() {
        let temp_dir = TempDir::new().unwrap();
        let root = ProjectRoot::new(temp_dir.path()).unwrap();
        assert!(root.path().is_absolute());
        assert_eq!(
            root.join(Path::new("classes/Foo.cls")),
            root.path().join("classes/Foo.cls")
        );
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_project_root_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        let err = ProjectRoot::new(&missing).unwrap_err();
        assert!(matches!(err, Error::Path { ref path, .. } if path == &missing));
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_project_root_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("sfdx-project.json");
        std::fs::write(&file, "{}").unwrap();
        let err = ProjectRoot::new(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
        temp_dir.close().unwrap();
    }
}
