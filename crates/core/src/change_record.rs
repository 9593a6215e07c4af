use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use crate::FileCategory;

/// A planned rewrite of one file's `apiVersion` declaration.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    file: PathBuf,
    current_version: String,
    new_version: String,
    unit_type: FileCategory,
}

impl ChangeRecord {
    #[must_use]
    pub fn new(
        file: PathBuf,
        current_version: String,
        new_version: String,
        unit_type: FileCategory,
    ) -> Self {
        Self {
            file,
            current_version,
            new_version,
            unit_type,
        }
    }

    /// Path relative to the project root
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    #[must_use]
    pub fn new_version(&self) -> &str {
        &self.new_version
    }

    #[must_use]
    pub fn unit_type(&self) -> FileCategory {
        self.unit_type
    }
}

impl Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} → {}",
            self.file.display(),
            self.unit_type,
            self.current_version.red(),
            self.new_version.green().bold()
        )
    }
}
