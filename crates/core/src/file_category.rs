use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, path::Path};

/// Kinds of files found in a platform project.
///
/// Source and trigger units carry an `apiVersion` declaration; component
/// scripts are only inventoried.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FileCategory {
    /// Apex class (`.cls`)
    SourceUnit,
    /// Apex trigger (`.trigger`)
    TriggerUnit,
    /// Lightning Web Component script (`.js` under an `lwc` directory)
    ComponentScript,
}

impl FileCategory {
    pub const ALL: [Self; 3] = [Self::SourceUnit, Self::TriggerUnit, Self::ComponentScript];

    /// Glob pattern, relative to the project root, that selects files of this category
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::SourceUnit => "**/*.cls",
            Self::TriggerUnit => "**/*.trigger",
            Self::ComponentScript => "**/lwc/**/*.js",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SourceUnit => "Apex Class",
            Self::TriggerUnit => "Apex Trigger",
            Self::ComponentScript => "LWC Script",
        }
    }

    /// Whether files of this category are planned against a target version
    #[must_use]
    pub const fn is_versioned(&self) -> bool {
        matches!(self, Self::SourceUnit | Self::TriggerUnit)
    }

    /// Derive the versioned unit type from a file extension.
    ///
    /// Component scripts are recognised by location rather than extension, so
    /// they never come back from this function.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "cls" => Some(Self::SourceUnit),
            "trigger" => Some(Self::TriggerUnit),
            _ => None,
        }
    }
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::SourceUnit => self.label().blue().bold(),
                Self::TriggerUnit => self.label().magenta().bold(),
                Self::ComponentScript => self.label().yellow().bold(),
            }
        )
    }
}
