use serde::Serialize;
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::FileCategory;

/// Files found under a project root, grouped by [`FileCategory`].
///
/// Paths are relative to the root and keep discovery order. The inventory is
/// built in one go through [`FromIterator`] and is read-only afterwards.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct FileInventory {
    classes: Vec<PathBuf>,
    triggers: Vec<PathBuf>,
    lwc: Vec<PathBuf>,
}

impl FileInventory {
    #[must_use]
    pub fn files(&self, category: FileCategory) -> &[PathBuf] {
        match category {
            FileCategory::SourceUnit => &self.classes,
            FileCategory::TriggerUnit => &self.triggers,
            FileCategory::ComponentScript => &self.lwc,
        }
    }

    #[must_use]
    pub fn count(&self, category: FileCategory) -> usize {
        self.files(category).len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.classes.len() + self.triggers.len() + self.lwc.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Source units followed by trigger units, in discovery order
    pub fn versioned_files(&self) -> impl Iterator<Item = (FileCategory, &Path)> {
        FileCategory::ALL
            .into_iter()
            .filter(FileCategory::is_versioned)
            .flat_map(move |category| {
                self.files(category)
                    .iter()
                    .map(move |path| (category, path.as_path()))
            })
    }

    fn files_mut(&mut self, category: FileCategory) -> &mut Vec<PathBuf> {
        match category {
            FileCategory::SourceUnit => &mut self.classes,
            FileCategory::TriggerUnit => &mut self.triggers,
            FileCategory::ComponentScript => &mut self.lwc,
        }
    }
}

impl FromIterator<(FileCategory, PathBuf)> for FileInventory {
    /// Duplicate paths within a category are dropped, keeping the first occurrence.
    fn from_iter<I: IntoIterator<Item = (FileCategory, PathBuf)>>(iter: I) -> Self {
        let mut inventory = Self::default();
        let mut seen = HashSet::new();
        for (category, path) in iter {
            if seen.insert((category, path.clone())) {
                inventory.files_mut(category).push(path);
            }
        }
        inventory
    }
}
