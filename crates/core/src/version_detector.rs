use std::collections::HashMap;

use crate::FileCategory;

/// Strategy for finding and rewriting a file's declared API version.
///
/// Registered per [`FileCategory`] in a [`DetectorSet`], so a stricter parser
/// can replace the regex one without touching discovery or apply.
pub trait VersionDetector: std::fmt::Debug + Send + Sync {
    /// Current version of the first declaration in `content`, if any.
    fn detect(&self, content: &str) -> Option<String>;

    /// `content` with its first declaration set to `new_version`, or `None`
    /// when there is no declaration to rewrite.
    fn rewrite(&self, content: &str, new_version: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct DetectorSet {
    detectors: HashMap<FileCategory, Box<dyn VersionDetector>>,
}

impl DetectorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, category: FileCategory, detector: Box<dyn VersionDetector>) -> Self {
        self.detectors.insert(category, detector);
        self
    }

    #[must_use]
    pub fn get(&self, category: FileCategory) -> Option<&dyn VersionDetector> {
        self.detectors.get(&category).map(|detector| detector.as_ref())
    }
}
