use std::path::{Path, PathBuf};

/// Path of `path` relative to `root`, or `None` if it lies outside `root`
#[must_use]
pub fn get_relative_path(root: &Path, path: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}
