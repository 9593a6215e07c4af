use apibump_core::{Error, FileCategory, FileInventory, ProjectRoot, Result, Stage};
use glob::{MatchOptions, Pattern};
use ignore::WalkBuilder;
use std::{path::Path, sync::LazyLock};

use crate::get_relative_path;

static CATEGORY_PATTERNS: LazyLock<Vec<(FileCategory, Pattern)>> = LazyLock::new(|| {
    FileCategory::ALL
        .into_iter()
        .map(|category| {
            (
                category,
                Pattern::new(category.pattern()).expect("hardcoded glob must compile"),
            )
        })
        .collect()
});

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Category whose pattern matches a root-relative path
#[must_use]
pub fn categorize(relative_path: &Path) -> Option<FileCategory> {
    let candidate = relative_path.to_string_lossy().replace('\\', "/");
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.matches_with(&candidate, MATCH_OPTIONS))
        .map(|(category, _)| *category)
}

/// Inventory every Apex class, trigger and LWC script under `root`.
///
/// Entries are visited sorted by file name and dot-prefixed files and
/// directories are skipped. Ignore files are not consulted. Symlinks to regular
/// files are listed under the link's own path; symlinked directories are not
/// descended into.
///
/// # Errors
/// Returns [`Error::Path`] if the root can no longer be listed, or [`Error::Io`]
/// if any directory entry below it cannot be read.
pub async fn discover(root: &ProjectRoot) -> Result<FileInventory> {
    let walk_root = root.clone();
    let inventory = tokio::task::spawn_blocking(move || walk_project(&walk_root))
        .await
        .map_err(|e| Error::io(Stage::Discover, root.path(), std::io::Error::other(e)))??;
    tracing::info!(
        classes = inventory.count(FileCategory::SourceUnit),
        triggers = inventory.count(FileCategory::TriggerUnit),
        lwc = inventory.count(FileCategory::ComponentScript),
        root = %root.path().display(),
        "discovered project files"
    );
    Ok(inventory)
}

fn walk_project(root: &ProjectRoot) -> Result<FileInventory> {
    std::fs::read_dir(root.path()).map_err(|e| Error::Path {
        path: root.path().to_path_buf(),
        reason: e.to_string(),
    })?;

    let walker = WalkBuilder::new(root.path())
        .standard_filters(false)
        .hidden(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut found = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| walk_error(root.path(), err))?;
        let is_file = entry.file_type().is_some_and(|file_type| file_type.is_file())
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        let Some(relative_path) = get_relative_path(root.path(), entry.path()) else {
            continue;
        };
        if let Some(category) = categorize(&relative_path) {
            tracing::debug!(file = %relative_path.display(), ?category, "matched file");
            found.push((category, relative_path));
        }
    }
    Ok(found.into_iter().collect())
}

/// Convert a walk error into [`Error::Io`] naming the entry that failed.
fn walk_error(root: &Path, err: ignore::Error) -> Error {
    let path = failed_path(&err).map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    Error::io(Stage::Discover, path, source)
}

fn failed_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            failed_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::Partial(errs) => errs.iter().find_map(failed_path),
        _ => None,
    }
}
