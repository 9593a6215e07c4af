use apibump_core::{
    ChangeRecord, DetectorSet, Error, FileCategory, FileInventory, ProjectRoot, Result, Stage,
};
use tokio::fs::read_to_string;

/// Compute the change list that brings every versioned file to `target_version`.
///
/// Files without a declaration, or already at `target_version`, are skipped.
/// Versions are compared as strings, so `60` and `60.0` differ. Component
/// scripts are never planned.
///
/// # Errors
/// Returns [`Error::InvalidVersion`] for a blank target, or [`Error::Io`] for the
/// first file that cannot be read as UTF-8 text; no partial plan is returned.
pub async fn plan_changes(
    root: &ProjectRoot,
    inventory: &FileInventory,
    target_version: &str,
    detectors: &DetectorSet,
) -> Result<Vec<ChangeRecord>> {
    if target_version.trim().is_empty() {
        return Err(Error::InvalidVersion);
    }

    let mut changes = Vec::new();
    for (category, file) in inventory.versioned_files() {
        let Some(detector) = detectors.get(category) else {
            tracing::debug!(?category, "no detector registered");
            continue;
        };
        let path = root.join(file);
        let content = read_to_string(&path)
            .await
            .map_err(|source| Error::io(Stage::Plan, &path, source))?;

        let Some(current_version) = detector.detect(&content) else {
            tracing::debug!(file = %file.display(), "no apiVersion declaration");
            continue;
        };
        if current_version == target_version {
            tracing::debug!(file = %file.display(), "already at target version");
            continue;
        }

        changes.push(ChangeRecord::new(
            file.to_path_buf(),
            current_version,
            target_version.to_string(),
            FileCategory::from_extension(file).unwrap_or(category),
        ));
    }

    tracing::info!(planned = changes.len(), target_version, "planned changes");
    Ok(changes)
}
