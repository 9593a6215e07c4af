use apibump_core::{ApplyResult, ChangeRecord, DetectorSet, Error, ProjectRoot, Result, Stage};
use tokio::fs::read_to_string;

use crate::write_atomic;

/// Rewrite every planned file, one [`ApplyResult`] per change in input order.
///
/// Failures are recorded per file and never stop the remaining changes.
pub async fn apply_changes(
    root: &ProjectRoot,
    changes: &[ChangeRecord],
    detectors: &DetectorSet,
) -> Vec<ApplyResult> {
    let results = futures::future::join_all(changes.iter().map(|change| async move {
        match apply_change(root, change, detectors).await {
            Ok(()) => {
                tracing::debug!(file = %change.file().display(), "updated api version");
                ApplyResult::succeeded(change.file().to_path_buf())
            }
            Err(err) => {
                tracing::warn!(file = %change.file().display(), error = %err, "failed to apply change");
                ApplyResult::failed(change.file().to_path_buf(), err.to_string())
            }
        }
    }))
    .await;

    let failed = results.iter().filter(|result| !result.success()).count();
    tracing::info!(applied = results.len() - failed, failed, "applied changes");
    results
}

async fn apply_change(
    root: &ProjectRoot,
    change: &ChangeRecord,
    detectors: &DetectorSet,
) -> Result<()> {
    let detector = detectors
        .get(change.unit_type())
        .ok_or(Error::UnsupportedCategory {
            category: change.unit_type(),
        })?;
    let path = root.join(change.file());
    let content = read_to_string(&path)
        .await
        .map_err(|source| Error::io(Stage::Apply, &path, source))?;
    let updated = detector
        .rewrite(&content, change.new_version())
        .ok_or_else(|| Error::MissingDeclaration { path: path.clone() })?;
    write_atomic(&path, updated).await
}
