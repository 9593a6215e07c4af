use apibump_core::{Error, Result, Stage};
use std::{
    io::{ErrorKind, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Replace `path` with `content` through a temporary file renamed into place.
///
/// Existing permissions are carried over to the new file. A symlink is
/// followed so the link stays in place and its target receives the content.
///
/// # Errors
/// Returns [`Error::Io`] tagged with the apply stage if any step fails; the
/// original file is left untouched in that case.
pub async fn write_atomic(path: &Path, content: String) -> Result<()> {
    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || persist(&target, content.as_bytes()))
        .await
        .map_err(|e| Error::io(Stage::Apply, path, std::io::Error::other(e)))?
        .map_err(|source| Error::io(Stage::Apply, path, source))
}

fn persist(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let is_symlink = std::fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    let target = if is_symlink {
        std::fs::canonicalize(path)?
    } else {
        path.to_path_buf()
    };
    let path = target.as_path();
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(ErrorKind::InvalidInput, "path has no parent"))?;
    let permissions = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content)?;
    file.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_atomic_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Foo.cls");
        std::fs::write(&path, "apiVersion = 58.0").unwrap();

        write_atomic(&path, "apiVersion = 60.0".to_string())
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "apiVersion = 60.0");
        let leftovers = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_write_atomic_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/Foo.cls");

        let err = write_atomic(&path, String::new()).await.unwrap_err();
        assert!(matches!(err, Error::Io { stage: Stage::Apply, .. }));
        temp_dir.close().unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Foo.cls");
        std::fs::write(&path, "apiVersion = 58.0").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, "apiVersion = 60.0".to_string())
            .await
            .unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
        temp_dir.close().unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_atomic_through_symlink_updates_target() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("Real.cls");
        let link = temp_dir.path().join("Link.cls");
        std::fs::write(&real, "apiVersion = 58.0").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomic(&link, "apiVersion = 60.0".to_string())
            .await
            .unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&real).unwrap(), "apiVersion = 60.0");
        temp_dir.close().unwrap();
    }
}
