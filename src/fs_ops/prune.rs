//! Removal of emptied subdirectories.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::errors::FlattenError;

/// Remove `dir`, which must already be empty. Never recursive: a directory
/// that still holds anything fails with the OS "not empty" error.
pub fn remove_emptied_dir(dir: &Path) -> Result<(), FlattenError> {
    fs::remove_dir(dir).map_err(|source| FlattenError::RemoveDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!(path = %dir.display(), "Removed directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn removes_empty_directory() {
        let dir = assert_fs::TempDir::new().unwrap();
        let sub = dir.child("empty");
        sub.create_dir_all().unwrap();

        remove_emptied_dir(sub.path()).unwrap();
        assert!(!sub.path().exists());
    }

    #[test]
    fn refuses_non_empty_directory() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("full/left.txt").touch().unwrap();

        let err = remove_emptied_dir(&dir.path().join("full")).unwrap_err();
        assert!(matches!(err, FlattenError::RemoveDir { .. }));
        assert!(dir.path().join("full/left.txt").exists());
    }
}
