//! Root directory validation.
//! Verifies the root exists, is a directory and can be listed before any file is touched.

use std::fs;
use std::io;
use tracing::{debug, info};

use super::types::Config;
use crate::errors::FlattenError;

impl Config {
    /// Check that `root` is set, exists, is a directory and is readable.
    ///
    /// Uses `metadata` (follows symlinks) so a root given as a symlink to a
    /// directory is accepted.
    pub fn validate(&self) -> Result<(), FlattenError> {
        let root = &self.root;
        if root.as_os_str().is_empty() {
            return Err(FlattenError::Usage);
        }

        let meta = match fs::metadata(root) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("root does not exist: {}", root.display());
                return Err(FlattenError::RootNotFound(root.clone()));
            }
            Err(source) => {
                debug!("cannot stat root {}: {}", root.display(), source);
                return Err(FlattenError::RootUnreadable {
                    path: root.clone(),
                    source,
                });
            }
        };
        if !meta.is_dir() {
            debug!("root is not a directory: {}", root.display());
            return Err(FlattenError::RootNotDirectory(root.clone()));
        }

        fs::read_dir(root).map_err(|source| FlattenError::RootUnreadable {
            path: root.clone(),
            source,
        })?;
        debug!("root readable: {}", root.display());

        info!(
            root = %root.display(),
            delete = self.delete,
            overwrite = self.overwrite,
            policy = ?self.error_policy,
            "Config validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn empty_root_is_usage_error() {
        let err = Config::default().validate().unwrap_err();
        assert!(matches!(err, FlattenError::Usage));
    }

    #[test]
    fn missing_root_is_reported() {
        let dir = assert_fs::TempDir::new().unwrap();
        let cfg = Config::new(dir.path().join("nope"));
        assert!(matches!(cfg.validate(), Err(FlattenError::RootNotFound(_))));
    }

    #[test]
    fn file_root_is_not_a_directory() {
        let dir = assert_fs::TempDir::new().unwrap();
        let file = dir.child("plain.txt");
        file.touch().unwrap();
        let cfg = Config::new(file.path());
        assert!(matches!(cfg.validate(), Err(FlattenError::RootNotDirectory(_))));
    }

    #[test]
    fn existing_directory_passes() {
        let dir = assert_fs::TempDir::new().unwrap();
        Config::new(dir.path()).validate().unwrap();
    }
}
