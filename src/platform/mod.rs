//! Platform-specific helpers.
//! Hides Unix/Windows differences in how the log file is opened.

use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::open_log_file_append;

#[cfg(not(unix))]
pub use windows::open_log_file_append;

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tempdir_has_no_symlinked_ancestor_below_it() {
        let td = tempfile::tempdir().unwrap();
        let real = fs::canonicalize(td.path()).unwrap();
        let log = real.join("logs").join("flattener.log");
        assert!(!path_has_symlink_ancestor(&log).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempfile::tempdir().unwrap();
        let real = fs::canonicalize(td.path()).unwrap();
        fs::create_dir_all(real.join("target")).unwrap();
        std::os::unix::fs::symlink(real.join("target"), real.join("link")).unwrap();
        assert!(path_has_symlink_ancestor(&real.join("link").join("f.log")).unwrap());
    }
}
