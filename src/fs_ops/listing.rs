//! Directory listing.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One immediate child of a listed directory.
#[derive(Debug, Clone)]
pub struct DirEntryInfo {
    pub name: OsString,
    pub path: PathBuf,
    /// From the entry's own file type; symlinks are never followed.
    pub is_dir: bool,
}

/// Read every immediate entry of `dir` up front, in the order the OS returns them.
///
/// The whole listing is collected before anything is moved so files relocated
/// into the root during the walk never show up as new root entries.
pub fn list_dir(dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        entries.push(DirEntryInfo {
            name: entry.file_name(),
            path: entry.path(),
            is_dir: file_type.is_dir(),
        });
    }
    Ok(entries)
}
