//! Windows implementations of platform helpers (no POSIX modes; best-effort).

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use crate::fs_ops::io_error_with_help_io;

/// Open the log file for appending.
pub fn open_log_file_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error_with_help_io("create log directory", parent))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(io_error_with_help_io("open log file", path))
}
