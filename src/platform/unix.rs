//! Unix implementations of platform helpers.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::fs_ops::io_error_with_help_io;

/// Open the log file for appending. New files are created 0600 and the final
/// path component is never followed if it is a symlink.
pub fn open_log_file_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error_with_help_io("create log directory", parent))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600)
        .custom_flags(libc::O_NOFOLLOW)
        .open(path)
        .map_err(io_error_with_help_io("open log file", path))
}
