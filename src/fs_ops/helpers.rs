//! I/O error helpers.
//!
//! Every filesystem call made while flattening can fail for the usual reasons
//! (permissions, busy files, read-only mounts, name collisions). These helpers
//! turn a bare io::Error into a message that names the operation, the path and,
//! where we recognise the failure, a short hint about what to check.

use std::io;
use std::path::Path;

/// Hint keyed by raw OS error code.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    let hint = match code {
        libc::EACCES | libc::EPERM => "permission denied; check ownership and write permissions",
        libc::EXDEV => "source and root are on different filesystems; rename cannot cross devices",
        libc::EBUSY => "resource busy; another process is using it",
        libc::ENOENT => "path not found; it may have been removed during the run",
        libc::EEXIST => "target already exists",
        libc::ENOTEMPTY => "directory is not empty; some entries were not moved",
        libc::EISDIR => "a directory with the same name exists in the root",
        libc::ENOTDIR => "a path component is not a directory",
        libc::EROFS => "read-only filesystem; cannot modify entries here",
        libc::ELOOP => "too many symbolic link levels; possible symlink cycle",
        libc::ENAMETOOLONG => "filename or path too long",
        libc::EMFILE => "process file descriptor limit reached",
        libc::ENFILE => "system-wide file table overflow",
        _ => return None,
    };
    Some(hint)
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    // Win32 error codes
    let hint = match code {
        5 => "access denied; check permissions",
        17 => "not same device; rename cannot cross volumes",
        32 => "sharing violation; file is in use",
        2 | 3 => "path not found; it may have been removed during the run",
        80 | 183 => "target already exists",
        145 => "directory is not empty; some entries were not moved",
        19 => "write protected / read-only media",
        206 => "filename or path too long",
        _ => return None,
    };
    Some(hint)
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

/// Hint keyed by portable ErrorKind, used when no raw OS code is available.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been removed during the run"),
        io::ErrorKind::AlreadyExists => Some("target already exists"),
        io::ErrorKind::DirectoryNotEmpty => Some("directory is not empty; some entries were not moved"),
        io::ErrorKind::ReadOnlyFilesystem => Some("read-only filesystem; cannot modify entries here"),
        _ => None,
    }
}

/// Format "<op> '<path>': <error> - <hint> [os code: N]".
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(hint) = hint {
        msg.push_str(" - ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Adapter for io::Result code: keeps the original ErrorKind, enriches the message.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), describe_io_error(op, path, &e))
}
