use std::io;
use std::path::{Path, PathBuf};

use flattener::FlattenError;
use flattener::fs_ops::{describe_io_error, io_error_with_help_io};

#[test]
fn notfound_fallback_hint_includes_path() {
    let p = Path::new("/nonexistent/path/for/test");
    let msg = describe_io_error("list directory", p, &io::Error::from(io::ErrorKind::NotFound));
    assert!(msg.contains("list directory"));
    assert!(msg.contains(p.to_string_lossy().as_ref()));
    assert!(msg.contains("path not found"));
}

#[cfg(unix)]
#[test]
fn cross_device_hint_present() {
    let msg = describe_io_error(
        "move file",
        Path::new("/mnt/other/a.txt"),
        &io::Error::from_raw_os_error(libc::EXDEV),
    );
    assert!(msg.contains("different filesystems"), "msg was: {msg}");
    assert!(msg.contains("os code"));
}

#[cfg(unix)]
#[test]
fn directory_collision_hint_present() {
    let msg = describe_io_error(
        "move file",
        Path::new("/r/a/photos"),
        &io::Error::from_raw_os_error(libc::EISDIR),
    );
    assert!(msg.contains("directory with the same name"), "msg was: {msg}");
}

#[test]
fn io_adapter_preserves_kind() {
    let p = Path::new("/tmp/flattener.log");
    let f = io_error_with_help_io("open log file", p);
    let wrapped = f(io::Error::from(io::ErrorKind::PermissionDenied));
    assert_eq!(wrapped.kind(), io::ErrorKind::PermissionDenied);
    assert!(wrapped.to_string().contains("permission denied"));
}

#[cfg(unix)]
#[test]
fn remove_dir_error_display_carries_hint() {
    let err = FlattenError::RemoveDir {
        path: PathBuf::from("/r/a"),
        source: io::Error::from_raw_os_error(libc::ENOTEMPTY),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("remove directory '/r/a'"), "msg was: {msg}");
    assert!(msg.contains("not empty"));
    assert_eq!(err.kind(), "remove_dir");
}
