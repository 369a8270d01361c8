#![cfg(unix)]

use flattener::{Config, ErrorPolicy, FlattenError, Flattener, flatten};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::tempdir;

fn running_as_root() -> bool {
    // Root bypasses permission checks, so these scenarios cannot be reproduced.
    unsafe { libc::geteuid() == 0 }
}

fn set_mode(path: &Path, mode: u32) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms).unwrap();
}

/// Root is read-only, so every rename into it fails with EACCES.
fn readonly_root_tree() -> tempfile::TempDir {
    let td = tempdir().unwrap();
    let root = td.path();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a/one.txt"), "1").unwrap();
    fs::write(root.join("b/two.txt"), "2").unwrap();
    set_mode(root, 0o555);
    td
}

#[test]
fn continue_policy_counts_failures_and_finishes_walk() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let td = readonly_root_tree();
    let root = td.path();

    let report = flatten(&Config::new(root)).expect("continue policy should not abort");
    set_mode(root, 0o755);

    assert_eq!(report.dirs_processed, 3);
    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed, 2);
    assert_eq!(report.relocation_errors, 2);
    assert!(root.join("a/one.txt").exists());
    assert!(root.join("b/two.txt").exists());
}

#[test]
fn fail_fast_policy_stops_at_first_failure() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let td = readonly_root_tree();
    let root = td.path();

    let cfg = Config::new(root).with_error_policy(ErrorPolicy::FailFast);
    let mut flattener = Flattener::new(&cfg);
    let err = flattener.run().expect_err("fail-fast should abort");
    set_mode(root, 0o755);

    let msg = err.to_string().to_ascii_lowercase();
    assert!(matches!(err, FlattenError::Relocate { .. }), "got {err:?}");
    assert!(msg.contains("permission denied"), "unexpected message: {msg}");

    let report = flattener.report();
    assert_eq!(report.failed, 1, "counter is kept for the failed file");
    assert_eq!(report.succeeded, 0);
    // Only the first subdirectory was entered.
    assert_eq!(report.dirs_processed, 2);
}

#[test]
fn unreadable_subdirectory_is_skipped_under_continue() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let td = tempdir().unwrap();
    let root = td.path();
    fs::create_dir_all(root.join("locked")).unwrap();
    fs::create_dir_all(root.join("open")).unwrap();
    fs::write(root.join("locked/secret.txt"), "s").unwrap();
    fs::write(root.join("open/free.txt"), "f").unwrap();
    set_mode(&root.join("locked"), 0o000);

    let report = flatten(&Config::new(root).with_delete(true)).expect("continue policy");
    set_mode(&root.join("locked"), 0o755);

    assert_eq!(report.other_errors, 1);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.dirs_kept, 1);
    assert!(root.join("free.txt").exists());
    assert!(!root.join("open").exists());
    assert!(root.join("locked/secret.txt").exists());
}

#[test]
fn unreadable_subdirectory_aborts_under_fail_fast() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let td = tempdir().unwrap();
    let root = td.path();
    fs::create_dir_all(root.join("locked")).unwrap();
    set_mode(&root.join("locked"), 0o000);

    let cfg = Config::new(root).with_error_policy(ErrorPolicy::FailFast);
    let res = flatten(&cfg);
    set_mode(&root.join("locked"), 0o755);

    assert!(matches!(res, Err(FlattenError::ListDir { .. })), "got {res:?}");
}

#[test]
fn unlistable_root_is_always_fatal() {
    if running_as_root() {
        eprintln!("skipping: running as root");
        return;
    }
    let td = tempdir().unwrap();
    let root = td.path().join("root");
    fs::create_dir_all(root.join("a")).unwrap();
    set_mode(&root, 0o000);

    let res = flatten(&Config::new(&root));
    set_mode(&root, 0o755);

    assert!(matches!(res, Err(FlattenError::ListDir { .. })), "got {res:?}");
}
