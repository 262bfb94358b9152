mod common;
use crate::common::init_tracing;

use std::fs;
use std::os::unix::fs::PermissionsExt;

use debship::fs::{clean_dir, copy_tree, ensure_dir};

fn mode_of(path: &std::path::Path) -> u32 {
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

/// ensure_dir creates missing parents and applies the requested mode to
/// the leaf.
#[test]
fn ensure_dir_creates_nested_path() {
    init_tracing();
    let base = tempfile::tempdir().unwrap();

    let target = base.path().join("a/b/c");
    let resolved = ensure_dir(&target, 0o700).unwrap();

    assert!(resolved.is_absolute());
    assert!(resolved.is_dir());
    assert_eq!(mode_of(&resolved), 0o700);
}

/// Calling ensure_dir twice succeeds both times and leaves the directory
/// with the requested permissions.
#[test]
fn ensure_dir_is_idempotent() {
    init_tracing();
    let base = tempfile::tempdir().unwrap();
    let target = base.path().join("build");

    let first = ensure_dir(&target, 0o700).unwrap();
    let second = ensure_dir(&target, 0o700).unwrap();

    assert_eq!(first, second);
    assert_eq!(mode_of(&second), 0o700);
}

/// An existing directory gets its permissions re-asserted, not preserved.
#[test]
fn ensure_dir_reasserts_mode_on_existing() {
    init_tracing();
    let base = tempfile::tempdir().unwrap();
    let target = base.path().join("build");

    fs::create_dir(&target).unwrap();
    fs::set_permissions(&target, fs::Permissions::from_mode(0o755)).unwrap();

    let resolved = ensure_dir(&target, 0o700).unwrap();
    assert_eq!(mode_of(&resolved), 0o700);
}

/// clean_dir removes a populated tree and treats a missing one as done.
#[test]
fn clean_dir_removes_tree_and_tolerates_absence() {
    init_tracing();
    let base = tempfile::tempdir().unwrap();
    let target = base.path().join("scratch");

    fs::create_dir_all(target.join("nested")).unwrap();
    fs::write(target.join("nested/file"), b"data").unwrap();

    clean_dir(&target).unwrap();
    assert!(!target.exists());

    // Second call: nothing there, still fine.
    clean_dir(&target).unwrap();
}

/// copy_tree reproduces nested directories and file contents.
#[test]
fn copy_tree_copies_recursively() {
    init_tracing();
    let base = tempfile::tempdir().unwrap();

    let src = base.path().join("debian");
    fs::create_dir_all(src.join("source")).unwrap();
    fs::write(src.join("control"), b"Source: demo\n").unwrap();
    fs::write(src.join("source/format"), b"3.0 (native)\n").unwrap();

    let dst = base.path().join("clone/debian");
    fs::create_dir(base.path().join("clone")).unwrap();
    copy_tree(&src, &dst).unwrap();

    assert_eq!(fs::read(dst.join("control")).unwrap(), b"Source: demo\n");
    assert_eq!(
        fs::read(dst.join("source/format")).unwrap(),
        b"3.0 (native)\n"
    );
}

/// copy_tree refuses an already-existing destination.
#[test]
fn copy_tree_requires_fresh_destination() {
    init_tracing();
    let base = tempfile::tempdir().unwrap();

    let src = base.path().join("src");
    let dst = base.path().join("dst");
    fs::create_dir(&src).unwrap();
    fs::create_dir(&dst).unwrap();

    assert!(copy_tree(&src, &dst).is_err());
}
