mod common;
use crate::common::init_tracing;

use std::env;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Mutex;

use debship::errors::Result;
use debship::fs::DirScope;

// The working directory is process-wide; these tests must not interleave.
static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Entering a scope changes the directory; dropping it restores the
/// previous one.
#[test]
fn scope_restores_on_normal_exit() {
    init_tracing();
    let _serial = CWD_LOCK.lock().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let before = env::current_dir().unwrap();

    {
        let scope = DirScope::enter(dir.path().to_string_lossy()).unwrap();
        assert_eq!(scope.previous(), before);
        assert_eq!(env::current_dir().unwrap(), scope.current());
    }

    assert_eq!(env::current_dir().unwrap(), before);
}

/// The previous directory is restored even when the scope's body bails
/// out with an error.
#[test]
fn scope_restores_on_error_exit() {
    init_tracing();
    let _serial = CWD_LOCK.lock().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let before = env::current_dir().unwrap();

    let failing = || -> Result<()> {
        let _scope = DirScope::enter(dir.path().to_string_lossy())?;
        Err(debship::errors::DebshipError::ConfigError(
            "simulated failure".to_string(),
        ))
    };

    assert!(failing().is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

/// Restoration also survives a panic unwinding through the scope.
#[test]
fn scope_restores_on_panic() {
    init_tracing();
    let _serial = CWD_LOCK.lock().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let before = env::current_dir().unwrap();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _scope = DirScope::enter(dir.path().to_string_lossy()).unwrap();
        panic!("boom");
    }));

    assert!(result.is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

/// Nested scopes restore innermost-first.
#[test]
fn nested_scopes_restore_in_reverse_order() {
    init_tracing();
    let _serial = CWD_LOCK.lock().unwrap();

    let outer_dir = tempfile::tempdir().unwrap();
    let inner_dir = tempfile::tempdir().unwrap();
    let before = env::current_dir().unwrap();

    {
        let outer = DirScope::enter(outer_dir.path().to_string_lossy()).unwrap();
        {
            let inner = DirScope::enter(inner_dir.path().to_string_lossy()).unwrap();
            assert_eq!(inner.previous(), outer.current());
            assert_eq!(env::current_dir().unwrap(), inner.current());
        }
        // Inner dropped: back to the outer scope's directory.
        assert_eq!(env::current_dir().unwrap(), outer.current());
    }

    assert_eq!(env::current_dir().unwrap(), before);
}

/// A leading `~` is expanded to the home directory.
#[test]
fn tilde_is_expanded() {
    init_tracing();
    let _serial = CWD_LOCK.lock().unwrap();

    let Ok(home) = env::var("HOME") else {
        // No home in this environment; nothing to assert.
        return;
    };

    let before = env::current_dir().unwrap();
    {
        let scope = DirScope::enter("~").unwrap();
        assert_eq!(
            scope.current(),
            std::fs::canonicalize(&home).unwrap().as_path()
        );
    }
    assert_eq!(env::current_dir().unwrap(), before);
}
