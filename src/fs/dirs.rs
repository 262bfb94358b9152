// src/fs/dirs.rs

//! Directory creation, removal and copying.

use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::{Path, PathBuf};

use anyhow::Context;
use nix::unistd::{chown, getgid, getuid};
use tracing::debug;

use crate::errors::Result;

/// Create `path` (and any missing parents) with the given permission bits,
/// returning its absolute form.
///
/// An already-existing directory is not an error: ownership is re-asserted
/// to the current effective user/group and the permission bits are
/// re-applied, so repeated calls converge on the same state. Any other
/// failure propagates.
pub fn ensure_dir(path: impl AsRef<Path>, mode: u32) -> Result<PathBuf> {
    let dir = std::path::absolute(path.as_ref())?;

    if let Some(parent) = dir.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut builder = fs::DirBuilder::new();
    builder.mode(mode);
    match builder.create(&dir) {
        Ok(()) => {
            debug!(dir = %dir.display(), mode = format_args!("{mode:o}"), "created directory");
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            chown(&dir, Some(getuid()), Some(getgid())).map_err(std::io::Error::from)?;
            fs::set_permissions(&dir, fs::Permissions::from_mode(mode))?;
            debug!(dir = %dir.display(), mode = format_args!("{mode:o}"), "directory exists, re-asserted ownership");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(dir)
}

/// Recursively delete `path`. A missing directory is a no-op; anything
/// else propagates.
pub fn clean_dir(path: impl AsRef<Path>) -> Result<()> {
    match fs::remove_dir_all(path.as_ref()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Recursively copy the directory tree at `src` to `dst`.
///
/// `dst` must not already exist.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir(dst).with_context(|| format!("creating {}", dst.display()))?;

    for entry in fs::read_dir(src).with_context(|| format!("reading dir {}", src.display()))? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
