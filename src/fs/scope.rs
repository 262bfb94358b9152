// src/fs/scope.rs

//! Scoped working-directory changes.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::Result;

/// RAII guard that changes the process working directory and restores the
/// previous one when dropped, on every exit path including unwinding.
///
/// The working directory is process-wide state; this guard is the only way
/// the crate mutates it. Guards nest stack-fashion: the innermost guard
/// restores first.
#[derive(Debug)]
pub struct DirScope {
    previous: PathBuf,
    current: PathBuf,
}

impl DirScope {
    /// Change into `path` (a leading `~` is expanded) until the guard is
    /// dropped.
    pub fn enter(path: impl AsRef<str>) -> Result<Self> {
        let previous = env::current_dir()?;
        let target = shellexpand::tilde(path.as_ref());
        env::set_current_dir(target.as_ref())?;
        let current = env::current_dir()?;
        debug!(from = %previous.display(), to = %current.display(), "entered directory");
        Ok(Self { previous, current })
    }

    /// The directory that was current before entering this scope.
    pub fn previous(&self) -> &Path {
        &self.previous
    }

    /// The resolved directory this scope changed into.
    pub fn current(&self) -> &Path {
        &self.current
    }
}

impl Drop for DirScope {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            warn!(dir = %self.previous.display(), error = %err, "failed to restore working directory");
        }
    }
}
