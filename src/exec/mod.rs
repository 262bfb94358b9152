// src/exec/mod.rs

//! Command-execution engine.
//!
//! This module runs the external programs the packaging pipeline is built
//! from (git, make, debuild, dput, ...) using `tokio::process::Command`,
//! and exposes each process's combined output as a single stream of tagged
//! lines. Both pipes are drained concurrently, so a child writing heavily
//! to one stream can never deadlock against an unread buffer on the other.
//!
//! - [`invocation`] holds [`Invocation`], one configured request to run a
//!   command, and its three call shapes (`stream`, `run`, `capture_stdout`).
//! - [`reader`] drains a single child pipe line by line.
//! - [`stream`] fans both pipe readers into one [`OutputStream`].
//! - [`filters`] applies secret redaction and stderr colorization before a
//!   line reaches the caller.

pub mod filters;
pub mod invocation;
pub mod reader;
pub mod stream;

pub use invocation::{CommandSpec, Invocation};
pub use stream::OutputStream;

use crate::errors::Result;

/// Run `cmd` with default options, forwarding its output to our own
/// stdout/stderr.
pub async fn run(cmd: &str) -> Result<()> {
    Invocation::new(cmd)?.run().await
}

/// Like [`run`], but the command line is interpreted by the shell (needed
/// for pipes and redirection).
pub async fn run_shell(cmd: impl Into<String>) -> Result<()> {
    Invocation::shell(cmd).run().await
}

/// Run `cmd` with default options and collect its stdout into one string.
pub async fn capture_stdout(cmd: &str) -> Result<String> {
    Invocation::new(cmd)?.capture_stdout().await
}
