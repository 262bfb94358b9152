// src/lib.rs

pub mod config;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod pipeline;
pub mod types;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::loader::load_and_validate;
use crate::errors::Result;

/// High-level entry point: load and validate the configuration at
/// `config_path`, then run the packaging pipeline it describes.
///
/// This wires together:
/// - config loading
/// - the signing-key import
/// - clone / patch / build of the source package
/// - the archive upload
///
/// Returns the absolute build directory, so callers can report where the
/// artefacts ended up.
pub async fn run(config_path: impl AsRef<Path>) -> Result<PathBuf> {
    let cfg = load_and_validate(config_path.as_ref())?;
    info!(package = %cfg.package.name, "starting packaging pipeline");
    pipeline::run(&cfg).await
}
