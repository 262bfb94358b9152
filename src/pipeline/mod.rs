// src/pipeline/mod.rs

//! The packaging pipeline: clone, patch, build, sign, upload.
//!
//! Every step here is a thin collaborator around [`crate::exec`]: it
//! formats a command line, runs it through the engine, and consumes the
//! resulting line stream. The sequencing and the filesystem scaffolding
//! live in this module; all process handling lives in the engine.
//!
//! - [`git`] resolves the current branch and clones the upstream project.
//! - [`debian`] prepares the source tree and builds the signed source
//!   package.
//! - [`upload`] imports the signing key and pushes the changes file to the
//!   archive.

pub mod debian;
pub mod git;
pub mod upload;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::fs::{DirScope, clean_dir, copy_tree, ensure_dir};

/// Environment variable holding the signing passphrase.
pub const SIGN_PASSWORD_VAR: &str = "DEBSHIP_SIGN_PASSWORD";

/// Run the whole pipeline for `cfg`. Returns the absolute build directory.
///
/// Uploads are real only when the current branch of the working directory
/// matches `[archive].deploy_branch`; on any other branch dput runs in
/// simulation mode. The `debian/` directory next to the config provides
/// the packaging files vendored into the clone.
pub async fn run(cfg: &ConfigFile) -> Result<PathBuf> {
    if let Some(key_uri) = &cfg.signing.key_uri {
        upload::import_signing_key(key_uri).await?;
    }

    // Decided before any directory changes, against the project checkout.
    let deploy = git::current_branch().await? == cfg.archive.deploy_branch;
    info!(deploy, "resolved upload mode");

    let build_dir = cfg.build_dir();
    clean_dir(&build_dir)?;
    let build_dir = ensure_dir(&build_dir, 0o700)?;

    // Clone into the build dir and vendor our debian/ directory into it.
    let source_dir = {
        let scope = DirScope::enter(build_dir.to_string_lossy())?;
        let clone_dir =
            git::clone_and_checkout(&cfg.package.repo, cfg.package.branch.as_deref(), None).await?;
        copy_tree(
            &scope.previous().join("debian"),
            &Path::new(&clone_dir).join("debian"),
        )?;
        std::path::absolute(&clone_dir)?
    };

    let changes_file = {
        let _scope = DirScope::enter(source_dir.to_string_lossy())?;
        debian::prepare_source_tree().await?;
        debian::build_source_package(cfg).await?
    };

    {
        let _scope = DirScope::enter(build_dir.to_string_lossy())?;
        upload::upload_changes(&cfg.archive.ppa, &changes_file, deploy).await?;
    }

    info!(build_dir = %build_dir.display(), changes_file = %changes_file, "pipeline complete");
    Ok(build_dir)
}
