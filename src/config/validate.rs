// src/config/validate.rs

use std::path::Path;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{DebshipError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::DebshipError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

/// Standalone validation entry point, for callers that want to check a raw
/// config without converting it.
pub fn validate_config(raw: &RawConfigFile) -> Result<()> {
    validate_raw_config(raw)
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_package(cfg)?;
    validate_archive(cfg)?;
    validate_maintainer(cfg)?;
    Ok(())
}

fn validate_package(cfg: &RawConfigFile) -> Result<()> {
    if cfg.package.name.trim().is_empty() {
        return Err(DebshipError::ConfigError(
            "[package].name must not be empty".to_string(),
        ));
    }
    if cfg.package.repo.trim().is_empty() {
        return Err(DebshipError::ConfigError(
            "[package].repo must not be empty".to_string(),
        ));
    }
    if let Some(build_dir) = &cfg.package.build_dir {
        if build_dir.trim().is_empty() {
            return Err(DebshipError::ConfigError(
                "[package].build_dir must not be empty when set".to_string(),
            ));
        }
        if Path::new(build_dir) == Path::new("/") {
            return Err(DebshipError::ConfigError(
                "[package].build_dir must not be the filesystem root".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_archive(cfg: &RawConfigFile) -> Result<()> {
    if cfg.archive.ppa.trim().is_empty() {
        return Err(DebshipError::ConfigError(
            "[archive].ppa must not be empty".to_string(),
        ));
    }
    if cfg.archive.ppa.contains(char::is_whitespace) {
        return Err(DebshipError::ConfigError(format!(
            "[archive].ppa must not contain whitespace (got {:?})",
            cfg.archive.ppa
        )));
    }
    if cfg.archive.deploy_branch.trim().is_empty() {
        return Err(DebshipError::ConfigError(
            "[archive].deploy_branch must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_maintainer(cfg: &RawConfigFile) -> Result<()> {
    if cfg.maintainer.name.trim().is_empty() {
        return Err(DebshipError::ConfigError(
            "[maintainer].name must not be empty".to_string(),
        ));
    }
    if !cfg.maintainer.email.contains('@') {
        return Err(DebshipError::ConfigError(format!(
            "[maintainer].email does not look like an email address (got {:?})",
            cfg.maintainer.email
        )));
    }
    Ok(())
}
