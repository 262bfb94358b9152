#![allow(dead_code)]

use debship::config::{
    ArchiveSection, ConfigFile, MaintainerSection, PackageSection, RawConfigFile, SigningSection,
};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                package: PackageSection {
                    name: "demo".to_string(),
                    repo: "https://example.org/demo.git".to_string(),
                    branch: None,
                    build_dir: None,
                },
                archive: ArchiveSection {
                    ppa: "acme/demo".to_string(),
                    deploy_branch: "master".to_string(),
                },
                maintainer: MaintainerSection {
                    name: "Test Maintainer".to_string(),
                    email: "maintainer@example.org".to_string(),
                },
                signing: SigningSection::default(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.package.name = name.to_string();
        self
    }

    pub fn repo(mut self, repo: &str) -> Self {
        self.config.package.repo = repo.to_string();
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.config.package.branch = Some(branch.to_string());
        self
    }

    pub fn build_dir(mut self, build_dir: &str) -> Self {
        self.config.package.build_dir = Some(build_dir.to_string());
        self
    }

    pub fn ppa(mut self, ppa: &str) -> Self {
        self.config.archive.ppa = ppa.to_string();
        self
    }

    pub fn deploy_branch(mut self, branch: &str) -> Self {
        self.config.archive.deploy_branch = branch.to_string();
        self
    }

    pub fn maintainer(mut self, name: &str, email: &str) -> Self {
        self.config.maintainer.name = name.to_string();
        self.config.maintainer.email = email.to_string();
        self
    }

    pub fn key_uri(mut self, uri: &str) -> Self {
        self.config.signing.key_uri = Some(uri.to_string());
        self
    }

    /// The raw, unvalidated form, for tests that exercise validation.
    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
