// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [package]
/// name = "znapzend"
/// repo = "https://github.com/oetiker/znapzend.git"
///
/// [archive]
/// ppa = "acme/backports"
///
/// [maintainer]
/// name = "Jane Packager"
/// email = "jane@example.org"
///
/// [signing]
/// key_uri = "https://keys.example.org/packaging.asc"
/// ```
///
/// `[signing]` is optional; everything else is required.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// What to build, from `[package]`.
    pub package: PackageSection,

    /// Where the result is uploaded, from `[archive]`.
    pub archive: ArchiveSection,

    /// Identity stamped into the package, from `[maintainer]`.
    pub maintainer: MaintainerSection,

    /// Signing-key setup from `[signing]`.
    #[serde(default)]
    pub signing: SigningSection,
}

/// Validated configuration. Constructed via `TryFrom<RawConfigFile>`; the
/// rest of the crate only ever sees this type.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub package: PackageSection,
    pub archive: ArchiveSection,
    pub maintainer: MaintainerSection,
    pub signing: SigningSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            package: raw.package,
            archive: raw.archive,
            maintainer: raw.maintainer,
            signing: raw.signing,
        }
    }

    /// Effective build directory: explicit `build_dir`, or `<name>-build`.
    pub fn build_dir(&self) -> String {
        self.package
            .build_dir
            .clone()
            .unwrap_or_else(|| format!("{}-build", self.package.name))
    }
}

/// `[package]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageSection {
    /// Debian source package name.
    pub name: String,

    /// Git URL of the upstream project to package.
    pub repo: String,

    /// Optional branch or tag to check out after cloning.
    #[serde(default)]
    pub branch: Option<String>,

    /// Scratch directory the build runs in; default `<name>-build`.
    #[serde(default)]
    pub build_dir: Option<String>,
}

/// `[archive]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveSection {
    /// PPA the changes file is uploaded to (the `ppa:` prefix is implied).
    pub ppa: String,

    /// Branch from which real uploads happen; on any other branch the
    /// upload runs in simulation mode.
    #[serde(default = "default_deploy_branch")]
    pub deploy_branch: String,
}

fn default_deploy_branch() -> String {
    "master".to_string()
}

/// `[maintainer]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct MaintainerSection {
    /// Becomes `DEBFULLNAME` in the build environment.
    pub name: String,

    /// Becomes `DEBEMAIL` in the build environment.
    pub email: String,
}

/// `[signing]` section.
///
/// The passphrase itself is never configured here; it is read from the
/// `DEBSHIP_SIGN_PASSWORD` environment variable at build time.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SigningSection {
    /// URL the signing key is fetched from and imported before building.
    #[serde(default)]
    pub key_uri: Option<String>,
}
