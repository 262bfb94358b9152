// src/pipeline/debian.rs

//! Source-tree preparation and the signed source-package build.

use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Context;
use regex::Regex;
use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::errors::{DebshipError, Result};
use crate::exec::{self, Invocation, filters};
use crate::pipeline::SIGN_PASSWORD_VAR;
use crate::types::StreamTag;

/// Marker line in `thirdparty/Makefile.am`. Every tab-indented recipe line
/// after it re-fetches vendored third-party sources, which must not happen
/// inside the package build.
const THIRDPARTY_MARKER: &str = "POPULATING OUR";

/// Run the upstream build steps that have to happen before `debuild`:
/// `./configure`, `make`, the third-party Makefile rewrite, `automake`.
pub async fn prepare_source_tree() -> Result<()> {
    exec::run("./configure").await?;
    exec::run("make").await?;

    disable_thirdparty_fetch(Path::new("thirdparty/Makefile.am"))?;
    fs::remove_file("thirdparty/Makefile")?;

    exec::run("automake").await?;
    Ok(())
}

/// Comment out every recipe line after the marker in `makefile`, so the
/// generated Makefile keeps its targets but stops re-downloading the
/// vendored tree.
pub fn disable_thirdparty_fetch(makefile: &Path) -> Result<()> {
    let data = fs::read_to_string(makefile)
        .with_context(|| format!("reading {}", makefile.display()))?;

    let mut patched = String::with_capacity(data.len());
    let mut found_marker = false;
    for line in data.split_inclusive('\n') {
        if found_marker && line.starts_with('\t') {
            patched.push('#');
        }
        patched.push_str(line);
        if line.contains(THIRDPARTY_MARKER) {
            found_marker = true;
        }
    }

    if !found_marker {
        debug!(makefile = %makefile.display(), "marker not found, file left unchanged");
    }

    fs::write(makefile, patched).with_context(|| format!("writing {}", makefile.display()))?;
    Ok(())
}

static CHANGES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\S*\.changes)\s").expect("valid changes-file pattern"));

/// Pull the `.changes` filename out of debuild's `signfile` line, if this
/// is that line.
pub fn find_changes_file(line: &str) -> Option<String> {
    if !(line.contains("signfile") && line.contains(".changes")) {
        return None;
    }
    CHANGES_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Run `debuild` for a signed source-only build and watch its output for
/// the name of the generated `.changes` file.
///
/// The signing passphrase is passed to gpg on the debuild command line;
/// the command is deliberately not echoed, and the engine's redaction
/// keeps it out of any output line that quotes the command back.
pub async fn build_source_package(cfg: &ConfigFile) -> Result<String> {
    let passphrase = std::env::var(SIGN_PASSWORD_VAR)
        .map_err(|_| DebshipError::ConfigError(format!("{SIGN_PASSWORD_VAR} is not set")))?;

    let cmd = format!("debuild --no-tgz-check -S -p'gpg --no-tty --passphrase {passphrase}'");
    let mut stream = Invocation::shell(cmd)
        .echo(false)
        .env("DEBEMAIL", cfg.maintainer.email.clone())
        .env("DEBFULLNAME", cfg.maintainer.name.clone())
        .env("DEB_BUILD_OPTIONS", "nocheck")
        .stream()?;

    let mut changes_file = None;
    while let Some(line) = stream.next().await {
        if let Some(name) = find_changes_file(line.text()) {
            // Highlight the line that names the artefact we care about.
            print!("{}", filters::BLUE);
            changes_file = Some(name);
        }
        match line.tag() {
            StreamTag::Out => print!("{line}"),
            StreamTag::Err => eprint!("{line}"),
        }
        print!("{}", filters::RESET);
    }
    let _ = std::io::stdout().flush();

    let changes_file = changes_file
        .ok_or_else(|| anyhow::anyhow!("debuild output did not name a .changes file"))?;
    info!(changes_file = %changes_file, "source package built");
    Ok(changes_file)
}
