// src/pipeline/upload.rs

//! Signing-key import and archive upload.

use tracing::info;

use crate::errors::Result;
use crate::exec::{self, Invocation};

/// Fetch the signing key and import it into the local gpg keyring.
///
/// Runs quiet and unechoed: neither the key material nor gpg's chatter
/// belongs in the logs.
pub async fn import_signing_key(key_uri: &str) -> Result<()> {
    Invocation::shell(format!("curl -SlL {key_uri} | gpg --import"))
        .echo(false)
        .quiet(true)
        .run()
        .await
}

/// Upload `changes_file` to the archive with dput. When `deploy` is false
/// the upload runs in simulation mode (`-s`).
pub async fn upload_changes(ppa: &str, changes_file: &str, deploy: bool) -> Result<()> {
    let cmd = if deploy {
        format!("dput -u ppa:{ppa} {changes_file}")
    } else {
        format!("dput -u -s ppa:{ppa} {changes_file}")
    };

    exec::run(&cmd).await?;
    info!(ppa = %ppa, changes_file = %changes_file, simulated = !deploy, "upload finished");
    Ok(())
}
