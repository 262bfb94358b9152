// src/pipeline/git.rs

//! Git plumbing for the pipeline.

use crate::errors::Result;
use crate::exec;
use crate::fs::DirScope;

/// Current branch of the repository in the working directory.
pub async fn current_branch() -> Result<String> {
    let branch = exec::capture_stdout("git rev-parse --abbrev-ref HEAD").await?;
    Ok(branch.trim().to_string())
}

/// Directory git would clone `url` into: the URL basename minus `.git`.
pub fn default_clone_dir(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or(url)
        .trim_end_matches(".git")
        .to_string()
}

/// Clone `url` into `dir` and optionally check out `branch`.
///
/// `dir` defaults to the URL basename minus `.git`, matching what git
/// itself would pick. Returns the clone directory, relative to the working
/// directory.
pub async fn clone_and_checkout(
    url: &str,
    branch: Option<&str>,
    dir: Option<&str>,
) -> Result<String> {
    let dir = match dir {
        Some(d) => d.to_string(),
        None => default_clone_dir(url),
    };

    exec::run(&format!("git clone {url} {dir}")).await?;

    if let Some(branch) = branch {
        let _scope = DirScope::enter(&dir)?;
        exec::run(&format!("git checkout {branch}")).await?;
    }

    Ok(dir)
}
