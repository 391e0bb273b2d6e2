use std::{path::PathBuf, process::Command};

use eyre::{Result, WrapErr};
use tracing::debug;

use super::RepoStatus;

/// `git status --porcelain` in a directory.
///
/// The tree counts as clean when git prints nothing, which includes
/// directories that are not git repositories at all.
pub struct GitStatus {
    dir: PathBuf,
}

impl GitStatus {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RepoStatus for GitStatus {
    fn is_clean(&self) -> Result<bool> {
        let output = Command::new("git")
            .args(["status", "--porcelain"])
            .current_dir(&self.dir)
            .output()
            .wrap_err("failed to run `git status`, is git installed?")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(dir = %self.dir.display(), status = %stdout.trim(), "git status");
        Ok(stdout.trim().is_empty())
    }
}
