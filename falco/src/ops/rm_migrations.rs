//! Remove-migrations operation - delete every app's migration modules.

use std::path::Path;

use eyre::Result;
use falco_codegen::{Error, env::RepoStatus, migrations::remove_migrations};
use falco_manifest::Manifest;
use tracing::debug;

use crate::reports::RmMigrationsReport;

/// Options for the rm-migrations operation.
pub struct RmMigrationsOptions<'a> {
    /// Directory containing the apps, overriding `[project] apps_dir`.
    pub apps_dir: Option<&'a Path>,
    pub skip_git_check: bool,
}

/// Execute the rm-migrations operation.
///
/// Refuses to run unless the project is in debug mode, and on a dirty
/// working tree unless the git check is skipped.
pub fn rm_migrations(
    manifest: &Manifest,
    root: &Path,
    repo: &dyn RepoStatus,
    opts: RmMigrationsOptions,
) -> Result<RmMigrationsReport> {
    if !manifest.project.debug {
        return Err(Error::DebugRequired {
            command: "rm-migrations",
        }
        .into());
    }
    if !opts.skip_git_check && !repo.is_clean()? {
        return Err(Error::DirtyRepo {
            flag: "--skip-git-check",
        }
        .into());
    }

    let apps_dir = match opts.apps_dir {
        Some(dir) => root.join(dir),
        None => manifest.project.apps_dir(root),
    };
    debug!(apps_dir = %apps_dir.display(), "removing migrations");
    let removed = remove_migrations(&apps_dir)?;

    Ok(RmMigrationsReport {
        apps: removed.apps,
        files_removed: removed.files.len(),
    })
}
