//! Removal of generated migration files.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tracing::debug;

/// What [`remove_migrations`] deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovedMigrations {
    /// Apps that have a `migrations` package, sorted by name
    pub apps: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// Delete every migration module of every app directly under `apps_dir`.
///
/// An app is any child directory with a `migrations` directory; everything in
/// it ending in `.py` except `__init__.py` is removed.
pub fn remove_migrations(apps_dir: &Path) -> Result<RemovedMigrations> {
    let mut removed = RemovedMigrations::default();

    for app_dir in sorted_entries(apps_dir)? {
        let migrations_dir = app_dir.join("migrations");
        if !migrations_dir.is_dir() {
            continue;
        }

        for file in sorted_entries(&migrations_dir)? {
            let is_migration = file.is_file()
                && file.extension().is_some_and(|ext| ext == "py")
                && file.file_name().is_some_and(|name| name != "__init__.py");
            if !is_migration {
                continue;
            }
            std::fs::remove_file(&file)
                .wrap_err_with(|| format!("failed to remove '{}'", file.display()))?;
            debug!(path = %file.display(), "removed migration");
            removed.files.push(file);
        }

        if let Some(name) = app_dir.file_name() {
            removed.apps.push(name.to_string_lossy().into_owned());
        }
    }

    Ok(removed)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read '{}'", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort();
    Ok(entries)
}
