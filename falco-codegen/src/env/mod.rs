//! External collaborators: version control, formatters and `manage.py`.
//!
//! Each is a trait so commands can run against fakes in tests; the
//! implementations here shell out to the real tools.

mod formatter;
mod git;
mod manage;

use std::path::{Path, PathBuf};

use eyre::Result;
use falco_core::Outcome;
use falco_manifest::Manifest;

pub use formatter::CommandFormatter;
pub use git::GitStatus;
pub use manage::ManagePy;

/// Reports whether the working tree has uncommitted changes.
pub trait RepoStatus {
    fn is_clean(&self) -> Result<bool>;
}

/// Which formatter a set of files goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Python,
    Html,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Python => write!(f, "python"),
            SourceKind::Html => write!(f, "html"),
        }
    }
}

/// Formats generated files in place.
///
/// Formatting is best effort: a missing or failing tool is reported as a
/// skipped [`Outcome`], never an error.
pub trait Formatter {
    fn format(&self, kind: SourceKind, paths: &[PathBuf]) -> Outcome;
}

/// Creates and applies database migrations.
pub trait Migrator {
    fn make_migrations(&self, app_label: &str) -> Result<()>;
    fn migrate(&self) -> Result<()>;
}

/// The collaborators a command runs with.
pub struct Environment {
    pub repo: Box<dyn RepoStatus>,
    pub formatter: Box<dyn Formatter>,
    pub migrator: Box<dyn Migrator>,
}

impl Environment {
    /// Real tools, configured from the manifest and run in the project root.
    pub fn system(root: &Path, manifest: &Manifest) -> Self {
        Self {
            repo: Box::new(GitStatus::new(root)),
            formatter: Box::new(CommandFormatter::new(root, manifest.formatters.clone())),
            migrator: Box::new(ManagePy::new(root, &manifest.project.python)),
        }
    }
}
