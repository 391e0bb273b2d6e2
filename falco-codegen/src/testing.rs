//! Test utilities: fake collaborators and on-disk project fixtures.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    path::{Path, PathBuf},
    rc::Rc,
};

use eyre::{Result, WrapErr};
use falco_core::{Outcome, SkipReason};
use falco_manifest::Manifest;
use tempfile::TempDir;

use crate::env::{Environment, Formatter, Migrator, RepoStatus, SourceKind};

#[derive(Default)]
struct FakeState {
    clean: bool,
    formatter_installed: bool,
    repo_checks: Cell<usize>,
    formatted: RefCell<Vec<(SourceKind, Vec<PathBuf>)>>,
    migrations: RefCell<Vec<String>>,
}

/// Records every call made to the collaborators it hands out.
pub struct FakeEnvironment {
    state: Rc<FakeState>,
}

impl FakeEnvironment {
    /// A clean repository with formatters installed.
    pub fn clean() -> Self {
        Self::with(true, true)
    }

    /// A repository with uncommitted changes.
    pub fn dirty() -> Self {
        Self::with(false, true)
    }

    /// A clean repository where no formatter is installed.
    pub fn without_formatters() -> Self {
        Self::with(true, false)
    }

    fn with(clean: bool, formatter_installed: bool) -> Self {
        Self {
            state: Rc::new(FakeState {
                clean,
                formatter_installed,
                ..Default::default()
            }),
        }
    }

    /// Collaborators backed by this fake.
    pub fn environment(&self) -> Environment {
        Environment {
            repo: Box::new(FakeRepo(Rc::clone(&self.state))),
            formatter: Box::new(FakeFormatter(Rc::clone(&self.state))),
            migrator: Box::new(FakeMigrator(Rc::clone(&self.state))),
        }
    }

    /// How many times the repository status was queried.
    pub fn repo_checks(&self) -> usize {
        self.state.repo_checks.get()
    }

    /// Files passed to the formatter for `kind`, across all calls.
    pub fn formatted(&self, kind: SourceKind) -> Vec<PathBuf> {
        self.state
            .formatted
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .flat_map(|(_, paths)| paths.iter().cloned())
            .collect()
    }

    /// Migration commands run, e.g. `["makemigrations shop", "migrate"]`.
    pub fn migration_calls(&self) -> Vec<String> {
        self.state.migrations.borrow().clone()
    }
}

struct FakeRepo(Rc<FakeState>);

impl RepoStatus for FakeRepo {
    fn is_clean(&self) -> Result<bool> {
        self.0.repo_checks.set(self.0.repo_checks.get() + 1);
        Ok(self.0.clean)
    }
}

struct FakeFormatter(Rc<FakeState>);

impl Formatter for FakeFormatter {
    fn format(&self, kind: SourceKind, paths: &[PathBuf]) -> Outcome {
        if !self.0.formatter_installed {
            return Outcome::skipped(SkipReason::ToolUnavailable {
                tool: format!("{} formatter", kind),
            });
        }
        self.0.formatted.borrow_mut().push((kind, paths.to_vec()));
        Outcome::Applied
    }
}

struct FakeMigrator(Rc<FakeState>);

impl Migrator for FakeMigrator {
    fn make_migrations(&self, app_label: &str) -> Result<()> {
        self.0
            .migrations
            .borrow_mut()
            .push(format!("makemigrations {}", app_label));
        Ok(())
    }

    fn migrate(&self) -> Result<()> {
        self.0.migrations.borrow_mut().push("migrate".to_string());
        Ok(())
    }
}

/// Default project routes module written by [`ProjectFixture::new`].
pub const ROOT_URLS: &str = "from django.contrib import admin
from django.urls import path

urlpatterns = [
    path(\"admin/\", admin.site.urls),
]
";

/// A Django project in a temporary directory.
pub struct ProjectFixture {
    dir: TempDir,
    manifest: Manifest,
}

impl ProjectFixture {
    /// Create a project with `falco.toml` and `config/urls.py`.
    pub fn new(falco_toml: &str) -> Result<Self> {
        let dir = TempDir::new().wrap_err("failed to create temp dir")?;
        let manifest = Manifest::from_str_with_filename(falco_toml, "falco.toml")
            .map_err(|e| eyre::eyre!("{}", e))?;
        let fixture = Self { dir, manifest };
        fixture.write("falco.toml", falco_toml)?;
        fixture.write("config/urls.py", ROOT_URLS)?;
        Ok(fixture)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write a file relative to the project root, creating directories.
    pub fn write(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))
    }

    /// Read a file relative to the project root.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Every file under the root with its content, keyed by relative path.
    pub fn files(&self) -> Result<BTreeMap<PathBuf, String>> {
        let mut files = BTreeMap::new();
        collect_files(self.root(), self.root(), &mut files)?;
        Ok(files)
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, String>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else {
            let relative = path.strip_prefix(root)?.to_path_buf();
            files.insert(relative, std::fs::read_to_string(&path)?);
        }
    }
    Ok(())
}
