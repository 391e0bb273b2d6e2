//! State passed through the `crud` pipeline phases.

use std::path::{Path, PathBuf};

use falco_core::Outcome;
use falco_manifest::Manifest;
use indexmap::IndexSet;

use super::{CrudRequest, diagnostic::Diagnostic};
use crate::{
    blueprint::{Blueprints, Renderer},
    env::Environment,
    model::ModelDescriptor,
};

/// Context passed through all pipeline phases.
///
/// Carries the request and collaborators in, and the resolved models, touched
/// files and diagnostics out.
pub struct CrudContext<'a> {
    pub request: &'a CrudRequest,
    pub manifest: &'a Manifest,
    /// Project root, the directory containing `falco.toml`
    pub root: &'a Path,
    pub env: &'a Environment,
    pub renderer: Renderer,
    pub blueprints: Blueprints,
    pub app_dir: PathBuf,
    pub app_module: String,
    /// Models selected by the resolve phase.
    pub models: Vec<ModelDescriptor>,
    /// Python files written so far, in order, for the Python formatter.
    pub python_files: IndexSet<PathBuf>,
    /// HTML files written so far, for the HTML formatter.
    pub html_files: IndexSet<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CrudContext<'a> {
    pub fn new(
        request: &'a CrudRequest,
        manifest: &'a Manifest,
        root: &'a Path,
        env: &'a Environment,
    ) -> Self {
        let label = request.app_label();
        let app = manifest.app(label).cloned().unwrap_or_default();
        let blueprints = match manifest.project.blueprints_dir(root) {
            Some(dir) => Blueprints::with_overrides(dir),
            None => Blueprints::embedded(),
        };

        Self {
            request,
            manifest,
            root,
            env,
            renderer: Renderer::new(),
            blueprints,
            app_dir: app.dir(root, label),
            app_module: app.module_name(label).to_string(),
            models: Vec::new(),
            python_files: IndexSet::new(),
            html_files: IndexSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn app_label(&self) -> &str {
        self.request.app_label()
    }

    /// Directory receiving the app's HTML templates.
    pub fn templates_dir(&self) -> PathBuf {
        self.manifest
            .project
            .app_templates_dir(self.root, self.app_label(), &self.app_dir)
    }

    /// Names of the resolved models, comma separated.
    pub fn model_names(&self) -> String {
        self.models
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Every file touched, Python first.
    pub fn touched_files(&self) -> impl Iterator<Item = &PathBuf> {
        self.python_files.iter().chain(self.html_files.iter())
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Record the outcome of a best-effort operation, keeping skips as warnings.
    pub fn record(&mut self, phase: &str, outcome: Outcome) -> Outcome {
        if let Outcome::Skipped(reason) = &outcome {
            self.diagnostics
                .push(Diagnostic::skipped(phase, reason.clone()));
        }
        outcome
    }
}
