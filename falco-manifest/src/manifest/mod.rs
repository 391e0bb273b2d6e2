//! Manifest types and parsing for falco.toml files.

mod app;
mod file;
mod parse;
mod project;
mod validate;

pub use app::{App, Field, Model};
pub use file::FalcoToml;
use indexmap::IndexMap;
pub use project::{FormattersConfig, ProjectConfig};
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for falco.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// External formatter commands
    #[serde(default)]
    pub formatters: FormattersConfig,

    /// Installed apps keyed by label, in declaration order
    #[serde(default)]
    pub apps: IndexMap<String, App>,
}

impl Manifest {
    /// Look up an app by its label.
    pub fn app(&self, label: &str) -> Option<&App> {
        self.apps.get(label)
    }
}
