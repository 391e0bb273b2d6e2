//! Blueprints: the template resources generated files are rendered from.
//!
//! Blueprints ship embedded in the binary and can be overridden per project by
//! placing a file with the same relative path under `[project] blueprints_dir`.

mod render;
mod sentinel;

use std::path::PathBuf;

use eyre::{Result, WrapErr};
use tracing::debug;

pub use render::Renderer;
pub use sentinel::{CODE_END, CODE_START, IMPORTS_END, IMPORTS_START, PythonBlueprint};

/// A CRUD blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blueprint {
    Forms,
    Views,
    Admin,
    List,
    Create,
    Update,
    Detail,
}

impl Blueprint {
    /// Python blueprints rendered into `<app>/<file>` by code generation.
    pub const PYTHON: [Blueprint; 2] = [Blueprint::Forms, Blueprint::Views];

    /// HTML blueprints rendered once per model.
    pub const HTML: [Blueprint; 4] = [
        Blueprint::List,
        Blueprint::Create,
        Blueprint::Update,
        Blueprint::Detail,
    ];

    /// Path relative to the blueprints directory.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::Forms => "crud/forms.py.hbs",
            Self::Views => "crud/views.py.hbs",
            Self::Admin => "crud/admin.py.hbs",
            Self::List => "crud/list.html",
            Self::Create => "crud/create.html",
            Self::Update => "crud/update.html",
            Self::Detail => "crud/detail.html",
        }
    }

    /// Name of the generated file (before any model prefix).
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Forms => "forms.py",
            Self::Views => "views.py",
            Self::Admin => "admin.py",
            Self::List => "list.html",
            Self::Create => "create.html",
            Self::Update => "update.html",
            Self::Detail => "detail.html",
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            Self::Forms => include_str!("../../blueprints/crud/forms.py.hbs"),
            Self::Views => include_str!("../../blueprints/crud/views.py.hbs"),
            Self::Admin => include_str!("../../blueprints/crud/admin.py.hbs"),
            Self::List => include_str!("../../blueprints/crud/list.html"),
            Self::Create => include_str!("../../blueprints/crud/create.html"),
            Self::Update => include_str!("../../blueprints/crud/update.html"),
            Self::Detail => include_str!("../../blueprints/crud/detail.html"),
        }
    }
}

/// Where blueprint text is loaded from.
#[derive(Debug, Clone, Default)]
pub struct Blueprints {
    overrides: Option<PathBuf>,
}

impl Blueprints {
    /// Only the embedded blueprints.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Embedded blueprints, overridden by files under `dir` when present.
    pub fn with_overrides(dir: impl Into<PathBuf>) -> Self {
        Self {
            overrides: Some(dir.into()),
        }
    }

    /// Load the text of a blueprint.
    pub fn load(&self, blueprint: Blueprint) -> Result<String> {
        if let Some(dir) = &self.overrides {
            let path = dir.join(blueprint.relative_path());
            if path.is_file() {
                debug!(path = %path.display(), "using blueprint override");
                return std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read blueprint '{}'", path.display()));
            }
        }
        Ok(blueprint.embedded().to_string())
    }

    /// Load a Python blueprint and slice it into its sentinel regions.
    pub fn load_python(&self, blueprint: Blueprint) -> Result<PythonBlueprint> {
        let text = self.load(blueprint)?;
        Ok(PythonBlueprint::parse(blueprint.relative_path(), &text))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_embedded_python_blueprints_have_sentinels() {
        let blueprints = Blueprints::embedded();
        for blueprint in Blueprint::PYTHON.into_iter().chain([Blueprint::Admin]) {
            let parsed = blueprints.load_python(blueprint).unwrap();
            assert!(parsed.outcomes.is_empty(), "{:?}", blueprint);
            assert!(!parsed.imports.trim().is_empty());
            assert!(!parsed.code.trim().is_empty());
        }
    }

    #[test]
    fn test_override_takes_precedence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("crud/list.html");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "custom {{model_name}}").unwrap();

        let blueprints = Blueprints::with_overrides(dir.path());
        assert_eq!(blueprints.load(Blueprint::List).unwrap(), "custom {{model_name}}");
        // Missing overrides fall back to the embedded text
        assert!(blueprints.load(Blueprint::Detail).unwrap().contains("{% extends"));
    }
}
