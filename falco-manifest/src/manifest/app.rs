//! Application and model registry entries.

use std::path::{Path, PathBuf};

use falco_core::{camel_case_to_spaces, field_label};
use serde::Deserialize;

/// A Django application declared as `[apps.<label>]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct App {
    /// Directory of the app, relative to the project root (defaults to the label)
    pub path: Option<PathBuf>,

    /// Python module path used in `include()` (defaults to the label)
    pub module: Option<String>,

    /// Registered models, in declaration order
    #[serde(default)]
    pub models: Vec<Model>,
}

impl App {
    /// Directory of the app, resolved against the project root.
    pub fn dir(&self, root: &Path, label: &str) -> PathBuf {
        match &self.path {
            Some(path) => root.join(path),
            None => root.join(label),
        }
    }

    /// Python module name of the app (e.g., "apps.shop").
    pub fn module_name<'a>(&'a self, label: &'a str) -> &'a str {
        self.module.as_deref().unwrap_or(label)
    }
}

/// A data model as `[[apps.<label>.models]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Model {
    /// Class name (e.g., "Product")
    pub name: String,

    /// Human label, `Meta.verbose_name`
    pub verbose_name: Option<String>,

    /// Human plural label, `Meta.verbose_name_plural`
    pub verbose_name_plural: Option<String>,

    /// Concrete fields, in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Model {
    /// `Meta.verbose_name`, defaulting the way Django does ("BlogPost" -> "blog post").
    pub fn verbose_name(&self) -> String {
        self.verbose_name
            .clone()
            .unwrap_or_else(|| camel_case_to_spaces(&self.name))
    }

    /// `Meta.verbose_name_plural`, defaulting to the verbose name plus "s".
    pub fn verbose_name_plural(&self) -> String {
        self.verbose_name_plural
            .clone()
            .unwrap_or_else(|| format!("{}s", self.verbose_name()))
    }
}

/// A model field as `[[apps.<label>.models.fields]]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,

    /// Django field class name (e.g., "CharField")
    #[serde(rename = "type")]
    pub class_name: String,

    #[serde(default = "default_editable")]
    pub editable: bool,

    pub verbose_name: Option<String>,
}

fn default_editable() -> bool {
    true
}

impl Field {
    /// Human label, defaulting to the name with underscores as spaces.
    pub fn verbose_name(&self) -> String {
        self.verbose_name
            .clone()
            .unwrap_or_else(|| field_label(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> Model {
        Model {
            name: name.to_string(),
            verbose_name: None,
            verbose_name_plural: None,
            fields: Vec::new(),
        }
    }

    #[test]
    fn test_model_verbose_defaults() {
        let m = model("BlogPost");
        assert_eq!(m.verbose_name(), "blog post");
        assert_eq!(m.verbose_name_plural(), "blog posts");
    }

    #[test]
    fn test_model_verbose_overrides() {
        let m = Model {
            verbose_name: Some("entry".into()),
            ..model("Category")
        };
        assert_eq!(m.verbose_name(), "entry");
        assert_eq!(m.verbose_name_plural(), "entrys");

        let m = Model {
            verbose_name_plural: Some("categories".into()),
            ..model("Category")
        };
        assert_eq!(m.verbose_name_plural(), "categories");
    }

    #[test]
    fn test_app_defaults() {
        let app = App::default();
        let root = Path::new("/project");
        assert_eq!(app.dir(root, "shop"), PathBuf::from("/project/shop"));
        assert_eq!(app.module_name("shop"), "shop");

        let app = App {
            path: Some("apps/shop".into()),
            module: Some("apps.shop".into()),
            models: Vec::new(),
        };
        assert_eq!(app.dir(root, "shop"), PathBuf::from("/project/apps/shop"));
        assert_eq!(app.module_name("shop"), "apps.shop");
    }
}
