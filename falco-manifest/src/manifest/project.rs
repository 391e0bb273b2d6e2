use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Project-wide settings from the `[project]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Dotted module of the root URL configuration (Django's `ROOT_URLCONF`)
    #[serde(default = "default_root_urlconf")]
    pub root_urlconf: String,

    /// First entry of `TEMPLATES[0]["DIRS"]`, if any
    pub templates_dir: Option<PathBuf>,

    /// Directory containing the apps (used by `rm-migrations`)
    pub apps_dir: Option<PathBuf>,

    /// Mirrors Django's `DEBUG`; destructive commands require it
    #[serde(default)]
    pub debug: bool,

    /// Python interpreter used to run `manage.py`
    #[serde(default = "default_python")]
    pub python: String,

    /// Directory with blueprint overrides
    pub blueprints_dir: Option<PathBuf>,
}

fn default_root_urlconf() -> String {
    "config.urls".to_string()
}

fn default_python() -> String {
    "python".to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root_urlconf: default_root_urlconf(),
            templates_dir: None,
            apps_dir: None,
            debug: false,
            python: default_python(),
            blueprints_dir: None,
        }
    }
}

impl ProjectConfig {
    /// Path of the root URL module (e.g., "config.urls" -> `<root>/config/urls.py`).
    pub fn root_urls_path(&self, root: &Path) -> PathBuf {
        let relative = self.root_urlconf.trim().replace('.', "/");
        root.join(format!("{}.py", relative))
    }

    /// Directory that receives the HTML templates of an app.
    ///
    /// `<templates_dir>/<label>` when a project templates directory is set,
    /// otherwise `<app dir>/templates`.
    pub fn app_templates_dir(&self, root: &Path, label: &str, app_dir: &Path) -> PathBuf {
        match &self.templates_dir {
            Some(dir) => root.join(dir).join(label),
            None => app_dir.join("templates"),
        }
    }

    /// Directory scanned by `rm-migrations`, defaulting to the project root.
    pub fn apps_dir(&self, root: &Path) -> PathBuf {
        match &self.apps_dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }

    /// Directory with blueprint overrides, if configured.
    pub fn blueprints_dir(&self, root: &Path) -> Option<PathBuf> {
        self.blueprints_dir.as_ref().map(|dir| root.join(dir))
    }
}

/// External formatter commands from the `[formatters]` table.
///
/// Each entry is a program followed by its arguments; touched file paths are
/// appended when it runs. An empty list disables the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct FormattersConfig {
    #[serde(default = "default_python_formatter")]
    pub python: Vec<String>,

    #[serde(default = "default_html_formatter")]
    pub html: Vec<String>,
}

fn default_python_formatter() -> Vec<String> {
    vec!["ruff".to_string(), "format".to_string()]
}

fn default_html_formatter() -> Vec<String> {
    vec!["djlint".to_string(), "--reformat".to_string()]
}

impl Default for FormattersConfig {
    fn default() -> Self {
        Self {
            python: default_python_formatter(),
            html: default_html_formatter(),
        }
    }
}
