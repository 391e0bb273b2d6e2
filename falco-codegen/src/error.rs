use miette::Diagnostic;
use thiserror::Error;

/// Errors that stop a command before any file is touched.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{message}")]
    #[diagnostic(code(falco::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{kind} '{name}' not found")]
    #[diagnostic(code(falco::not_found))]
    NotFound {
        kind: &'static str,
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("git repository is not clean")]
    #[diagnostic(
        code(falco::dirty_repo),
        help("commit or stash your changes, or pass {flag} to run anyway")
    )]
    DirtyRepo { flag: &'static str },

    #[error("{command} only runs in debug mode")]
    #[diagnostic(
        code(falco::debug_required),
        help("set `debug = true` in the [project] table of falco.toml")
    )]
    DebugRequired { command: &'static str },
}

impl Error {
    pub fn usage(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    pub fn app_not_found(label: &str, known: &[&str]) -> Self {
        let help = if known.is_empty() {
            "no apps are declared in falco.toml".to_string()
        } else {
            format!("available apps: {}", known.join(", "))
        };
        Self::NotFound {
            kind: "app",
            name: label.to_string(),
            help: Some(help),
        }
    }

    pub fn model_not_found(app_label: &str, model: &str, known: &[&str]) -> Self {
        let help = if known.is_empty() {
            format!("app '{}' declares no models", app_label)
        } else {
            format!("models in '{}': {}", app_label, known.join(", "))
        };
        Self::NotFound {
            kind: "model",
            name: format!("{}.{}", app_label, model),
            help: Some(help),
        }
    }
}
