use crate::{Error, model::ModelPath};

/// What the `crud` command was asked to do.
#[derive(Debug, Clone)]
pub struct CrudRequest {
    pub model_path: ModelPath,
    /// Field names left out of forms, admin and templates
    pub excluded_fields: Vec<String>,
    pub only_python: bool,
    pub only_html: bool,
    /// Generate the app's root views (`index`, `create`, ...) for a single model
    pub entry_point: bool,
    pub login_required: bool,
    /// Run `makemigrations` and `migrate` before generating
    pub migrate: bool,
    pub allow_dirty: bool,
}

impl CrudRequest {
    pub fn new(model_path: ModelPath) -> Self {
        Self {
            model_path,
            excluded_fields: Vec::new(),
            only_python: false,
            only_html: false,
            entry_point: false,
            login_required: false,
            migrate: false,
            allow_dirty: false,
        }
    }

    pub fn app_label(&self) -> &str {
        &self.model_path.app_label
    }

    pub fn model_name(&self) -> Option<&str> {
        self.model_path.model_name.as_deref()
    }

    pub fn generates_python(&self) -> bool {
        !self.only_html
    }

    pub fn generates_html(&self) -> bool {
        !self.only_python
    }

    /// Reject flag combinations that cannot be honoured.
    ///
    /// The only-flags are not checked against each other: together they
    /// suppress both halves and nothing is generated.
    pub fn validate(&self) -> Result<(), Error> {
        if self.entry_point && self.model_name().is_none() {
            return Err(Error::usage(
                "--entry-point requires a model name",
                format!("pass the model as well, e.g. {}.Product", self.app_label()),
            ));
        }
        Ok(())
    }
}
