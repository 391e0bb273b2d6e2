//! Blueprint rendering contexts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{FieldDescriptor, ModelDescriptor};

/// Context for Python blueprints (`forms.py`, `views.py`, `admin.py`).
#[derive(Debug, Clone, Serialize)]
pub struct PythonContext<'a> {
    pub login_required: bool,
    pub app_label: &'a str,
    pub model_name: &'a str,
    pub model_name_plural: &'a str,
    pub model_verbose_name_plural: &'a str,
    pub model_has_file_fields: bool,
    pub model_has_editable_date_fields: bool,
    pub model_fields: &'a IndexMap<String, FieldDescriptor>,
    pub entry_point: bool,
}

impl<'a> PythonContext<'a> {
    pub fn new(
        app_label: &'a str,
        model: &'a ModelDescriptor,
        login_required: bool,
        entry_point: bool,
    ) -> Self {
        Self {
            login_required,
            app_label,
            model_name: &model.name,
            model_name_plural: &model.name_plural,
            model_verbose_name_plural: &model.verbose_name_plural,
            model_has_file_fields: model.has_file_fields,
            model_has_editable_date_fields: model.has_editable_date_fields,
            model_fields: &model.fields,
            entry_point,
        }
    }
}

/// Context for HTML blueprints.
#[derive(Debug, Clone, Serialize)]
pub struct HtmlContext<'a> {
    pub app_label: &'a str,
    pub model_name: &'a str,
    pub model_name_plural: &'a str,
    pub model_verbose_name: &'a str,
    pub model_verbose_name_plural: &'a str,
    /// Django expression printing the object, e.g. `{{product}}`
    pub model_obj_accessor: String,
    pub model_has_file_fields: bool,
    pub model_fields: &'a IndexMap<String, FieldDescriptor>,
    pub list_view_url: String,
    pub create_view_url: String,
    pub detail_view_url: String,
    pub update_view_url: String,
    pub delete_view_url: String,
}

impl<'a> HtmlContext<'a> {
    pub fn new(app_label: &'a str, model: &'a ModelDescriptor) -> Self {
        let object_name = model.lower_name();
        let url = |view: &str| format!("{{% url '{}:{}_{}' %}}", app_label, object_name, view);
        let object_url = |view: &str| {
            format!(
                "{{% url '{}:{}_{}' {}.pk %}}",
                app_label, object_name, view, object_name
            )
        };

        Self {
            app_label,
            model_name: &model.name,
            model_name_plural: &model.name_plural,
            model_verbose_name: &model.verbose_name,
            model_verbose_name_plural: &model.verbose_name_plural,
            model_obj_accessor: format!("{{{{{}}}}}", object_name),
            model_has_file_fields: model.has_file_fields,
            model_fields: &model.fields,
            list_view_url: url("list"),
            create_view_url: url("create"),
            detail_view_url: object_url("detail"),
            update_view_url: object_url("update"),
            delete_view_url: object_url("delete"),
        }
    }
}

/// Rewrites generated text for an app whose single model is its entry point.
///
/// Names lose their `<model>_` prefix and `list` becomes `index`, so
/// `product_list` turns into `index`.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    model_prefix: String,
}

impl EntryPoint {
    pub fn new(model: &ModelDescriptor) -> Self {
        Self {
            model_prefix: format!("{}_", model.lower_name()),
        }
    }

    pub fn rewrite(&self, text: &str) -> String {
        text.replace(&self.model_prefix, "").replace("list", "index")
    }

    /// Output file name for an HTML blueprint.
    pub fn file_name(&self, blueprint_file: &str) -> String {
        if blueprint_file.starts_with("list") {
            blueprint_file.replacen("list", "index", 1)
        } else {
            blueprint_file.to_string()
        }
    }
}
