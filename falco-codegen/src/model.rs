//! Model metadata extraction.
//!
//! Turns the models declared in `falco.toml` into the descriptors that feed
//! blueprint contexts.

use std::{fmt, str::FromStr};

use falco_core::{FieldKind, pluralize};
use falco_manifest::{Field, Manifest, Model};
use indexmap::IndexMap;
use serde::Serialize;

use crate::Error;

/// `<app>` or `<app>.<model>` as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPath {
    pub app_label: String,
    pub model_name: Option<String>,
}

impl FromStr for ModelPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // The last dot separates the model, so dotted app labels stay intact.
        let (app_label, model_name) = match s.rsplit_once('.') {
            Some((app, model)) => (app, Some(model)),
            None => (s, None),
        };

        if app_label.is_empty() || model_name.is_some_and(str::is_empty) {
            return Err(Error::usage(
                format!("invalid model path '{}'", s),
                "expected <app> or <app>.<model>, e.g. shop.Product",
            ));
        }

        Ok(Self {
            app_label: app_label.to_string(),
            model_name: model_name.map(str::to_string),
        })
    }
}

impl fmt::Display for ModelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.model_name {
            Some(model) => write!(f, "{}.{}", self.app_label, model),
            None => write!(f, "{}", self.app_label),
        }
    }
}

/// A model field as seen by blueprints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub verbose_name: String,
    pub editable: bool,
    pub class_name: String,
    /// Django template expression printing the value (e.g., `{{product.name}}`)
    pub accessor: String,
}

impl FieldDescriptor {
    fn new(field: &Field, object_name: &str) -> Self {
        let accessor = if FieldKind::of(&field.class_name).is_file() {
            format!("{{{{{}.{}.url }}}}", object_name, field.name)
        } else {
            format!("{{{{{}.{}}}}}", object_name, field.name)
        };

        Self {
            verbose_name: field.verbose_name(),
            editable: field.editable,
            class_name: field.class_name.clone(),
            accessor,
        }
    }

    pub fn is_file(&self) -> bool {
        FieldKind::of(&self.class_name).is_file()
    }

    pub fn is_editable_date(&self) -> bool {
        self.editable && FieldKind::of(&self.class_name).is_temporal()
    }
}

/// Everything blueprints need to know about one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub name: String,
    pub name_plural: String,
    pub verbose_name: String,
    pub verbose_name_plural: String,
    pub has_file_fields: bool,
    pub has_editable_date_fields: bool,
    /// Fields keyed by name, in declaration order, exclusions removed
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl ModelDescriptor {
    fn new(model: &Model, app_label: &str, excluded: &[String], entry_point: bool) -> Self {
        let object_name = model.name.to_lowercase();
        let fields: IndexMap<_, _> = model
            .fields
            .iter()
            .filter(|field| !excluded.contains(&field.name))
            .map(|field| {
                (
                    field.name.clone(),
                    FieldDescriptor::new(field, &object_name),
                )
            })
            .collect();

        let name_plural = if entry_point {
            app_label.to_lowercase()
        } else {
            pluralize(&model.name)
        };

        Self {
            name: model.name.clone(),
            name_plural,
            verbose_name: model.verbose_name(),
            verbose_name_plural: model.verbose_name_plural(),
            has_file_fields: fields.values().any(FieldDescriptor::is_file),
            has_editable_date_fields: fields.values().any(FieldDescriptor::is_editable_date),
            fields,
        }
    }

    /// Lowercased class name, used for function, file and route names.
    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Options that shape extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions<'a> {
    /// Field names left out of every descriptor
    pub excluded_fields: &'a [String],
    pub entry_point: bool,
}

/// Descriptors for every model of an app, or for the one model named.
///
/// Model names match case-insensitively.
pub fn extract_models(
    manifest: &Manifest,
    app_label: &str,
    model_name: Option<&str>,
    options: &ExtractOptions<'_>,
) -> Result<Vec<ModelDescriptor>, Error> {
    let app = manifest.app(app_label).ok_or_else(|| {
        let known: Vec<&str> = manifest.apps.keys().map(String::as_str).collect();
        Error::app_not_found(app_label, &known)
    })?;

    let selected: Vec<&Model> = match model_name {
        Some(name) => {
            let model = app
                .models
                .iter()
                .find(|m| m.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    let known: Vec<&str> = app.models.iter().map(|m| m.name.as_str()).collect();
                    Error::model_not_found(app_label, name, &known)
                })?;
            vec![model]
        }
        None => app.models.iter().collect(),
    };

    Ok(selected
        .into_iter()
        .map(|model| {
            ModelDescriptor::new(model, app_label, options.excluded_fields, options.entry_point)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"
[apps.shop]

[[apps.shop.models]]
name = "Product"

[[apps.shop.models.fields]]
name = "name"
type = "CharField"

[[apps.shop.models.fields]]
name = "image"
type = "ImageField"

[[apps.shop.models.fields]]
name = "created_at"
type = "DateTimeField"
editable = false

[[apps.shop.models]]
name = "Category"

[[apps.shop.models.fields]]
name = "released_on"
type = "DateField"
"#;

    fn manifest() -> Manifest {
        MANIFEST.parse().unwrap()
    }

    #[test]
    fn test_model_path_parsing() {
        let path: ModelPath = "shop.Product".parse().unwrap();
        assert_eq!(path.app_label, "shop");
        assert_eq!(path.model_name.as_deref(), Some("Product"));

        let path: ModelPath = "shop".parse().unwrap();
        assert_eq!(path.model_name, None);

        let path: ModelPath = "apps.shop.Product".parse().unwrap();
        assert_eq!(path.app_label, "apps.shop");
        assert_eq!(path.to_string(), "apps.shop.Product");

        assert!("shop.".parse::<ModelPath>().is_err());
        assert!(".Product".parse::<ModelPath>().is_err());
    }

    #[test]
    fn test_extract_all_models_in_order() {
        let models = extract_models(&manifest(), "shop", None, &ExtractOptions::default()).unwrap();
        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Product", "Category"]);
        assert_eq!(models[1].name_plural, "Categories");
        assert!(models[1].has_editable_date_fields);
    }

    #[test]
    fn test_extract_single_model_case_insensitive() {
        let models = extract_models(
            &manifest(),
            "shop",
            Some("product"),
            &ExtractOptions::default(),
        )
        .unwrap();
        assert_eq!(models.len(), 1);

        let product = &models[0];
        assert_eq!(product.name_plural, "Products");
        assert_eq!(product.verbose_name_plural, "products");
        assert!(product.has_file_fields);
        assert!(!product.has_editable_date_fields);
        assert_eq!(product.fields["name"].accessor, "{{product.name}}");
        assert_eq!(product.fields["image"].accessor, "{{product.image.url }}");
        assert_eq!(product.fields["created_at"].verbose_name, "created at");
    }

    #[test]
    fn test_excluded_fields_are_dropped() {
        let excluded = vec!["image".to_string(), "name".to_string()];
        let options = ExtractOptions {
            excluded_fields: &excluded,
            entry_point: false,
        };
        let models = extract_models(&manifest(), "shop", None, &options).unwrap();
        for model in &models {
            assert!(!model.fields.contains_key("image"));
            assert!(!model.fields.contains_key("name"));
        }
        assert!(!models[0].has_file_fields);
    }

    #[test]
    fn test_entry_point_plural_is_app_label() {
        let options = ExtractOptions {
            excluded_fields: &[],
            entry_point: true,
        };
        let models = extract_models(&manifest(), "shop", Some("Product"), &options).unwrap();
        assert_eq!(models[0].name_plural, "shop");
    }

    #[test]
    fn test_unknown_app_and_model() {
        let err = extract_models(&manifest(), "blog", None, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "app", .. }));

        let err = extract_models(&manifest(), "shop", Some("Order"), &ExtractOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { kind: "model", .. }));
    }
}
