//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "falco.toml")
    }
}

impl Manifest {
    /// Parse a falco.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a falco.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.project.root_urlconf.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("[project] root_urlconf cannot be empty"));
    }

    for (label, app) in &manifest.apps {
        ctx.validate_name(label, "app")?;

        let app_ctx = ctx.push(label);
        for model in &app.models {
            app_ctx.validate_name(&model.name, "model")?;

            let model_ctx = app_ctx.push(&model.name);
            for field in &model.fields {
                model_ctx.validate_name(&field.name, "field")?;
                if field.class_name.trim().is_empty() {
                    return Err(model_ctx.source_context().validation_error(format!(
                        "field '{}' of '{}.{}' has an empty type",
                        field.name, label, model.name
                    )));
                }
            }
            model_ctx.validate_unique(model.fields.iter().map(|f| f.name.as_str()), "field", false)?;
        }
        app_ctx.validate_unique(app.models.iter().map(|m| m.name.as_str()), "model", true)?;
    }
    Ok(())
}
