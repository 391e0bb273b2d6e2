//! Admin registration for generated models.

use std::path::Path;

use eyre::{Result, WrapErr};
use falco_core::{File, Outcome, SkipReason};
use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::{
    blueprint::{Blueprint, Blueprints, Renderer},
    model::ModelDescriptor,
    python::{CodeOptions, render_python},
};

/// Register `models` in the app's `admin.py`.
///
/// A run over a whole app only writes to an empty `admin.py`; a run for a
/// single model skips it when already registered and otherwise appends,
/// hoisting the import lines to the top of the file.
pub fn register_models(
    renderer: &Renderer,
    blueprints: &Blueprints,
    admin_path: &Path,
    app_label: &str,
    models: &[ModelDescriptor],
) -> Result<Outcome> {
    let existing = if admin_path.exists() {
        std::fs::read_to_string(admin_path)
            .wrap_err_with(|| format!("failed to read '{}'", admin_path.display()))?
    } else {
        String::new()
    };

    let single = match models {
        [model] => Some(model),
        _ => None,
    };

    let skip = match single {
        None if !existing.trim().is_empty() => Some(SkipReason::NotEmpty {
            path: admin_path.to_path_buf(),
        }),
        Some(model) if is_registered(&existing, &model.name) => {
            Some(SkipReason::AlreadyRegistered {
                name: model.name.clone(),
            })
        }
        _ => None,
    };
    if let Some(reason) = skip {
        warn!(%reason, "admin registration skipped");
        return Ok(Outcome::skipped(reason));
    }

    let blueprint = blueprints.load_python(Blueprint::Admin)?;
    let rendered = match render_python(
        renderer,
        Blueprint::Admin.relative_path(),
        &blueprint,
        app_label,
        models,
        CodeOptions::default(),
    ) {
        Ok(rendered) => rendered,
        Err(err) => {
            let reason = SkipReason::RenderFailed {
                blueprint: Blueprint::Admin.relative_path().to_string(),
                message: format!("{:#}", err),
            };
            warn!(%reason, "admin registration skipped");
            return Ok(Outcome::skipped(reason));
        }
    };

    let content = format!("{}{}", rendered.imports, rendered.code);
    let content = if single.is_some() {
        hoist_imports(&format!("{}{}", existing, content))
    } else {
        format!("{}{}", existing, content)
    };

    File::new(admin_path, content).write()?;
    debug!(path = %admin_path.display(), "registered models in admin");
    Ok(Outcome::Applied)
}

/// Check for `@admin.register(<name>)` or `admin.site.register(<name>`.
pub fn is_registered(admin_source: &str, model_name: &str) -> bool {
    admin_source.contains(&format!("@admin.register({})", model_name))
        || admin_source.contains(&format!("admin.site.register({}", model_name))
}

/// Move every line starting with `from` or `import` to the top, once.
fn hoist_imports(source: &str) -> String {
    let mut imports: IndexSet<&str> = IndexSet::new();
    let mut body = Vec::new();
    for line in source.lines() {
        if line.starts_with("from ") || line.starts_with("import ") {
            imports.insert(line);
        } else {
            body.push(line);
        }
    }

    let mut out = String::new();
    for line in imports {
        out.push_str(line);
        out.push('\n');
    }
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
    out
}
