//! HTML template generation.

use std::path::{Path, PathBuf};

use eyre::Result;
use falco_core::File;
use tracing::debug;

use crate::{
    blueprint::{Blueprint, Blueprints, Renderer},
    context::{EntryPoint, HtmlContext},
    model::ModelDescriptor,
};

/// Output file name of an HTML blueprint for one model.
///
/// `<model>_<blueprint>` normally; the bare blueprint name in entry-point mode,
/// where `list.html` becomes `index.html`.
pub fn template_file_name(
    blueprint: Blueprint,
    model: &ModelDescriptor,
    entry_point: bool,
) -> String {
    if entry_point {
        EntryPoint::new(model).file_name(blueprint.file_name())
    } else {
        format!("{}_{}", model.lower_name(), blueprint.file_name())
    }
}

/// Render the HTML templates of every model into `templates_dir`.
///
/// Existing templates are replaced. Returns the files written.
pub fn write_templates(
    renderer: &Renderer,
    blueprints: &Blueprints,
    templates_dir: &Path,
    app_label: &str,
    models: &[ModelDescriptor],
    entry_point: bool,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for blueprint in Blueprint::HTML {
        let template = blueprints.load(blueprint)?;
        for model in models {
            let ctx = HtmlContext::new(app_label, model);
            let mut content = renderer.render(blueprint.relative_path(), &template, &ctx)?;
            if entry_point {
                content = EntryPoint::new(model).rewrite(&content);
            }

            let path = templates_dir.join(template_file_name(blueprint, model, entry_point));
            let result = File::new(&path, content).write()?;
            debug!(path = %path.display(), ?result, "wrote template");
            written.push(path);
        }
    }
    Ok(written)
}
