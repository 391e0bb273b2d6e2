//! Python code generation (`forms.py`, `views.py`).

use std::path::{Path, PathBuf};

use eyre::Result;
use falco_core::{File, Outcome};
use tracing::{debug, warn};

use crate::{
    blueprint::{Blueprint, Blueprints, PythonBlueprint, Renderer},
    context::{EntryPoint, PythonContext},
    model::ModelDescriptor,
};

/// Flags shared by the Python generators.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeOptions {
    pub login_required: bool,
    pub entry_point: bool,
}

/// Imports and code rendered for a set of models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPython {
    pub imports: String,
    pub code: String,
}

/// Render both regions of a Python blueprint for every model, in order.
pub fn render_python(
    renderer: &Renderer,
    name: &str,
    blueprint: &PythonBlueprint,
    app_label: &str,
    models: &[ModelDescriptor],
    options: CodeOptions,
) -> Result<RenderedPython> {
    let mut rendered = RenderedPython::default();
    for model in models {
        let ctx = PythonContext::new(app_label, model, options.login_required, options.entry_point);
        rendered.imports += &renderer.render(name, &blueprint.imports, &ctx)?;
        rendered.code += &renderer.render(name, &blueprint.code, &ctx)?;
        if options.entry_point {
            rendered.code = EntryPoint::new(model).rewrite(&rendered.code);
        }
    }
    Ok(rendered)
}

/// Files written by a generator, with any degradations along the way.
#[derive(Debug, Clone, Default)]
pub struct Generated {
    pub files: Vec<PathBuf>,
    pub outcomes: Vec<Outcome>,
}

/// Generate `forms.py` and `views.py` in `app_dir`.
///
/// New imports go above the existing content and new code below it.
pub fn write_python_code(
    renderer: &Renderer,
    blueprints: &Blueprints,
    app_dir: &Path,
    app_label: &str,
    models: &[ModelDescriptor],
    options: CodeOptions,
) -> Result<Generated> {
    let mut generated = Generated::default();
    for blueprint in Blueprint::PYTHON {
        let parsed = blueprints.load_python(blueprint)?;
        generated.outcomes.extend(parsed.outcomes.iter().cloned());
        let rendered = render_python(
            renderer,
            blueprint.relative_path(),
            &parsed,
            app_label,
            models,
            options,
        )?;

        let file = File::surround(
            app_dir.join(blueprint.file_name()),
            rendered.imports,
            rendered.code,
        );
        warn_if_already_generated(&file)?;
        let result = file.write()?;
        debug!(path = %file.path().display(), ?result, "wrote python code");
        generated.files.push(file.path().to_path_buf());
    }
    Ok(generated)
}

pub(crate) fn warn_if_already_generated(file: &File) -> Result<()> {
    let code = file.content().trim();
    if code.is_empty() || !file.exists() {
        return Ok(());
    }
    let existing = std::fs::read_to_string(file.path())?;
    if existing.contains(code) {
        warn!(
            path = %file.path().display(),
            "generated code is already present, it will be added again"
        );
    }
    Ok(())
}
