use eyre::Result;

use crate::{
    html::write_templates,
    pipeline::{CrudContext, Phase},
};

/// Phase that writes the HTML templates of every model.
pub struct TemplatesPhase;

impl Phase for TemplatesPhase {
    fn name(&self) -> &'static str {
        "templates"
    }

    fn description(&self) -> &'static str {
        "Generate HTML templates"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        let files = write_templates(
            &ctx.renderer,
            &ctx.blueprints,
            &ctx.templates_dir(),
            ctx.request.app_label(),
            &ctx.models,
            ctx.request.entry_point,
        )?;
        ctx.html_files.extend(files);
        Ok(())
    }
}
