use eyre::Result;

use crate::{
    admin::register_models,
    pipeline::{CrudContext, Phase},
    python::{CodeOptions, write_python_code},
};

/// Phase that writes `forms.py`, `views.py` and the admin registrations.
pub struct CodePhase;

impl Phase for CodePhase {
    fn name(&self) -> &'static str {
        "code"
    }

    fn description(&self) -> &'static str {
        "Generate forms, views and admin registrations"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        let options = CodeOptions {
            login_required: ctx.request.login_required,
            entry_point: ctx.request.entry_point,
        };
        let generated = write_python_code(
            &ctx.renderer,
            &ctx.blueprints,
            &ctx.app_dir,
            ctx.request.app_label(),
            &ctx.models,
            options,
        )?;
        ctx.python_files.extend(generated.files);
        for outcome in generated.outcomes {
            ctx.record(self.name(), outcome);
        }

        let admin_path = ctx.app_dir.join("admin.py");
        let outcome = register_models(
            &ctx.renderer,
            &ctx.blueprints,
            &admin_path,
            ctx.request.app_label(),
            &ctx.models,
        )?;
        if ctx.record(self.name(), outcome).is_applied() {
            ctx.python_files.insert(admin_path);
        }
        Ok(())
    }
}
