use eyre::Result;
use tracing::info;

use crate::{
    model::{ExtractOptions, extract_models},
    pipeline::{CrudContext, Phase},
};

/// Phase that selects the models to generate for.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve model metadata"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        let options = ExtractOptions {
            excluded_fields: &ctx.request.excluded_fields,
            entry_point: ctx.request.entry_point,
        };
        ctx.models = extract_models(
            ctx.manifest,
            ctx.request.app_label(),
            ctx.request.model_name(),
            &options,
        )?;

        if ctx.models.is_empty() {
            ctx.add_info(self.name(), format!("app '{}' has no models", ctx.app_label()));
        }
        info!(app = ctx.app_label(), models = %ctx.model_names(), "resolved models");
        Ok(())
    }
}
