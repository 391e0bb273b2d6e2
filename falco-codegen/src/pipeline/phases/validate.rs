use eyre::Result;

use crate::pipeline::{CrudContext, Phase};

/// Phase that rejects invalid requests before anything else runs.
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Validate command flags"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        ctx.request.validate()?;
        Ok(())
    }
}
