use eyre::Result;

use crate::pipeline::{CrudContext, Phase};

/// Phase that creates and applies migrations for the app.
pub struct MigratePhase;

impl Phase for MigratePhase {
    fn name(&self) -> &'static str {
        "migrate"
    }

    fn description(&self) -> &'static str {
        "Create and apply migrations"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        ctx.env.migrator.make_migrations(ctx.request.app_label())?;
        ctx.env.migrator.migrate()?;
        ctx.add_info(self.name(), "migrations applied");
        Ok(())
    }
}
