use eyre::Result;
use tracing::info;

use crate::{
    Error,
    pipeline::{CrudContext, Phase},
};

/// Phase that stops on uncommitted changes unless `--allow-dirty` is set.
pub struct GuardPhase;

impl Phase for GuardPhase {
    fn name(&self) -> &'static str {
        "guard"
    }

    fn description(&self) -> &'static str {
        "Check that the working tree is clean"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        if ctx.request.allow_dirty {
            info!("skipping git status check");
            return Ok(());
        }
        if !ctx.env.repo.is_clean()? {
            return Err(Error::DirtyRepo {
                flag: "--allow-dirty",
            }
            .into());
        }
        Ok(())
    }
}
