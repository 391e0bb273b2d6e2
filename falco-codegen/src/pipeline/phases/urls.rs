use eyre::Result;

use crate::{
    pipeline::{CrudContext, Phase},
    routes::{AppUrls, patch_route_registration, write_app_urls},
};

/// Phase that writes the app's routes and includes them in the project routes.
///
/// The project routes module is only patched when the app's `urls.py` was
/// created by this run.
pub struct UrlsPhase;

impl Phase for UrlsPhase {
    fn name(&self) -> &'static str {
        "urls"
    }

    fn description(&self) -> &'static str {
        "Generate URL routes"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        let urls_path = ctx.app_dir.join("urls.py");
        let state = write_app_urls(
            &urls_path,
            ctx.request.app_label(),
            &ctx.models,
            ctx.request.entry_point,
        )?;
        ctx.python_files.insert(urls_path);

        if state == AppUrls::Created {
            let root_urls = ctx.manifest.project.root_urls_path(ctx.root);
            let outcome =
                patch_route_registration(&root_urls, ctx.request.app_label(), &ctx.app_module)?;
            if ctx.record(self.name(), outcome).is_applied() {
                ctx.python_files.insert(root_urls);
            }
        }
        Ok(())
    }
}
