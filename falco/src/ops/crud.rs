//! Crud operation - generate views, forms, templates and routes.

use std::path::Path;

use eyre::Result;
use falco_codegen::{
    env::Environment,
    pipeline::{CrudContext, CrudRequest, Pipeline},
};
use falco_manifest::Manifest;
use tracing::debug;

use crate::reports::CrudReport;

/// Execute the crud operation.
pub fn crud(
    manifest: &Manifest,
    root: &Path,
    env: &Environment,
    request: &CrudRequest,
) -> Result<CrudReport> {
    debug!(model_path = %request.model_path, root = %root.display(), "running crud");
    let ctx = CrudContext::new(request, manifest, root, env);
    let ctx = Pipeline::for_request(request).run(ctx)?;

    let warnings = ctx
        .diagnostics
        .iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| d.message.clone())
        .collect();

    let files = ctx
        .touched_files()
        .map(|path| {
            path.strip_prefix(root)
                .unwrap_or(path)
                .display()
                .to_string()
        })
        .collect();

    Ok(CrudReport {
        app_label: request.app_label().to_string(),
        models: ctx.models.iter().map(|m| m.name.clone()).collect(),
        files,
        warnings,
    })
}
