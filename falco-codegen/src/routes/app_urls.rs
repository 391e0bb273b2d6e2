use std::path::Path;

use eyre::{Result, WrapErr};
use falco_core::{File, url_slug};
use tracing::debug;

use crate::{context::EntryPoint, model::ModelDescriptor};

const VIEWS: [(&str, &str); 5] = [
    ("", "list"),
    ("create/", "create"),
    ("<int:pk>/", "detail"),
    ("<int:pk>/update/", "update"),
    ("<int:pk>/delete/", "delete"),
];

/// The five route declarations of a model, one per line.
pub fn app_routes(model: &ModelDescriptor, entry_point: bool) -> String {
    let name = model.lower_name();
    let prefix = url_slug(&model.verbose_name_plural);

    let mut routes = String::new();
    for (suffix, view) in VIEWS {
        let route = if entry_point {
            suffix.to_string()
        } else {
            format!("{}/{}", prefix, suffix)
        };
        routes.push_str(&format!(
            "    path('{}', views.{}_{}, name='{}_{}'),\n",
            route, name, view, name, view
        ));
    }

    if entry_point {
        EntryPoint::new(model).rewrite(&routes)
    } else {
        routes
    }
}

/// What happened to the app's `urls.py`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppUrls {
    /// The file was missing or blank and was written from scratch
    Created,
    /// Routes were appended to an existing route list
    Extended,
}

/// Write the routes of `models` to an app's `urls.py`.
pub fn write_app_urls(
    path: &Path,
    app_label: &str,
    models: &[ModelDescriptor],
    entry_point: bool,
) -> Result<AppUrls> {
    let routes: String = models
        .iter()
        .map(|model| app_routes(model, entry_point))
        .collect();

    let existing = if path.exists() {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?
    } else {
        String::new()
    };

    let (file, state) = if existing.trim().is_empty() {
        let content = format!(
            "from django.urls import path\n\nfrom . import views\n\napp_name = \"{}\"\n\nurlpatterns = [\n{}]\n",
            app_label, routes
        );
        (File::new(path, content), AppUrls::Created)
    } else {
        let content = format!("\nurlpatterns += [\n{}]\n", routes);
        (File::append(path, content), AppUrls::Extended)
    };

    file.write()?;
    debug!(path = %path.display(), ?state, "wrote app routes");
    Ok(state)
}
