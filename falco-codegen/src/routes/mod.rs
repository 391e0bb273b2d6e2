//! URL routing: app-local `urls.py` and the project routes module.

mod app_urls;
mod registration;

pub use app_urls::{AppUrls, app_routes, write_app_urls};
pub use registration::{INCLUDE_IMPORT, patch_route_registration, splice_route};
