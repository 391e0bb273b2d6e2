//! Built-in `crud` phases, in execution order.
//!
//! - [`ValidatePhase`] - rejects unusable flag combinations
//! - [`GuardPhase`] - refuses to run on a dirty working tree
//! - [`ResolvePhase`] - extracts the selected model descriptors
//! - [`MigratePhase`] - runs `makemigrations` and `migrate`
//! - [`CodePhase`] - writes forms, views and admin registrations
//! - [`TemplatesPhase`] - writes the HTML templates
//! - [`UrlsPhase`] - writes app routes and registers them project-wide
//! - [`FormatPhase`] - formats every touched file

mod code;
mod format;
mod guard;
mod migrate;
mod resolve;
mod templates;
mod urls;
mod validate;

pub use code::CodePhase;
pub use format::FormatPhase;
pub use guard::GuardPhase;
pub use migrate::MigratePhase;
pub use resolve::ResolvePhase;
pub use templates::TemplatesPhase;
pub use urls::UrlsPhase;
pub use validate::ValidatePhase;
