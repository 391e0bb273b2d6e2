//! TOML manifest parsing and validation for falco.
//!
//! A `falco.toml` at the root of a Django project describes the project
//! settings the scaffolder needs (root URL module, template directories) and
//! the models of each installed app.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    App, FalcoToml, Field, FormattersConfig, Manifest, Model, ParseContext, ProjectConfig,
};
