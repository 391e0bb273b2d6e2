//! Code generation for the falco Django scaffolding tool.
//!
//! This crate renders the CRUD blueprints for the models declared in
//! `falco.toml` and merges the output into a Django project.
//!
//! # Module Organization
//!
//! - [`model`] - Model metadata extraction (ModelDescriptor, FieldDescriptor)
//! - [`blueprint`] - Blueprint loading, sentinel regions and rendering
//! - [`context`] - Rendering contexts and entry-point rewrites
//! - [`python`], [`html`], [`admin`] - Generators for each kind of output
//! - [`routes`] - App routes and project-wide route registration
//! - [`env`] - External collaborators (git, formatters, manage.py)
//! - [`pipeline`] - The `crud` command pipeline
//! - [`migrations`] - Migration file removal
//! - [`testing`] - Test utilities (feature-gated)

pub mod admin;
pub mod blueprint;
pub mod context;
pub mod env;
mod error;
pub mod html;
pub mod migrations;
pub mod model;
pub mod pipeline;
pub mod python;
pub mod routes;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::Error;
