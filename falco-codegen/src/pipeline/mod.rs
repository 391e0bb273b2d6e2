//! The `crud` command pipeline.
//!
//! A [`Pipeline`] runs a sequence of phases over a [`CrudContext`]:
//!
//! - validate the request, guard the repository, resolve the models
//! - optionally create and apply migrations
//! - generate Python code, HTML templates and URL routes
//! - format every touched file
//!
//! Phases fail fast on errors and record degradations as diagnostics.
//!
//! # Example
//!
//! ```ignore
//! use falco_codegen::pipeline::{CrudContext, CrudRequest, Pipeline};
//!
//! let request = CrudRequest::new("shop.Product".parse()?);
//! let ctx = CrudContext::new(&request, &manifest, root, &env);
//! let ctx = Pipeline::for_request(&request).run(ctx)?;
//!
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod request;
mod runner;

pub use context::CrudContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use request::CrudRequest;
pub use runner::Pipeline;
