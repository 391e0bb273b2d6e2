//! Core utilities and types for the falco scaffolding tool.
//!
//! This crate provides fundamental types and utilities used across
//! the falco crates.

mod field_kind;
mod file;
mod outcome;
mod utils;

// Field classification
pub use field_kind::FieldKind;
// File operations
pub use file::{File, FileRules, Merge, WriteResult};
// Best-effort results
pub use outcome::{Outcome, SkipReason};
// String utilities
pub use utils::{camel_case_to_spaces, field_label, pluralize, url_slug};
