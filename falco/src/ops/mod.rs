//! Core operations.
//!
//! This module contains the business logic for falco commands,
//! separated from CLI argument parsing and output rendering.

pub mod crud;
pub mod rm_migrations;

pub use crud::crud;
pub use rm_migrations::rm_migrations;
