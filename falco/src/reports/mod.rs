//! What each command prints.
//!
//! Ops return a report; commands render it to the terminal.

mod crud;
mod output;
mod rm_migrations;

pub use crud::CrudReport;
pub use output::{Report, TerminalOutput};
pub use rm_migrations::RmMigrationsReport;
