mod completions;
mod crud;
mod rm_migrations;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use crud::CrudCommand;
use eyre::Result;
use rm_migrations::RmMigrationsCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for falco_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Extension trait rendering command errors through miette before exiting.
///
/// Other errors are passed through to the color-eyre handler.
pub(crate) trait ExitOnDiagnostic<T> {
    fn exit_on_diagnostic(self) -> Result<T>;
}

impl<T> ExitOnDiagnostic<T> for Result<T> {
    fn exit_on_diagnostic(self) -> Result<T> {
        self.map_err(|err| match err.downcast::<falco_codegen::Error>() {
            Ok(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
            Err(err) => err,
        })
    }
}

#[derive(Parser)]
#[command(name = "falco")]
#[command(version)]
#[command(about = "Generate CRUD views for Django apps from falco.toml")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Crud(cmd) => cmd.run(),
            Commands::RmMigrations(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CRUD views, forms, templates and routes for an app or model
    Crud(CrudCommand),

    /// Delete the migration files of every app (debug mode only)
    RmMigrations(RmMigrationsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
