use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use falco_codegen::env::GitStatus;
use falco_manifest::FalcoToml;

use super::{ExitOnDiagnostic, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct RmMigrationsCommand {
    /// Directory containing the apps (defaults to [project] apps_dir)
    pub apps_dir: Option<PathBuf>,

    /// Run even if the git working tree has uncommitted changes
    #[arg(long)]
    pub skip_git_check: bool,

    /// Path to falco.toml (defaults to ./falco.toml)
    #[arg(short, long, default_value = "falco.toml")]
    pub config: PathBuf,
}

impl RmMigrationsCommand {
    pub fn run(&self) -> Result<()> {
        let falco_toml = FalcoToml::open(&self.config).unwrap_or_exit();
        let root = falco_toml.root();

        let report = ops::rm_migrations(
            falco_toml.manifest(),
            &root,
            &GitStatus::new(&root),
            ops::rm_migrations::RmMigrationsOptions {
                apps_dir: self.apps_dir.as_deref(),
                skip_git_check: self.skip_git_check,
            },
        )
        .exit_on_diagnostic()?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
