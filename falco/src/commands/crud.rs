use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use falco_codegen::{env::Environment, model::ModelPath, pipeline::CrudRequest};
use falco_manifest::FalcoToml;

use super::{ExitOnDiagnostic, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CrudCommand {
    /// App label, optionally followed by a model name (e.g., shop or shop.Product)
    pub model_path: String,

    /// Field to leave out of forms, admin and templates (repeatable)
    #[arg(short, long, value_name = "FIELD")]
    pub exclude: Vec<String>,

    /// Only generate Python code (forms, views, admin, urls)
    #[arg(long)]
    pub only_python: bool,

    /// Only generate HTML templates
    #[arg(long)]
    pub only_html: bool,

    /// Use the model as the app's entry point (index, create, ... without model prefix)
    #[arg(long)]
    pub entry_point: bool,

    /// Protect the generated views with @login_required
    #[arg(short, long)]
    pub login_required: bool,

    /// Run makemigrations and migrate before generating
    #[arg(short, long)]
    pub migrate: bool,

    /// Run even if the git working tree has uncommitted changes
    #[arg(long)]
    pub allow_dirty: bool,

    /// Path to falco.toml (defaults to ./falco.toml)
    #[arg(short, long, default_value = "falco.toml")]
    pub config: PathBuf,
}

impl CrudCommand {
    pub fn run(&self) -> Result<()> {
        let falco_toml = FalcoToml::open(&self.config).unwrap_or_exit();
        let root = falco_toml.root();
        let manifest = falco_toml.manifest();

        let model_path: ModelPath = self
            .model_path
            .parse()
            .map_err(eyre::Report::new)
            .exit_on_diagnostic()?;
        let request = CrudRequest {
            excluded_fields: self.exclude.clone(),
            only_python: self.only_python,
            only_html: self.only_html,
            entry_point: self.entry_point,
            login_required: self.login_required,
            migrate: self.migrate,
            allow_dirty: self.allow_dirty,
            ..CrudRequest::new(model_path)
        };

        let env = Environment::system(&root, manifest);
        let report = ops::crud(manifest, &root, &env, &request).exit_on_diagnostic()?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
