use std::{path::PathBuf, process::Command};

use eyre::{Result, WrapErr, bail};
use tracing::info;

use super::Migrator;

/// Runs `python manage.py` in the project root.
pub struct ManagePy {
    dir: PathBuf,
    python: String,
}

impl ManagePy {
    pub fn new(dir: impl Into<PathBuf>, python: &str) -> Self {
        Self {
            dir: dir.into(),
            python: python.to_string(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        info!(command = %args.join(" "), "running manage.py");
        let output = Command::new(&self.python)
            .arg("manage.py")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .wrap_err_with(|| format!("failed to run `{} manage.py`", self.python))?;

        if !output.status.success() {
            bail!(
                "`manage.py {}` failed:\n{}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

impl Migrator for ManagePy {
    fn make_migrations(&self, app_label: &str) -> Result<()> {
        self.run(&["makemigrations", app_label])
    }

    fn migrate(&self) -> Result<()> {
        self.run(&["migrate"])
    }
}
