use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use falco_core::{Outcome, SkipReason};
use falco_manifest::FormattersConfig;
use tracing::{debug, warn};

use super::{Formatter, SourceKind};

/// Runs the formatter commands from `[formatters]` with the file paths appended.
pub struct CommandFormatter {
    dir: PathBuf,
    config: FormattersConfig,
}

impl CommandFormatter {
    pub fn new(dir: impl Into<PathBuf>, config: FormattersConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    fn command(&self, kind: SourceKind) -> &[String] {
        match kind {
            SourceKind::Python => &self.config.python,
            SourceKind::Html => &self.config.html,
        }
    }
}

impl Formatter for CommandFormatter {
    fn format(&self, kind: SourceKind, paths: &[PathBuf]) -> Outcome {
        let Some((program, args)) = self.command(kind).split_first() else {
            return Outcome::skipped(SkipReason::ToolUnavailable {
                tool: format!("{} formatter", kind),
            });
        };
        if paths.is_empty() {
            return Outcome::Applied;
        }

        debug!(%program, files = paths.len(), "formatting {} files", kind);
        let outcome = match run(&self.dir, program, args, paths) {
            Ok(()) => Outcome::Applied,
            Err(reason) => Outcome::skipped(reason),
        };
        if let Some(reason) = outcome.reason() {
            warn!(%reason, "{} files left unformatted", kind);
        }
        outcome
    }
}

fn run(dir: &Path, program: &str, args: &[String], paths: &[PathBuf]) -> Result<(), SkipReason> {
    let output = Command::new(program)
        .args(args)
        .args(paths)
        .current_dir(dir)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => SkipReason::ToolUnavailable {
                tool: program.to_string(),
            },
            _ => SkipReason::ToolFailed {
                tool: program.to_string(),
                message: e.to_string(),
            },
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(SkipReason::ToolFailed {
            tool: program.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
