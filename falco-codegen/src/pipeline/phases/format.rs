use eyre::Result;

use crate::{
    env::SourceKind,
    pipeline::{CrudContext, Phase},
};

/// Phase that hands touched files to the Python and HTML formatters.
pub struct FormatPhase;

impl Phase for FormatPhase {
    fn name(&self) -> &'static str {
        "format"
    }

    fn description(&self) -> &'static str {
        "Format generated files"
    }

    fn run(&self, ctx: &mut CrudContext<'_>) -> Result<()> {
        let batches = [
            (SourceKind::Python, ctx.python_files.iter().cloned().collect::<Vec<_>>()),
            (SourceKind::Html, ctx.html_files.iter().cloned().collect::<Vec<_>>()),
        ];
        for (kind, files) in batches {
            if files.is_empty() {
                continue;
            }
            let outcome = ctx.env.formatter.format(kind, &files);
            ctx.record(self.name(), outcome);
        }
        Ok(())
    }
}
