//! Crud command report data structures.

use super::output::{Output, Report};

/// Report data from generating CRUD code.
#[derive(Debug)]
pub struct CrudReport {
    pub app_label: String,
    /// Models code was generated for, in order.
    pub models: Vec<String>,
    /// Touched files, relative to the project root.
    pub files: Vec<String>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
}

impl CrudReport {
    /// The closing summary line.
    pub fn summary(&self) -> String {
        format!("CRUD views generated for: {}", self.models.join(", "))
    }
}

impl Report for CrudReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if self.models.is_empty() {
            out.preformatted(&format!("No models found in app '{}'.", self.app_label));
            return;
        }

        out.section("Files");
        for path in &self.files {
            out.added_item(path);
        }
        out.newline();
        out.preformatted(&self.summary());
    }
}
