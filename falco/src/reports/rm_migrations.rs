//! Rm-migrations command report data structures.

use super::output::{Output, Report};

/// Report data from removing migrations.
#[derive(Debug)]
pub struct RmMigrationsReport {
    /// Apps whose migrations were removed.
    pub apps: Vec<String>,
    pub files_removed: usize,
}

impl Report for RmMigrationsReport {
    fn render(&self, out: &mut dyn Output) {
        if self.apps.is_empty() {
            out.preformatted("No apps with migrations found.");
            return;
        }

        out.section("Removed migrations");
        for app in &self.apps {
            out.removed_item(app);
        }
        out.newline();
        out.key_value("Files removed", &self.files_removed.to_string());
    }
}
