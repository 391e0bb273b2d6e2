use falco_core::{Outcome, SkipReason};
use tracing::warn;

pub const IMPORTS_START: &str = "# IMPORTS:START";
pub const IMPORTS_END: &str = "# IMPORTS:END";
pub const CODE_START: &str = "# CODE:START";
pub const CODE_END: &str = "# CODE:END";

/// A Python blueprint split into its imports and code sub-templates.
#[derive(Debug, Clone, Default)]
pub struct PythonBlueprint {
    pub imports: String,
    pub code: String,
    /// One skipped outcome per region whose markers were not found
    pub outcomes: Vec<Outcome>,
}

impl PythonBlueprint {
    /// Slice `text` at the sentinel comments.
    ///
    /// A region with a missing marker is left empty and reported, never an error.
    pub fn parse(name: &str, text: &str) -> Self {
        let mut outcomes = Vec::new();
        let imports = region(name, text, IMPORTS_START, IMPORTS_END, &mut outcomes);
        let code = region(name, text, CODE_START, CODE_END, &mut outcomes);
        Self {
            imports,
            code,
            outcomes,
        }
    }
}

fn region(name: &str, text: &str, start: &str, end: &str, outcomes: &mut Vec<Outcome>) -> String {
    let Some(start_at) = text.find(start) else {
        return missing(name, start, outcomes);
    };
    let body_at = start_at + start.len();
    match text[body_at..].find(end) {
        Some(len) => text[body_at..body_at + len].to_string(),
        None => missing(name, end, outcomes),
    }
}

fn missing(name: &str, marker: &str, outcomes: &mut Vec<Outcome>) -> String {
    warn!(blueprint = name, marker, "blueprint is missing a sentinel, region left empty");
    outcomes.push(Outcome::skipped(SkipReason::MissingSentinel {
        marker: marker.to_string(),
    }));
    String::new()
}
