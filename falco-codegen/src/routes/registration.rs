//! Registration of an app's routes in the project routes module.
//!
//! The module is parsed with tree-sitter and the new `include()` entry is
//! spliced into the `urlpatterns` list by byte offset, so formatting and
//! comments elsewhere in the file are kept as they are.

use std::path::Path;

use eyre::{Result, WrapErr};
use falco_core::{Outcome, SkipReason};
use tracing::{info, warn};
use tree_sitter::{Node, Parser};

/// Import prepended to the routes module after a successful splice.
pub const INCLUDE_IMPORT: &str = "from django.urls import include";

const ROUTES_VARIABLE: &str = "urlpatterns";
const DEFAULT_INDENT: &str = "    ";

/// Result of splicing an entry into a routes module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Splice {
    /// The patched source
    Inserted(String),
    /// No top-level `urlpatterns = [...]` assignment
    NoRouteList,
    /// The list already includes the app's routes
    AlreadyIncluded,
}

/// Add `path('<label>/', include('<module>.urls', namespace='<label>'))` to the
/// `urlpatterns` list of the routes module at `path`.
pub fn patch_route_registration(path: &Path, app_label: &str, app_module: &str) -> Result<Outcome> {
    if !path.is_file() {
        let reason = SkipReason::FileMissing {
            path: path.to_path_buf(),
        };
        warn!(%reason, "cannot register app routes");
        return Ok(Outcome::skipped(reason));
    }

    let source = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;

    let reason = match splice_route(&source, app_label, app_module)? {
        Splice::Inserted(patched) => {
            let newline = line_ending(&source);
            std::fs::write(path, format!("{}{}{}", INCLUDE_IMPORT, newline, patched))
                .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
            info!(path = %path.display(), app = app_label, "registered app routes");
            return Ok(Outcome::Applied);
        }
        Splice::NoRouteList => SkipReason::TargetNotFound {
            path: path.to_path_buf(),
            target: format!("{} = [...]", ROUTES_VARIABLE),
        },
        Splice::AlreadyIncluded => SkipReason::AlreadyRegistered {
            name: format!("{}.urls", app_module),
        },
    };

    warn!(%reason, "app routes not registered");
    Ok(Outcome::skipped(reason))
}

/// Splice the `include()` entry for an app into `source`.
pub fn splice_route(source: &str, app_label: &str, app_module: &str) -> Result<Splice> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .wrap_err("failed to load the Python grammar")?;
    let Some(tree) = parser.parse(source, None) else {
        return Ok(Splice::NoRouteList);
    };

    let Some(list) = find_route_list(tree.root_node(), source.as_bytes()) else {
        return Ok(Splice::NoRouteList);
    };
    if list.has_error() {
        return Ok(Splice::NoRouteList);
    }

    let list_text = &source[list.byte_range()];
    let target = format!("{}.urls", app_module);
    if list_text.contains(&format!("'{}'", target)) || list_text.contains(&format!("\"{}\"", target)) {
        return Ok(Splice::AlreadyIncluded);
    }

    let entry = format!(
        "path('{}/', include('{}', namespace='{}'))",
        app_label, target, app_label
    );
    Ok(Splice::Inserted(insert_element(source, list, &entry)))
}

/// The list assigned to `urlpatterns` at module level.
fn find_route_list<'t>(root: Node<'t>, source: &[u8]) -> Option<Node<'t>> {
    let mut cursor = root.walk();
    let found = root.named_children(&mut cursor).find_map(|statement| {
        if statement.kind() != "expression_statement" {
            return None;
        }
        let assignment = statement
            .named_child(0)
            .filter(|node| node.kind() == "assignment")?;
        let left = assignment.child_by_field_name("left")?;
        if left.kind() != "identifier" || left.utf8_text(source).ok()? != ROUTES_VARIABLE {
            return None;
        }
        assignment
            .child_by_field_name("right")
            .filter(|right| right.kind() == "list")
    });
    found
}

fn insert_element(source: &str, list: Node<'_>, entry: &str) -> String {
    let mut cursor = list.walk();
    let children: Vec<Node<'_>> = list.children(&mut cursor).collect();
    let elements: Vec<Node<'_>> = children
        .iter()
        .copied()
        .filter(|node| node.is_named() && node.kind() != "comment")
        .collect();

    let close = list.end_byte() - 1;
    let last = elements.last().copied();
    let trailing_comma = last.and_then(|last| {
        children
            .iter()
            .find(|node| node.kind() == "," && node.start_byte() >= last.end_byte())
            .copied()
    });

    let nl = line_ending(source);
    let mut edits: Vec<(usize, String)> = Vec::new();
    let multiline = list.start_position().row != list.end_position().row;

    if multiline {
        let indent = elements
            .first()
            .map(|first| indent_of(source, first.start_byte()))
            .unwrap_or_else(|| DEFAULT_INDENT.to_string());
        let close_line = line_start(source, close);
        let close_on_own_line = source[close_line..close].trim().is_empty();

        match last {
            Some(last) if !close_on_own_line || last.end_byte() > close_line => {
                // `]` shares its line with the last element
                let (at, comma) = match trailing_comma {
                    Some(comma) => (comma.end_byte(), ""),
                    None => (last.end_byte(), ","),
                };
                edits.push((at, format!("{}{}{}{},", comma, nl, indent, entry)));
            }
            _ => {
                if let (Some(last), None) = (last, trailing_comma) {
                    edits.push((last.end_byte(), ",".to_string()));
                }
                edits.push((close_line, format!("{}{},{}", indent, entry, nl)));
            }
        }
    } else {
        match (last, trailing_comma) {
            (None, _) => {
                edits.push((close, format!("{nl}{}{},{nl}", DEFAULT_INDENT, entry)))
            }
            (Some(_), Some(_)) => edits.push((close, format!(" {}", entry))),
            (Some(last), None) => edits.push((last.end_byte(), format!(", {}", entry))),
        }
    }

    let mut patched = source.to_string();
    edits.sort_by(|a, b| b.0.cmp(&a.0));
    for (at, text) in edits {
        patched.insert_str(at, &text);
    }
    patched
}

/// `\r\n` when the module already uses it, otherwise `\n`.
fn line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") { "\r\n" } else { "\n" }
}

fn line_start(source: &str, at: usize) -> usize {
    source[..at].rfind('\n').map_or(0, |i| i + 1)
}

/// Leading whitespace of the line containing `at`, if `at` is its first token.
fn indent_of(source: &str, at: usize) -> String {
    let prefix = &source[line_start(source, at)..at];
    if prefix.trim().is_empty() {
        prefix.to_string()
    } else {
        DEFAULT_INDENT.to_string()
    }
}
