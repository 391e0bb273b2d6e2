//! Results of best-effort operations.

use std::{fmt, path::PathBuf};

/// What a best-effort operation did.
///
/// Operations that may legitimately do nothing (a route splice that finds no
/// target, a formatter that is not installed) return an `Outcome` instead of an
/// error so callers can report or assert on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The change was made.
    Applied,
    /// Nothing was changed.
    Skipped(SkipReason),
}

impl Outcome {
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped(reason)
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// The skip reason, if any.
    pub fn reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Applied => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

/// Why a best-effort operation did nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A blueprint does not contain the given sentinel comment.
    MissingSentinel { marker: String },
    /// The file to patch does not exist.
    FileMissing { path: PathBuf },
    /// The file exists but does not contain the expected construct.
    TargetNotFound { path: PathBuf, target: String },
    /// The item is already present.
    AlreadyRegistered { name: String },
    /// The file already has content and will not be touched.
    NotEmpty { path: PathBuf },
    /// An external tool is not installed.
    ToolUnavailable { tool: String },
    /// An external tool ran and failed.
    ToolFailed { tool: String, message: String },
    /// A blueprint could not be rendered.
    RenderFailed { blueprint: String, message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSentinel { marker } => write!(f, "missing '{}' marker", marker),
            Self::FileMissing { path } => write!(f, "'{}' does not exist", path.display()),
            Self::TargetNotFound { path, target } => {
                write!(f, "no '{}' found in '{}'", target, path.display())
            }
            Self::AlreadyRegistered { name } => write!(f, "{} is already registered", name),
            Self::NotEmpty { path } => write!(f, "'{}' is not empty", path.display()),
            Self::ToolUnavailable { tool } => write!(f, "'{}' is not installed", tool),
            Self::ToolFailed { tool, message } => write!(f, "'{}' failed: {}", tool, message),
            Self::RenderFailed { blueprint, message } => {
                write!(f, "failed to render '{}': {}", blueprint, message)
            }
        }
    }
}
