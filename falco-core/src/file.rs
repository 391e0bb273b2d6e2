use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

fn read_existing(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
    Ok(Some(content))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and was rewritten
    Updated,
}

/// A file to be generated
pub struct File {
    path: PathBuf,
    head: String,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: replace)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            head: String::new(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Text placed above existing content, with the content placed below it.
    pub fn surround(
        path: impl Into<PathBuf>,
        head: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            head: head.into(),
            content: tail.into(),
            rules: FileRules {
                merge: Merge::Surround,
            },
        }
    }

    /// Content placed after existing content.
    pub fn append(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            head: String::new(),
            content: content.into(),
            rules: FileRules {
                merge: Merge::Append,
            },
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the generated content (the tail for surround merges)
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Compose the final file content from what is currently on disk.
    pub fn merged(&self, existing: Option<&str>) -> String {
        let existing = existing.unwrap_or_default();
        match self.rules.merge {
            Merge::Replace => self.content.clone(),
            Merge::Append => format!("{}{}", existing, self.content),
            Merge::Surround => format!("{}{}{}", self.head, existing, self.content),
        }
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        let existing = read_existing(&self.path)?;
        let result = if existing.is_some() {
            WriteResult::Updated
        } else {
            WriteResult::Created
        };
        write_file(&self.path, &self.merged(existing.as_deref()))?;
        Ok(result)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy)]
pub struct FileRules {
    pub merge: Merge,
}

/// How to combine generated text with an existing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merge {
    /// Replace previous content entirely (templates)
    Replace,
    /// Keep previous content, add after it
    Append,
    /// Keep previous content between a new head and a new tail (python modules)
    Surround,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            merge: Merge::Replace,
        }
    }
}
