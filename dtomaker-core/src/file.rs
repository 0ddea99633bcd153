use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::sanitize_file_name;

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// A generated output file
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Create a file named `<name>.<extension>` inside `dir`.
    ///
    /// Characters that are not allowed in file names are replaced with `_`.
    pub fn in_dir(dir: &Path, name: &str, extension: &str) -> Self {
        let file_name = format!("{}.{}", sanitize_file_name(name), extension);
        Self::new(dir.join(file_name), String::new())
    }

    /// Replace the file content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, creating parent directories as needed
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

/// Create `dir` and all of its missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create output directory '{}'", dir.display()))
}

/// Delete every regular file directly inside `dir`.
///
/// Subdirectories are left alone. Returns the number of removed files.
pub fn clear_dir(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;

    let mut removed = 0;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            std::fs::remove_file(&path)
                .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}
