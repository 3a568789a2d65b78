//! Glob expansion of layout and page patterns.

use crate::error::{Result, TemplatesError};
use std::path::{Path, PathBuf};

/// Expand a glob pattern into the template files it matches.
///
/// Only a malformed pattern is an error. A pattern without matches yields an
/// empty list, matched directories are skipped, and entries that cannot be
/// read are skipped with a warning. Matches keep the glob crate's
/// alphabetical order.
pub fn expand(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| TemplatesError::GlobPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => tracing::debug!("Skipping non-file match {}", path.display()),
            Err(e) => tracing::warn!("Skipping unreadable match for '{}': {}", pattern, e),
        }
    }

    tracing::debug!("Pattern '{}' matched {} file(s)", pattern, files.len());
    Ok(files)
}

/// Table key for a template file: its final path component.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
