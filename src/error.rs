//! Error types for template registry operations.
//!
//! This module defines [`TemplatesError`], the error type returned by every
//! registry operation, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Glob and not-found errors are ordinary recoverable returns
//! - Compile errors are returned or, under [`CompilePolicy::Abort`], panic
//! - Render errors carry the engine error unchanged
//!
//! [`CompilePolicy::Abort`]: crate::config::CompilePolicy::Abort

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for template registry operations.
#[derive(Debug, Error)]
pub enum TemplatesError {
    /// A layout or page glob pattern is malformed.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A matched template file could not be read.
    #[error("Failed to read template {path}: {source}")]
    ReadTemplate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template source failed to parse.
    #[error("Failed to compile template {path}: {source}")]
    Compile {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// A compiled unit was requested from an empty file list.
    #[error("No template files given for compilation")]
    NoFiles,

    /// `render` was called with a name that is not in the table.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template execution failed.
    #[error(transparent)]
    Render(minijinja::Error),

    /// Failed to parse a registry configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TemplatesError {
    /// Whether this is the recoverable "no such template" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TemplatesError::TemplateNotFound { .. })
    }
}

/// Result type alias for template registry operations.
pub type Result<T> = std::result::Result<T, TemplatesError>;
