//! Configuration schema definitions for the template registry.
//!
//! These structs map to the YAML file format accepted by
//! [`RegistryConfig::load`](crate::config::RegistryConfig::load).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for building a [`TemplatesMap`](crate::TemplatesMap).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Glob pattern matching the shared layout files
    pub layouts: String,

    /// Glob patterns matching page files
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<String>,

    /// Directory relative patterns are resolved against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Compilation and rendering behavior
    pub options: RegistryOptions,
}

/// Behavior switches applied when compiling and rendering templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// What to do when a layout or page fails to compile
    pub compile_errors: CompilePolicy,

    /// Register one entry per layout file, keyed by its base name
    #[serde(default = "default_layout_entries")]
    pub layout_entries: bool,

    /// How missing values in render data are treated
    pub undefined: UndefinedPolicy,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            compile_errors: CompilePolicy::default(),
            layout_entries: default_layout_entries(),
            undefined: UndefinedPolicy::default(),
        }
    }
}

fn default_layout_entries() -> bool {
    true
}

/// Handling of template compilation failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilePolicy {
    /// Return the compile error to the caller
    #[default]
    Propagate,
    /// Panic on the first compile error
    Abort,
}

/// Handling of values missing from render data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedPolicy {
    /// Missing values render as empty
    #[default]
    Lenient,
    /// Missing values are a render error
    Strict,
}

impl UndefinedPolicy {
    pub(crate) fn behavior(self) -> minijinja::UndefinedBehavior {
        match self {
            UndefinedPolicy::Lenient => minijinja::UndefinedBehavior::Lenient,
            UndefinedPolicy::Strict => minijinja::UndefinedBehavior::Strict,
        }
    }
}
