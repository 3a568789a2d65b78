//! Registry configuration file loading.

use crate::config::schema::RegistryConfig;
use crate::error::{Result, TemplatesError};
use std::fs;
use std::path::{Path, PathBuf};

impl RegistryConfig {
    /// Load a registry config from a YAML file.
    ///
    /// When the file does not set `root`, relative patterns are resolved
    /// against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config = parse_config(&content, path)?;

        if config.root.is_none() {
            config.root = path.parent().map(Path::to_path_buf);
        }

        Ok(config)
    }

    /// Parse a registry config from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        parse_config(content, Path::new("<inline>"))
    }

    /// The layout pattern with `root` applied.
    ///
    /// Glob metacharacters in `root` are escaped so they match literally.
    pub fn layout_pattern(&self) -> String {
        self.resolve(&self.layouts)
    }

    /// The page patterns with `root` applied.
    pub fn page_patterns(&self) -> Vec<String> {
        self.pages.iter().map(|p| self.resolve(p)).collect()
    }

    fn resolve(&self, pattern: &str) -> String {
        match &self.root {
            Some(root) if Path::new(pattern).is_relative() && !root.as_os_str().is_empty() => {
                let root = glob::Pattern::escape(&root.to_string_lossy());
                Path::new(&root).join(pattern).to_string_lossy().into_owned()
            }
            _ => pattern.to_string(),
        }
    }
}

/// Parse YAML content into a [`RegistryConfig`].
///
/// # Errors
///
/// Returns `ConfigParseError` naming `source_path` if the YAML is invalid.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RegistryConfig> {
    serde_yaml::from_str(content).map_err(|e| TemplatesError::ConfigParseError {
        path: PathBuf::from(source_path),
        message: e.to_string(),
    })
}
