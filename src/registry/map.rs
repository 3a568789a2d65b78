//! The template registry: page name to compiled unit.

use crate::config::{CompilePolicy, RegistryConfig, RegistryOptions};
use crate::error::{Result, TemplatesError};
use crate::registry::discovery::{base_name, expand};
use crate::registry::functions::FuncMap;
use crate::registry::template::CompiledTemplate;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Registry of compiled page templates sharing one set of layouts.
///
/// Every page entry is compiled from all layouts (in glob order) followed by
/// the page file, and is keyed by the page's base name. Mutation goes
/// through `&mut self`, so it cannot overlap with rendering; rendering
/// through `&self` is safe from many threads at once.
#[derive(Debug, Clone)]
pub struct TemplatesMap {
    layouts: Vec<PathBuf>,
    templates: HashMap<String, CompiledTemplate>,
    functions: Option<FuncMap>,
    options: RegistryOptions,
}

impl TemplatesMap {
    /// Build a registry from a layout pattern and page patterns.
    ///
    /// # Errors
    ///
    /// `GlobPattern` for a malformed pattern; compile and read errors for
    /// broken template files (see [`TemplatesMap::with_options`]).
    pub fn new<I, P>(layout_pattern: &str, functions: Option<FuncMap>, pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self::with_options(layout_pattern, functions, RegistryOptions::default(), pages)
    }

    /// Build a registry whose templates use no custom functions.
    pub fn without_functions<I, P>(layout_pattern: &str, pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self::new(layout_pattern, None, pages)
    }

    /// Build a registry with explicit options.
    ///
    /// With `layout_entries` set, each layout's base name is registered
    /// first, mapped to a unit compiled from all layouts together.
    ///
    /// # Panics
    ///
    /// Panics on a template that fails to load when `compile_errors` is
    /// [`CompilePolicy::Abort`].
    pub fn with_options<I, P>(
        layout_pattern: &str,
        functions: Option<FuncMap>,
        options: RegistryOptions,
        pages: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let layouts = expand(layout_pattern)?;
        let mut map = Self {
            layouts,
            templates: HashMap::new(),
            functions,
            options,
        };

        if map.options.layout_entries && !map.layouts.is_empty() {
            let unit = map.compile(&map.layouts)?;
            for layout in &map.layouts {
                map.templates.insert(base_name(layout), unit.clone());
            }
        }

        map.add(pages)?;

        tracing::info!(
            "Loaded {} template(s) over {} layout(s) from '{}'",
            map.templates.len(),
            map.layouts.len(),
            layout_pattern
        );
        Ok(map)
    }

    /// Build a registry described by a [`RegistryConfig`].
    pub fn from_config(config: &RegistryConfig, functions: Option<FuncMap>) -> Result<Self> {
        Self::with_options(
            &config.layout_pattern(),
            functions,
            config.options,
            config.page_patterns(),
        )
    }

    /// Compile every file matched by each pattern and register it under its
    /// base name, replacing any entry with the same name.
    ///
    /// Entries added before a failure are kept.
    pub fn add<I, P>(&mut self, pages: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        for pattern in pages {
            for page in expand(pattern.as_ref())? {
                let mut files = self.layouts.clone();
                files.push(page.clone());

                let unit = self.compile(&files)?;
                let name = base_name(&page);
                if self.templates.insert(name.clone(), unit).is_some() {
                    tracing::debug!("Replaced template '{}' with {}", name, page.display());
                } else {
                    tracing::debug!("Added template '{}' from {}", name, page.display());
                }
            }
        }
        Ok(())
    }

    /// Render the template registered as `name` into `writer`.
    ///
    /// # Errors
    ///
    /// `TemplateNotFound` (with nothing written) when `name` is not
    /// registered; `Render` when execution fails, in which case output
    /// already written is left in `writer`.
    pub fn render<W: Write, S: Serialize>(&self, writer: W, name: &str, data: S) -> Result<()> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| TemplatesError::TemplateNotFound {
                name: name.to_string(),
            })?;
        template.execute(writer, name, data)
    }

    fn compile(&self, files: &[PathBuf]) -> Result<CompiledTemplate> {
        match CompiledTemplate::from_files(files, self.functions.as_ref(), &self.options) {
            Ok(unit) => Ok(unit),
            Err(e) => match self.options.compile_errors {
                CompilePolicy::Propagate => Err(e),
                CompilePolicy::Abort => {
                    tracing::error!("Template loading failed: {}", e);
                    panic!("template loading failed: {e}");
                }
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&CompiledTemplate> {
        self.templates.get(name)
    }

    /// Register a unit directly, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        template: CompiledTemplate,
    ) -> Option<CompiledTemplate> {
        self.templates.insert(name.into(), template)
    }

    pub fn remove(&mut self, name: &str) -> Option<CompiledTemplate> {
        self.templates.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered template names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Layout files shared by every page, in glob order.
    pub fn layouts(&self) -> &[PathBuf] {
        &self.layouts
    }

    pub fn functions(&self) -> Option<&FuncMap> {
        self.functions.as_ref()
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Whether `path` is one of the registry's layouts.
    pub fn is_layout(&self, path: &Path) -> bool {
        self.layouts.iter().any(|l| l == path)
    }
}
