//! Compiled template units.
//!
//! A unit is one MiniJinja environment holding several template sources
//! parsed together, each addressable by the base name of its file. A page
//! unit holds every layout plus the page itself, so `{% extends %}` and
//! `{% include %}` between them resolve without a loader.

use crate::config::RegistryOptions;
use crate::error::{Result, TemplatesError};
use crate::registry::discovery::{base_name, expand};
use crate::registry::functions::FuncMap;
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Ready-to-execute set of templates parsed from one or more files.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    env: Environment<'static>,
    names: Vec<String>,
    sources: Vec<PathBuf>,
}

impl CompiledTemplate {
    /// Parse `files` together into one unit.
    ///
    /// Files are added in order; a later file with the same base name
    /// replaces an earlier one.
    ///
    /// # Errors
    ///
    /// `NoFiles` for an empty list, `ReadTemplate` if a file cannot be read,
    /// `Compile` if a file is not valid template source.
    pub fn from_files<P: AsRef<Path>>(
        files: &[P],
        functions: Option<&FuncMap>,
        options: &RegistryOptions,
    ) -> Result<Self> {
        if files.is_empty() {
            return Err(TemplatesError::NoFiles);
        }

        let mut env = Environment::new();
        env.set_undefined_behavior(options.undefined.behavior());
        if let Some(functions) = functions {
            functions.apply(&mut env);
        }

        let mut names = Vec::with_capacity(files.len());
        let mut sources = Vec::with_capacity(files.len());
        for file in files {
            let path = file.as_ref();
            let source =
                fs::read_to_string(path).map_err(|source| TemplatesError::ReadTemplate {
                    path: path.to_path_buf(),
                    source,
                })?;

            let name = base_name(path);
            env.add_template_owned(name.clone(), source)
                .map_err(|source| TemplatesError::Compile {
                    path: path.to_path_buf(),
                    source,
                })?;

            if !names.contains(&name) {
                names.push(name);
            }
            sources.push(path.to_path_buf());
        }

        tracing::debug!(
            "Compiled unit from {} file(s): {}",
            sources.len(),
            names.join(", ")
        );

        Ok(Self {
            env,
            names,
            sources,
        })
    }

    /// Parse every file matched by `pattern` into one unit.
    pub fn from_glob(
        pattern: &str,
        functions: Option<&FuncMap>,
        options: &RegistryOptions,
    ) -> Result<Self> {
        let files = expand(pattern)?;
        Self::from_files(&files, functions, options)
    }

    /// Execute the template `name` against `data`, streaming into `writer`.
    ///
    /// Output written before a failure stays written.
    pub fn execute<W: Write, S: Serialize>(
        &self,
        mut writer: W,
        name: &str,
        data: S,
    ) -> Result<()> {
        let template = self.env.get_template(name).map_err(TemplatesError::Render)?;
        template
            .render_captured_to(data, &mut writer)
            .map_err(TemplatesError::Render)?;
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names of the templates in this unit, in the order first added.
    pub fn template_names(&self) -> &[String] {
        &self.names
    }

    /// Files this unit was parsed from, in order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}
