//! Layout-aware HTML template registry.
//!
//! A [`TemplatesMap`] globs a set of shared layout files and any number of
//! page files, compiles each page together with every layout, and renders a
//! page by its file name (`"role-list.html"`) into any `std::io::Write`.
//! Templates use the MiniJinja dialect: `{% extends %}`/`{% block %}` for
//! layouts, `{% include %}` for fragments, and `{{ fn(arg) }}` for functions
//! from a [`FuncMap`].
//!
//! # Modules
//!
//! - [`config`] - Registry options and YAML config loading
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Glob discovery, compiled units and the template table
//!
//! # Example
//!
//! ```
//! use templates_map::{FuncMap, TemplatesMap};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("base.html"),
//!     "<body>{% block main %}{% endblock %}</body>",
//! )
//! .unwrap();
//! fs::create_dir(temp.path().join("pages")).unwrap();
//! fs::write(
//!     temp.path().join("pages").join("hello.html"),
//!     "{% extends \"base.html\" %}{% block main %}{{ upper(name) }}{% endblock %}",
//! )
//! .unwrap();
//!
//! let layouts = temp.path().join("*.html").to_string_lossy().into_owned();
//! let pages = temp.path().join("pages").join("*.html").to_string_lossy().into_owned();
//! let funcs = FuncMap::new().with("upper", |s: String| s.to_uppercase());
//! let map = TemplatesMap::new(&layouts, Some(funcs), [pages]).unwrap();
//!
//! let mut out = Vec::new();
//! map.render(&mut out, "hello.html", minijinja::context! { name => "world" }).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "<body>WORLD</body>");
//! ```

pub mod config;
pub mod error;
pub mod registry;

pub use config::{CompilePolicy, RegistryConfig, RegistryOptions, UndefinedPolicy};
pub use error::{Result, TemplatesError};
pub use registry::{CompiledTemplate, FuncMap, TemplatesMap};
