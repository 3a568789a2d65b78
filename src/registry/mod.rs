//! Template registry.
//!
//! This module maps page names to compiled templates:
//! - Glob expansion of layout and page patterns ([`discovery`])
//! - Helper functions shared by all templates ([`functions`])
//! - Compiled units of layouts plus one page ([`template`])
//! - The name-to-unit table and its operations ([`map`])
//!
//! # Example
//!
//! ```no_run
//! use templates_map::{FuncMap, TemplatesMap};
//!
//! let funcs = FuncMap::new().with("upper", |s: String| s.to_uppercase());
//! let map = TemplatesMap::new("templates/layouts/*.html", Some(funcs), ["templates/pages/*.html"])
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! map.render(&mut out, "home.html", minijinja::context! { title => "Home" })
//!     .unwrap();
//! ```

pub mod discovery;
pub mod functions;
pub mod map;
pub mod template;

// Re-exports
pub use functions::FuncMap;
pub use map::TemplatesMap;
pub use template::CompiledTemplate;
