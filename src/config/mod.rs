//! Registry configuration.
//!
//! - Schema definitions and defaults in [`schema`]
//! - YAML file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use templates_map::config::{CompilePolicy, RegistryConfig};
//!
//! let config = RegistryConfig::from_yaml(
//!     "layouts: \"templates/layouts/*.html\"\npages: [\"templates/pages/*.html\"]",
//! )
//! .unwrap();
//! assert_eq!(config.pages.len(), 1);
//! assert_eq!(config.options.compile_errors, CompilePolicy::Propagate);
//! ```

pub mod loader;
pub mod schema;

pub use loader::parse_config;
pub use schema::{CompilePolicy, RegistryConfig, RegistryOptions, UndefinedPolicy};
