//! Configuration loading for Plate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use plate::config::{load_config, Verbosity};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".plate.yml"), "verbosity: debug").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.verbosity, Verbosity::Debug);
//! assert_eq!(config.templates.manifest_extension, ".plate.json");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, render_config,
    CONFIG_FILE_NAME,
};
pub use schema::{
    GeneratedConfig, PlateConfig, TemplatesConfig, Verbosity, DEFAULT_MANIFEST_EXTENSION,
};
