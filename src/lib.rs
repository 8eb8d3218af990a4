//! Plate - scaffold files from local templates.
//!
//! Plate discovers templates in a local directory, asks for the parameters a
//! template's manifest declares, and renders both the output path and the
//! file content from them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Template discovery, manifests and providers
//! - [`render`] - Placeholder templates, parameter input and the render pipeline
//! - [`ui`] - Console output and confirmations
//!
//! # Example
//!
//! ```
//! use plate::registry::{LocalProvider, TemplateRegistry};
//! use plate::render::{RenderPipeline, ScriptedSource};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let templates = TempDir::new().unwrap();
//! fs::write(templates.path().join("greeting.txt"), "Hi {{ .who }}").unwrap();
//! fs::write(
//!     templates.path().join("greeting.plate.json"),
//!     r#"{"out": "out/{{ .who }}.txt", "params": ["who"]}"#,
//! )
//! .unwrap();
//!
//! let output = TempDir::new().unwrap();
//! let registry = TemplateRegistry::scan(templates.path(), ".plate.json").unwrap();
//! let provider = LocalProvider::new(registry);
//! let pipeline = RenderPipeline::new(&provider, output.path());
//!
//! let written = pipeline.render("greeting", &mut ScriptedSource::new(["Ana"])).unwrap();
//! assert_eq!(fs::read_to_string(written).unwrap(), "Hi Ana");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod render;
pub mod ui;

pub use error::{PlateError, Result};
