//! Template registry for Plate.
//!
//! This module handles discovering templates in a local directory and
//! resolving a slug to its content and manifest:
//! - [`TemplateRegistry`] scans the template root once into a slug index
//! - [`LocalProvider`] reads content and manifests on demand
//!
//! # Example
//!
//! ```
//! use plate::registry::{LocalProvider, TemplateProvider, TemplateRegistry};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("greeting.txt"), "Hi {{ .who }}").unwrap();
//! fs::write(
//!     temp.path().join("greeting.plate.json"),
//!     r#"{"out": "out/{{ .who }}.txt", "params": ["who"]}"#,
//! )
//! .unwrap();
//!
//! let registry = TemplateRegistry::scan(temp.path(), ".plate.json").unwrap();
//! let provider = LocalProvider::new(registry);
//! let manifest = provider.provide_manifest("greeting").unwrap();
//! assert_eq!(manifest.params, vec!["who"]);
//! ```

pub mod descriptor;
pub mod local;
pub mod manifest;
pub mod provider;

// Re-exports
pub use descriptor::TemplateDescriptor;
pub use local::TemplateRegistry;
pub use manifest::Manifest;
pub use provider::{LocalProvider, TemplateProvider};
