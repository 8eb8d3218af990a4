//! Error types for Plate operations.
//!
//! This module defines [`PlateError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Each render step fails with its own variant, carrying the slug or path
//!   that identifies where it failed
//! - `UnknownSlug` is never wrapped, so callers can tell "no such template"
//!   apart from I/O failures
//! - Use `anyhow::Error` (via `PlateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::render::template::SyntaxError;

/// Core error type for Plate operations.
#[derive(Debug, Error)]
pub enum PlateError {
    /// Requested slug is not in the template registry.
    #[error("No template with slug '{slug}'")]
    UnknownSlug { slug: String },

    /// Walking the template root failed.
    #[error("Failed to scan templates in {root}: {source}")]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Template content file could not be read.
    #[error("Could not read template file {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is missing or unreadable.
    #[error("Could not open manifest file {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON of the expected shape.
    #[error("Failed to decode manifest {path} as json: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parsed but violates its contract.
    #[error("Invalid manifest for '{slug}': {message}")]
    InvalidManifest { slug: String, message: String },

    /// Template content has malformed placeholder syntax.
    #[error("Error when parsing template '{slug}': {source}")]
    ContentParse {
        slug: String,
        #[source]
        source: SyntaxError,
    },

    /// Reading a parameter value from the input source failed.
    #[error("Failed to read template param '{name}': {source}")]
    ParameterRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Manifest output pattern has malformed placeholder syntax.
    #[error("Failed to parse manifest output path for '{slug}': {source}")]
    PathRender {
        slug: String,
        #[source]
        source: SyntaxError,
    },

    /// Destination directory could not be created or the file opened.
    #[error("Could not open output file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing rendered content to the destination failed.
    #[error("Failed to write rendered template to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlateError {
    /// Stable name of the failure kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownSlug { .. } => "unknown-slug",
            Self::Scan { .. } => "scan",
            Self::ContentRead { .. } => "content-read",
            Self::ManifestRead { .. } => "manifest-read",
            Self::ManifestParse { .. } => "manifest-parse",
            Self::InvalidManifest { .. } => "invalid-manifest",
            Self::ContentParse { .. } => "content-parse",
            Self::ParameterRead { .. } => "parameter-read",
            Self::PathRender { .. } => "path-render",
            Self::OutputOpen { .. } => "output-open",
            Self::Write { .. } => "write",
            Self::ConfigNotFound { .. } => "config-not-found",
            Self::ConfigParse { .. } => "config-parse",
            Self::Io(_) => "io",
            Self::Other(_) => "other",
        }
    }
}

/// Result type alias for Plate operations.
pub type Result<T> = std::result::Result<T, PlateError>;
