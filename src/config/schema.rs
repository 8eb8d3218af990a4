//! Configuration schema for Plate.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default manifest suffix appended to a template's base name.
pub const DEFAULT_MANIFEST_EXTENSION: &str = ".plate.json";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateConfig {
    /// Where templates are discovered.
    pub templates: TemplatesConfig,

    /// Where rendered files are written.
    pub generated: GeneratedConfig,

    /// How much diagnostic output to produce.
    pub verbosity: Verbosity,
}

/// Template discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Template root directory, relative to the project root.
    pub local_dir: PathBuf,

    /// Suffix that marks manifest files.
    pub manifest_extension: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            local_dir: PathBuf::from("_templates"),
            manifest_extension: DEFAULT_MANIFEST_EXTENSION.to_string(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratedConfig {
    /// Output root directory, relative to the project root.
    pub output_dir: PathBuf,
}

impl Default for GeneratedConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Diagnostic verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Silent,
    #[default]
    Error,
    Debug,
}

impl Verbosity {
    /// Whether extra diagnostic detail is wanted on the console.
    pub fn is_debug(&self) -> bool {
        *self >= Self::Debug
    }

    /// Log filter directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Silent => "plate=off",
            Self::Error => "plate=error",
            Self::Debug => "plate=debug",
        }
    }
}

impl PlateConfig {
    /// Template root resolved against `project_root`.
    pub fn templates_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.templates.local_dir)
    }

    /// Output root resolved against `project_root`.
    pub fn output_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.generated.output_dir)
    }
}
