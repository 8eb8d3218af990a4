//! Configuration file discovery and loading.

use crate::config::schema::PlateConfig;
use crate::error::{PlateError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".plate.yml";

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load configuration for a project.
///
/// With an explicit path the file must exist. Otherwise `.plate.yml` in the
/// project root is used if present, and built-in defaults if not.
///
/// # Errors
///
/// Returns `ConfigNotFound` if an explicit path doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<PlateConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }

    let path = default_config_path(project_root);
    if path.exists() {
        load_config_file(&path)
    } else {
        tracing::debug!("no config at {}, using defaults", path.display());
        Ok(PlateConfig::default())
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<PlateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PlateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PlateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into PlateConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<PlateConfig> {
    if content.trim().is_empty() {
        return Ok(PlateConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PlateError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render a config as YAML, as written by `plate init`.
pub fn render_config(config: &PlateConfig) -> Result<String> {
    serde_yaml::to_string(config).map_err(|e| PlateError::Other(e.into()))
}
