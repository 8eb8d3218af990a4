//! Registry entries.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Where a template's content and manifest live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    /// Content path relative to the template root, extension removed.
    pub slug: String,

    /// Absolute path to the raw template text.
    pub content_path: PathBuf,

    /// Absolute path the manifest is expected at. May not exist.
    pub manifest_path: PathBuf,
}

impl TemplateDescriptor {
    /// Build the descriptor for a content file found under `root`.
    ///
    /// Returns `None` if `content_path` is not inside `root` or has no file name.
    pub fn for_content(root: &Path, content_path: &Path, manifest_suffix: &str) -> Option<Self> {
        let relative = content_path.strip_prefix(root).ok()?;
        let slug = slug_for(relative)?;
        let manifest_path = manifest_path_for(content_path, manifest_suffix)?;

        Some(Self {
            slug,
            content_path: content_path.to_path_buf(),
            manifest_path,
        })
    }
}

/// `a/b/c.txt` becomes `a/b/c`, joined with `/` on every platform.
fn slug_for(relative: &Path) -> Option<String> {
    let stem = relative.file_stem()?.to_string_lossy();
    let mut parts: Vec<String> = match relative.parent() {
        Some(parent) => parent
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect(),
        None => Vec::new(),
    };
    parts.push(stem.into_owned());
    Some(parts.join("/"))
}

/// Replace the final extension of the file name with `suffix`.
fn manifest_path_for(content_path: &Path, suffix: &str) -> Option<PathBuf> {
    let stem = content_path.file_stem()?;
    let mut file_name = stem.to_os_string();
    file_name.push(suffix);
    Some(content_path.with_file_name(file_name))
}
