//! Local template discovery.
//!
//! Every regular file under the template root is a template, except files
//! ending with the manifest suffix. Each template's manifest is expected next
//! to it, named after the content file with its extension replaced by the
//! suffix. Manifest existence is not checked here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{PlateError, Result};
use crate::registry::descriptor::TemplateDescriptor;

/// Index of templates found under one root, keyed by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRegistry {
    root: PathBuf,
    manifest_suffix: String,
    descriptors: BTreeMap<String, TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Walk `root` recursively and index every template found.
    ///
    /// Entries are visited in file-name order. When two files map to the
    /// same slug (`a.md` and `a.txt`), the one visited last wins.
    ///
    /// # Errors
    ///
    /// Returns `Scan` if any entry cannot be read, including a missing root.
    /// No partial registry is returned.
    pub fn scan(root: &Path, manifest_suffix: &str) -> Result<Self> {
        let root = std::path::absolute(root)?;
        tracing::debug!("using templates dir {}", root.display());

        let mut descriptors = BTreeMap::new();

        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry.map_err(|source| PlateError::Scan {
                root: root.clone(),
                source,
            })?;
            let path = entry.path();
            let relative = path.strip_prefix(&root).unwrap_or(path);

            if entry.file_type().is_dir() {
                tracing::debug!("ignoring directory {}", relative.display());
                continue;
            }

            if is_manifest_path(path, manifest_suffix) {
                tracing::debug!("ignoring manifest file {}", relative.display());
                continue;
            }

            let Some(descriptor) = TemplateDescriptor::for_content(&root, path, manifest_suffix)
            else {
                continue;
            };

            if let Some(previous) = descriptors.insert(descriptor.slug.clone(), descriptor) {
                tracing::debug!(
                    "slug {} from {} replaced by {}",
                    previous.slug,
                    previous.content_path.display(),
                    relative.display()
                );
            }
        }

        tracing::debug!("collected templates {:?}", descriptors.keys());

        Ok(Self {
            root,
            manifest_suffix: manifest_suffix.to_string(),
            descriptors,
        })
    }

    /// Absolute template root that was scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_suffix(&self) -> &str {
        &self.manifest_suffix
    }

    /// Get a descriptor by slug.
    pub fn get(&self, slug: &str) -> Option<&TemplateDescriptor> {
        self.descriptors.get(slug)
    }

    /// Check if a slug exists.
    pub fn contains(&self, slug: &str) -> bool {
        self.descriptors.contains_key(slug)
    }

    /// All slugs, sorted.
    pub fn slugs(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Descriptors in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn is_manifest_path(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
