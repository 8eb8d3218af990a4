//! Template content and manifest provisioning.
//!
//! Providers resolve a slug to its raw text and its validated manifest.
//! Nothing is cached: every call reads from disk.

use std::fs;

use crate::error::{PlateError, Result};
use crate::registry::descriptor::TemplateDescriptor;
use crate::registry::local::TemplateRegistry;
use crate::registry::manifest::Manifest;

/// Source of template text and manifests, keyed by slug.
pub trait TemplateProvider {
    /// Read the raw template text for `slug`.
    fn provide_content(&self, slug: &str) -> Result<String>;

    /// Read, decode and validate the manifest for `slug`.
    fn provide_manifest(&self, slug: &str) -> Result<Manifest>;
}

/// Provider backed by a scanned local template directory.
#[derive(Debug, Clone)]
pub struct LocalProvider {
    registry: TemplateRegistry,
}

impl LocalProvider {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    /// The registry this provider resolves slugs against.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    fn descriptor(&self, slug: &str) -> Result<&TemplateDescriptor> {
        self.registry
            .get(slug)
            .ok_or_else(|| PlateError::UnknownSlug {
                slug: slug.to_string(),
            })
    }
}

impl TemplateProvider for LocalProvider {
    fn provide_content(&self, slug: &str) -> Result<String> {
        let descriptor = self.descriptor(slug)?;
        tracing::debug!("reading content of {}", descriptor.slug);

        fs::read_to_string(&descriptor.content_path).map_err(|source| PlateError::ContentRead {
            path: descriptor.content_path.clone(),
            source,
        })
    }

    fn provide_manifest(&self, slug: &str) -> Result<Manifest> {
        let descriptor = self.descriptor(slug)?;
        tracing::debug!("reading manifest for {}", descriptor.slug);

        let text = fs::read_to_string(&descriptor.manifest_path).map_err(|source| {
            PlateError::ManifestRead {
                path: descriptor.manifest_path.clone(),
                source,
            }
        })?;

        let manifest = Manifest::from_json(&text).map_err(|source| PlateError::ManifestParse {
            path: descriptor.manifest_path.clone(),
            source,
        })?;
        tracing::debug!("got manifest for {} {:?}", descriptor.slug, manifest);

        manifest
            .validate()
            .map_err(|message| PlateError::InvalidManifest {
                slug: descriptor.slug.clone(),
                message,
            })?;

        Ok(manifest)
    }
}
