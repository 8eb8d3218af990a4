//! Manifest-driven rendering.
//!
//! [`RenderPipeline::render`] runs these steps in order, stopping at the
//! first failure:
//!
//! 1. Fetch the manifest, then the raw content
//! 2. Parse the content as a template
//! 3. Ask the parameter source for each manifest parameter
//! 4. Render the manifest `out` pattern into the destination path
//! 5. Create the destination's parent directories
//! 6. Open the destination, truncating any existing file
//! 7. Render the content into it
//!
//! A failure while writing leaves the partial file in place.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::error::{PlateError, Result};
use crate::registry::TemplateProvider;

use super::output::open_output;
use super::params::{collect_parameters, ParameterSet, ParameterSource};
use super::template::Template;

/// Renders templates from a provider into an output root.
pub struct RenderPipeline<'a, P: TemplateProvider + ?Sized> {
    provider: &'a P,
    output_root: PathBuf,
}

impl<'a, P: TemplateProvider + ?Sized> RenderPipeline<'a, P> {
    /// Create a pipeline writing relative destinations under `output_root`.
    pub fn new(provider: &'a P, output_root: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Render `slug`, reading parameters from `source`.
    ///
    /// Returns the path of the written file.
    pub fn render<S>(&self, slug: &str, source: &mut S) -> Result<PathBuf>
    where
        S: ParameterSource + ?Sized,
    {
        let manifest = self.provider.provide_manifest(slug)?;
        let content = self.provider.provide_content(slug)?;

        let template = Template::parse(&content).map_err(|source| PlateError::ContentParse {
            slug: slug.to_string(),
            source,
        })?;

        let params = collect_parameters(&manifest.params, source)?;

        let destination = self.destination(slug, &manifest.out, &params)?;
        tracing::debug!("writing {} to {}", slug, destination.display());

        let file = open_output(&destination)?;
        let mut out = BufWriter::new(file);
        template
            .render_to(&params, &mut out)
            .map_err(|source| PlateError::Write {
                path: destination.clone(),
                source,
            })?;

        Ok(destination)
    }

    /// Render the output pattern and place it under the output root.
    fn destination(&self, slug: &str, pattern: &str, params: &ParameterSet) -> Result<PathBuf> {
        let template = Template::parse(pattern).map_err(|source| PlateError::PathRender {
            slug: slug.to_string(),
            source,
        })?;
        Ok(self.output_root.join(template.render(params)))
    }
}
