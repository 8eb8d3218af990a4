//! Template rendering.
//!
//! - [`template`] - `{{ .name }}` placeholder parsing and substitution
//! - [`params`] - parameter sets and line-oriented input sources
//! - [`output`] - destination directory and file handling
//! - [`pipeline`] - the manifest-driven render sequence

pub mod output;
pub mod params;
pub mod pipeline;
pub mod template;

pub use output::{ensure_dir, ensure_parent_dir, open_output};
pub use params::{collect_parameters, LineSource, ParameterSet, ParameterSource, ScriptedSource};
pub use pipeline::RenderPipeline;
pub use template::{Segment, SyntaxError, Template};
