//! New command implementation.
//!
//! The `plate new <slug>` command renders one template into a file, asking
//! for each declared parameter on standard input.

use std::path::{Path, PathBuf};

use crate::cli::args::NewArgs;
use crate::config::PlateConfig;
use crate::error::Result;
use crate::registry::{LocalProvider, TemplateRegistry};
use crate::render::{LineSource, ParameterSource, RenderPipeline};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The new command implementation.
pub struct NewCommand {
    project_root: PathBuf,
    config: PlateConfig,
    args: NewArgs,
}

impl NewCommand {
    /// Create a new `new` command.
    pub fn new(project_root: &Path, config: &PlateConfig, args: NewArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &NewArgs {
        &self.args
    }

    /// Render the requested template with parameters from `source`.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        source: &mut dyn ParameterSource,
    ) -> Result<CommandResult> {
        let registry = TemplateRegistry::scan(
            &self.config.templates_root(&self.project_root),
            &self.config.templates.manifest_extension,
        )?;
        let provider = LocalProvider::new(registry);
        let pipeline = RenderPipeline::new(&provider, self.config.output_root(&self.project_root));

        let written = pipeline.render(&self.args.slug, source)?;

        let shown = written.strip_prefix(&self.project_root).unwrap_or(&written);
        ui.success(&format!("Created {}", shown.display()));

        Ok(CommandResult::success())
    }
}

impl Command for NewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.run(ui, &mut LineSource::stdio())
    }
}
