//! List command implementation.
//!
//! The `plate list` command lists the templates found under the template root.

use std::path::{Path, PathBuf};

use crate::cli::args::ListArgs;
use crate::config::PlateConfig;
use crate::error::{PlateError, Result};
use crate::registry::{TemplateDescriptor, TemplateRegistry};
use crate::ui::theme::PlateTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: PlateConfig,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config: &PlateConfig, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn format_entry(
        &self,
        theme: &PlateTheme,
        descriptor: &TemplateDescriptor,
        detail: bool,
    ) -> String {
        let mut line = format!("  {}", theme.highlight.apply_to(&descriptor.slug));

        if !descriptor.manifest_path.exists() {
            line.push_str(&format!(" {}", theme.warning.apply_to("(no manifest)")));
        }

        if detail {
            line.push_str(&format!(
                " ({})",
                theme.path.apply_to(descriptor.content_path.display())
            ));
        }

        line
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = self.config.templates_root(&self.project_root);
        if !root.exists() {
            ui.error(&format!(
                "Template directory {} not found. Run 'plate init' first.",
                root.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let registry = TemplateRegistry::scan(&root, &self.config.templates.manifest_extension)?;

        if self.args.json {
            let descriptors: Vec<&TemplateDescriptor> = registry.iter().collect();
            let json = serde_json::to_string_pretty(&descriptors)
                .map_err(|e| PlateError::Other(e.into()))?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            ui.message(&format!("No templates found in {}", registry.root().display()));
            return Ok(CommandResult::success());
        }

        let theme = PlateTheme::detect();
        let detail = ui.output_mode().shows_detail() || self.config.verbosity.is_debug();

        ui.message(&format!("{}", theme.highlight.apply_to("Templates:")));
        for descriptor in registry.iter() {
            ui.message(&self.format_entry(&theme, descriptor, detail));
        }

        Ok(CommandResult::success())
    }
}
