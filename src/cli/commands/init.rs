//! Init command implementation.
//!
//! The `plate init` command creates the template directory and writes the
//! effective configuration to `.plate.yml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::InitArgs;
use crate::config::{default_config_path, render_config, PlateConfig};
use crate::error::Result;
use crate::render::ensure_dir;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    config: PlateConfig,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, config: &PlateConfig, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    /// Decide whether an existing config may be replaced.
    fn may_overwrite(&self, path: &Path, ui: &mut dyn UserInterface) -> Result<bool> {
        if self.args.force {
            return Ok(true);
        }
        if ui.is_interactive() {
            return ui.confirm(&format!("{} already exists. Overwrite?", path.display()), false);
        }
        ui.warning(&format!(
            "{} already exists, use --force to overwrite",
            path.display()
        ));
        Ok(false)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let templates_root = self.config.templates_root(&self.project_root);
        ensure_dir(&templates_root).with_context(|| {
            format!(
                "failed to create template directory {}",
                templates_root.display()
            )
        })?;
        ui.success(&format!("Template directory {}", templates_root.display()));

        let config_path = default_config_path(&self.project_root);
        if config_path.exists() && !self.may_overwrite(&config_path, ui)? {
            ui.message(&format!("Kept existing {}", config_path.display()));
            return Ok(CommandResult::success());
        }

        fs::write(&config_path, render_config(&self.config)?)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        ui.success(&format!("Wrote {}", config_path.display()));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(root: &Path, config: &PlateConfig, force: bool, ui: &mut MockUI) -> CommandResult {
        InitCommand::new(root, config, InitArgs { force })
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn creates_templates_dir_and_config() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(temp.path(), &PlateConfig::default(), false, &mut ui);

        assert!(result.success);
        assert!(temp.path().join("_templates").is_dir());
        assert_eq!(
            load_config(temp.path(), None).unwrap(),
            PlateConfig::default()
        );
    }

    #[test]
    fn persists_overridden_settings() {
        let temp = TempDir::new().unwrap();
        let mut config = PlateConfig::default();
        config.templates.local_dir = PathBuf::from("scaffolds/local");

        run(temp.path(), &config, false, &mut MockUI::new());

        assert!(temp.path().join("scaffolds/local").is_dir());
        let loaded = load_config(temp.path(), None).unwrap();
        assert_eq!(loaded.templates.local_dir, PathBuf::from("scaffolds/local"));
    }

    #[test]
    fn keeps_existing_config_when_not_interactive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".plate.yml"), "verbosity: debug\n").unwrap();
        let mut ui = MockUI::new();

        run(temp.path(), &PlateConfig::default(), false, &mut ui);

        assert!(ui.has_warning("--force"));
        assert_eq!(
            fs::read_to_string(temp.path().join(".plate.yml")).unwrap(),
            "verbosity: debug\n"
        );
    }

    #[test]
    fn force_overwrites_existing_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".plate.yml"), "verbosity: debug\n").unwrap();

        run(temp.path(), &PlateConfig::default(), true, &mut MockUI::new());

        assert_eq!(
            load_config(temp.path(), None).unwrap(),
            PlateConfig::default()
        );
    }

    #[test]
    fn interactive_confirmation_controls_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".plate.yml"), "verbosity: debug\n").unwrap();

        let mut declined = MockUI::new();
        declined.set_interactive(true);
        declined.set_confirm_response(false);
        run(temp.path(), &PlateConfig::default(), false, &mut declined);
        assert_eq!(declined.confirmations().len(), 1);
        assert!(declined.has_message("Kept existing"));

        let mut accepted = MockUI::new();
        accepted.set_interactive(true);
        accepted.set_confirm_response(true);
        run(temp.path(), &PlateConfig::default(), false, &mut accepted);
        assert!(accepted.has_success("Wrote"));
    }

    #[test]
    fn template_root_blocked_by_file_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("_templates"), "not a dir").unwrap();

        let result = InitCommand::new(temp.path(), &PlateConfig::default(), InitArgs::default())
            .execute(&mut MockUI::new());
        assert!(result.is_err());
    }
}
