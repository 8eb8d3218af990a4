//! Non-interactive UI for pipes, CI and scripted use.

use crate::error::Result;

use super::{OutputMode, PlateTheme, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Confirmations are never asked; the default answer is used.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: PlateTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: PlateTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        tracing::debug!("not asking '{}' in non-interactive mode, using {}", question, default);
        Ok(default)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
