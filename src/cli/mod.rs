//! Command-line interface for Plate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, InitArgs, ListArgs, NewArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
