//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with the resolved configuration.

pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod list;
pub mod new;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
