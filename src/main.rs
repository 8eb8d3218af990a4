//! Plate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use plate::cli::{Cli, CommandDispatcher};
use plate::config::{load_config, Verbosity};
use plate::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. The configured verbosity
fn init_tracing(debug: bool, verbosity: Verbosity) {
    let filter = if debug {
        EnvFilter::new("plate=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(true, output_mode);

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut config = match load_config(&project_root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(cli.debug, Verbosity::default());
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    cli.apply_overrides(&mut config);
    init_tracing(cli.debug, config.verbosity);

    tracing::debug!("Plate starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new(project_root, config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            tracing::debug!("command failed ({})", e.kind());
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
