// Recipe Editor - terminal editor for structured recipes
//
// Edits one recipe document (id, title, components with ingredients and
// steps, optional notes) with a live preview beside the form.
//
// Architecture:
// - Recipe: the document model and its serde field-presence rules
// - Editor: the only owner and mutator of the document
// - Preview: pure projection of the document into display lines
// - TUI (ratatui): form pane, preview pane, logs panel, synchronous loop
// - Config/Theme: TOML config file with env overrides, bundled themes

mod cli;
mod config;
mod editor;
mod logging;
mod preview;
mod recipe;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LogRotation, LoggingConfig};
use editor::Editor;
use logging::{LogBuffer, TuiLogLayer};
use recipe::Recipe;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config commands run before logging (config --show, --reset, --path)
    if cli::handle_config_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::load()?;

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // In TUI mode: capture logs to buffer (prevents garbling the display)
    // In headless mode: output logs to stderr
    // File logging: optionally write JSON to rotating log files as well
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("recipe_editor={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_mode = cli.runs_tui();

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let (file_writer, _file_guard) = match file_writer(&config.logging) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_mode.then(|| TuiLogLayer::new(log_buffer.clone())))
        .with((!tui_mode).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .with(file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
        }))
        .init();

    tracing::debug!("Loaded configuration, theme {}", config.theme);

    match cli.command {
        Some(Commands::Preview) => cli::handle_preview(),
        Some(Commands::Config { .. }) => Ok(()),
        None => tui::run_tui(Editor::new(Recipe::sample()), &config, log_buffer),
    }
}

/// Non-blocking rolling file writer, if file logging is enabled
fn file_writer(logging: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    // Fall back to non-file logging when the directory is unusable
    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    };

    // Writes happen in a background thread
    Some(tracing_appender::non_blocking(file_appender))
}
