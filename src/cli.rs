// CLI module - command-line argument parsing and handlers
//
// Provides subcommands next to the interactive editor:
// - preview: Print the preview of the sample recipe
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::editor::Editor;
use crate::recipe::Recipe;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Recipe Editor - terminal editor for structured recipes
#[derive(Parser)]
#[command(name = "recipe-editor")]
#[command(version = VERSION)]
#[command(about = "Terminal editor for structured recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the preview of the sample recipe and exit
    Preview,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Whether this invocation runs the interactive editor
    pub fn runs_tui(&self) -> bool {
        self.command.is_none()
    }
}

/// Handle `config` commands, which run before logging is set up.
/// Returns true if a command was handled (exit after).
pub fn handle_config_command(cli: &Cli) -> Result<bool> {
    let Some(Commands::Config { show, reset, path }) = cli.command else {
        return Ok(false);
    };

    if path {
        handle_config_path()?;
    } else if show {
        handle_config_show()?;
    } else if reset {
        handle_config_reset()?;
    } else {
        // No flag provided, show help
        println!("Usage: recipe-editor config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    Ok(true)
}

/// Print the plain-text preview of the sample recipe
pub fn handle_preview() -> Result<()> {
    let editor = Editor::new(Recipe::sample());
    let text = editor.preview().to_plain_text();
    tracing::debug!("Printing preview of {:?}", editor.recipe().id);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text)
        .and_then(|_| stdout.flush())
        .context("Failed to write preview")
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        print!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read answer")?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}
