//! Command-line front end for swatch.
//!
//! The binary is a thin wrapper: [`Cli`] describes the arguments and [`run`]
//! executes a parsed command, returning the text to print. Keeping output as a
//! `String` lets the commands be tested without spawning a process.

mod preview;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swatch::{FileStore, InlineStyle, SwitcherConfig, ThemeName, ThemeRegistry, ThemeSwitcher};
use tracing::debug;

pub use preview::render_preview;

/// Preview, export and switch CSS colour themes.
#[derive(Debug, Parser)]
#[command(name = "swatch", version, about)]
pub struct Cli {
    /// YAML configuration file (storage_key, default_theme).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in themes.
    List,

    /// Print the CSS for a theme. Unknown names print the default theme.
    Css {
        /// Theme identifier.
        name: String,

        /// Print a `style` attribute body instead of a `:root` rule.
        #[arg(long)]
        inline: bool,
    },

    /// Show a theme's palette as terminal colour swatches.
    Show {
        /// Theme identifier.
        name: ThemeName,
    },

    /// Apply a theme and persist the choice in a state file.
    Apply {
        /// Theme identifier. Any string is accepted and persisted.
        name: String,

        /// JSON state file standing in for browser storage.
        #[arg(long, value_name = "FILE")]
        state: PathBuf,
    },

    /// Pick the initial theme (server value, else stored, else default) and apply it.
    Init {
        /// Theme supplied by the hosting server.
        #[arg(long)]
        server: Option<String>,

        /// JSON state file standing in for browser storage.
        #[arg(long, value_name = "FILE")]
        state: PathBuf,
    },
}

/// Loads the configuration file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<SwitcherConfig> {
    let Some(path) = path else {
        return Ok(SwitcherConfig::default());
    };
    let yaml = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SwitcherConfig::from_yaml_str(&yaml)
        .with_context(|| format!("failed to load config {}", path.display()))
}

/// Executes a parsed command and returns its output.
pub fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::List => Ok(list(&config)),
        Command::Css { name, inline } => {
            let theme = ThemeRegistry::resolve(&name, config.default_theme);
            Ok(if inline {
                format!("{}\n", theme.inline_style())
            } else {
                theme.to_css()
            })
        }
        Command::Show { name } => render_preview(ThemeRegistry::get(name)),
        Command::Apply { name, state } => {
            let mut switcher = switcher(config, &state);
            let applied = switcher
                .apply(&name)
                .with_context(|| format!("failed to apply theme '{name}'"))?;
            Ok(report(applied, switcher.sink()))
        }
        Command::Init { server, state } => {
            let mut switcher = switcher(config, &state);
            let applied = switcher
                .init(server.as_deref())
                .context("failed to initialise theme")?;
            Ok(report(applied, switcher.sink()))
        }
    }
}

fn switcher(config: SwitcherConfig, state: &Path) -> ThemeSwitcher<InlineStyle, FileStore> {
    ThemeSwitcher::with_config(InlineStyle::new(), FileStore::new(state), config)
}

fn list(config: &SwitcherConfig) -> String {
    ThemeName::ALL
        .iter()
        .map(|name| {
            if *name == config.default_theme {
                format!("{name} (default)\n")
            } else {
                format!("{name}\n")
            }
        })
        .collect()
}

fn report(applied: ThemeName, style: &InlineStyle) -> String {
    format!("applied {applied}\n{}\n", style.css_text())
}
