//! CLI argument structures and parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pokedex_evolution::DisplayMode;

use super::styles::{AFTER_HELP, get_styles};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Pokédex CLI - look up Pokémon and their evolution chains
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version)]
#[command(about = "Pokédex - look up Pokémon and their evolution chains", long_about = None)]
#[command(styles = get_styles(), after_help = AFTER_HELP)]
pub struct Cli {
    /// Config file (default: $POKEDEX_CONFIG or ~/.pokedex/config.toml)
    #[arg(long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long = "api-url", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log verbosity
    #[arg(long = "log-level", global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Shorthand for --log-level debug
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug mode: writes ALL trace-level logs to ./debug.txt
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a Pokémon's details followed by its evolution chain
    Lookup(LookupArgs),

    /// Show only the evolution chain of a Pokémon
    #[command(visible_alias = "evo")]
    Evolution(EvolutionArgs),

    /// Read selections from stdin and redraw the evolution panel as it loads
    Watch(WatchArgs),
}

/// Sprite display flags shared by every subcommand.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DisplayArgs {
    /// Show shiny sprites
    #[arg(long)]
    pub shiny: bool,

    /// Show back sprites
    #[arg(long)]
    pub back: bool,
}

impl DisplayArgs {
    /// Flags given on the command line win over the configured defaults.
    pub fn resolve(self, defaults: DisplayMode) -> DisplayMode {
        DisplayMode {
            shiny: self.shiny || defaults.shiny,
            back: self.back || defaults.back,
        }
    }
}

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Pokémon name or national dex number
    pub query: String,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Skip the evolution chain
    #[arg(long = "no-evolution")]
    pub no_evolution: bool,
}

#[derive(Args, Debug)]
pub struct EvolutionArgs {
    /// Pokémon name or national dex number
    pub query: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub display: DisplayArgs,
}
