//! Command dispatch and execution handlers.

use anyhow::{Context, Result};
use pokedex_common::PokedexConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::args::{Cli, Commands, LogLevel};
use crate::evolution_cmd::run_evolution;
use crate::lookup_cmd::run_lookup;
use crate::watch_cmd::run_watch;

/// Environment variable consulted for the log level.
pub const POKEDEX_LOG_LEVEL_ENV: &str = "POKEDEX_LOG_LEVEL";

/// Dispatch a CLI command to its handler.
pub async fn dispatch_command(cli: Cli, config: PokedexConfig) -> Result<()> {
    match cli.command {
        Commands::Lookup(args) => run_lookup(&config, args).await,
        Commands::Evolution(args) => run_evolution(&config, args).await,
        Commands::Watch(args) => run_watch(&config, args).await,
    }
}

/// Load configuration and apply command-line overrides on top.
pub fn load_config(cli: &Cli) -> Result<PokedexConfig> {
    let mut config =
        PokedexConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.set_api_base_url(url);
    }
    Ok(config)
}

/// Report which configuration was loaded. Runs once the subscriber is
/// installed, since configuration is read before logging is set up.
pub fn log_loaded_config(cli: &Cli, config: &PokedexConfig) {
    match PokedexConfig::resolve_path(cli.config.as_deref()) {
        Some(path) => debug!(
            path = %path.display(),
            found = path.exists(),
            api_base_url = %config.api_base_url,
            debounce_ms = config.debounce_ms,
            "Configuration loaded"
        ),
        None => debug!(
            api_base_url = %config.api_base_url,
            debounce_ms = config.debounce_ms,
            "Configuration loaded from defaults"
        ),
    }
}

/// Filter for the stderr subscriber. A valid `RUST_LOG` wins; otherwise the
/// resolved level applies to every target.
pub fn build_env_filter(log_level: LogLevel, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(log_level.as_filter_str()))
}

/// Pick the log level: `-v`, then `--log-level`, then `POKEDEX_LOG_LEVEL`,
/// then the config file. Unparseable values are skipped.
pub fn resolve_log_level(cli: &Cli, config: &PokedexConfig) -> LogLevel {
    pick_log_level(
        cli.verbose,
        cli.log_level,
        std::env::var(POKEDEX_LOG_LEVEL_ENV).ok().as_deref(),
        config.log_level.as_deref(),
    )
}

fn pick_log_level(
    verbose: bool,
    flag: Option<LogLevel>,
    env: Option<&str>,
    config: Option<&str>,
) -> LogLevel {
    if verbose {
        return LogLevel::Debug;
    }
    flag.or_else(|| env.and_then(LogLevel::from_str_loose))
        .or_else(|| config.and_then(LogLevel::from_str_loose))
        .unwrap_or_default()
}
