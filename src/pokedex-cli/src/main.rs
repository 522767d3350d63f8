//! Pokédex CLI - Main entry point.
//!
//! - `lookup` - Pokémon details followed by the evolution chain
//! - `evolution` - the evolution chain only
//! - `watch` - interactive selection from stdin

use anyhow::Result;
use clap::Parser;

use pokedex_cli::{
    Cli, build_env_filter, dispatch_command, load_config, log_loaded_config, resolve_log_level,
};

/// Guard that ensures debug log file is properly flushed when dropped.
struct DebugLogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Set up debug file logging that writes ALL trace-level logs to ./debug.txt.
fn setup_debug_file_logging() -> Result<DebugLogGuard> {
    use std::fs::File;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let debug_file_path = std::env::current_dir()?.join("debug.txt");

    let file = File::create(&debug_file_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create debug.txt: {}. Check write permissions.",
            e
        )
    })?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new("trace"))
        .with(file_layer)
        .init();

    eprintln!(
        "Debug mode enabled: logging to {}",
        debug_file_path.display()
    );

    Ok(DebugLogGuard { _guard: guard })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _debug_guard = if cli.debug {
        Some(setup_debug_file_logging()?)
    } else {
        None
    };

    let config = load_config(&cli)?;

    // Stdout carries the panels, so logs go to stderr.
    if !cli.debug {
        let log_level = resolve_log_level(&cli, &config);
        let rust_log = std::env::var("RUST_LOG").ok();

        tracing_subscriber::fmt()
            .with_env_filter(build_env_filter(log_level, rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .init();
    }
    log_loaded_config(&cli, &config);

    dispatch_command(cli, config).await
}
