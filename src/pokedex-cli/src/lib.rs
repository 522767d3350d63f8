//! Pokédex CLI library.
//!
//! - `cli/` - argument parsing and dispatch
//! - `panel` - terminal rendering of records and the evolution panel
//! - `*_cmd.rs` - command implementations

pub mod cli;
pub mod evolution_cmd;
pub mod lookup_cmd;
pub mod panel;
pub mod watch_cmd;

pub use cli::{
    Cli, Commands, LogLevel, build_env_filter, dispatch_command, load_config, log_loaded_config,
    resolve_log_level,
};
