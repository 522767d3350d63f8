//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `styles` - ANSI styling for help output
//! - `handlers` - Command execution handlers

pub mod args;
pub mod handlers;
pub mod styles;

pub use args::{Cli, Commands, DisplayArgs, LogLevel};
pub use handlers::{
    build_env_filter, dispatch_command, load_config, log_loaded_config, resolve_log_level,
};
pub use styles::{AFTER_HELP, get_styles};
