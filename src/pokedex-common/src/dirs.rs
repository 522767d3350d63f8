//! Application home directory.
//!
//! `~/.pokedex` on every platform, overridable with `POKEDEX_HOME`.

use std::path::PathBuf;

/// Home directory name under the user's home
pub const HOME_DIR_NAME: &str = ".pokedex";

/// Environment variable overriding the home directory.
pub const POKEDEX_HOME_ENV: &str = "POKEDEX_HOME";

/// Resolve the Pokedex home directory.
///
/// Relative `POKEDEX_HOME` values are resolved against the current directory.
pub fn get_pokedex_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(POKEDEX_HOME_ENV) {
        if !home.is_empty() {
            let home = PathBuf::from(home);
            if home.is_relative() {
                let cwd = std::env::current_dir().ok()?;
                return Some(cwd.join(home));
            }
            return Some(home);
        }
    }

    dirs::home_dir().map(|h| h.join(HOME_DIR_NAME))
}

/// Default config file path inside the home directory.
pub fn default_config_file() -> Option<PathBuf> {
    get_pokedex_home().map(|home| home.join("config.toml"))
}
