//! Common utilities shared across Pokedex crates.

pub mod config;
pub mod dirs;
pub mod http_client;

pub use config::{
    ConfigError, ConfigResult, DEFAULT_API_BASE_URL, DEFAULT_DEBOUNCE_MS, DisplayConfig,
    PokedexConfig,
};
pub use dirs::{HOME_DIR_NAME, get_pokedex_home};
pub use http_client::{
    DEFAULT_TIMEOUT, USER_AGENT, create_client_builder, create_client_with_timeout,
    create_default_client,
};
