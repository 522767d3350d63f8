//! CLI styling for the help output.

use clap::builder::styling::{AnsiColor, Effects, Styles};

/// Help theme: bold cyan headers, green literals, yellow placeholders.
pub fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
        .valid(AnsiColor::Cyan.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

/// After-help section documenting environment variables and paths.
pub const AFTER_HELP: &str = "\
QUICK START
    pokedex lookup pikachu            Show a Pokémon and its evolution chain
    pokedex evolution 4 --shiny       Show only the evolution chain
    pokedex watch                     Read selections from stdin

ENVIRONMENT VARIABLES
    POKEDEX_HOME         Override the home directory (default: ~/.pokedex)
    POKEDEX_CONFIG       Config file path (default: $POKEDEX_HOME/config.toml)
    POKEDEX_API_URL      API base URL (default: https://pokeapi.co/api/v2)
    POKEDEX_DEBOUNCE_MS  Debounce window for `watch` in milliseconds
    POKEDEX_LOG_LEVEL    Log verbosity (error, warn, info, debug, trace)";
