//! Client for the public Pokémon data API.
//!
//! Only the read endpoints the evolution loader and the lookup command need
//! are modelled: species, evolution chains and Pokémon records. Every request
//! takes a [`CancellationToken`](tokio_util::sync::CancellationToken) so a
//! superseded caller can abandon it.

mod client;
mod models;

pub use client::PokeApiClient;
pub use models::{
    ApiResource, Artwork, ChainLink, EvolutionChain, NamedResource, OtherSprites, Pokemon,
    PokemonAbility, PokemonMove, PokemonStat, PokemonType, Species, Sprites, format_stat_name,
};

/// Error types for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request canceled")]
    Canceled,

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// True when the request was abandoned because its token was cancelled.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// True for a 404 from upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
