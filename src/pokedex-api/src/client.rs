//! Pokémon API client implementation

use pokedex_common::{
    DEFAULT_TIMEOUT, PokedexConfig, create_client_with_timeout, create_default_client,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::models::{EvolutionChain, Pokemon, Species};
use crate::{ApiError, Result};

/// Client for the Pokémon API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Create a client for `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &PokedexConfig) -> Result<Self> {
        let timeout = config.request_timeout();
        let client = if timeout == DEFAULT_TIMEOUT {
            create_default_client()
        } else {
            create_client_with_timeout(timeout)
        }
        .map_err(ApiError::Client)?;
        Ok(Self::new(config.api_base_url.clone(), client))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn species_url(&self, id: &str) -> String {
        format!("{}/pokemon-species/{}/", self.base_url, id)
    }

    pub fn pokemon_url(&self, id: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, id)
    }

    /// Fetch a species record by id or name.
    pub async fn species(&self, id: &str, cancel: &CancellationToken) -> Result<Species> {
        self.get_json(&self.species_url(id), cancel).await
    }

    /// Fetch an evolution chain by the absolute URL a species references.
    pub async fn evolution_chain(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<EvolutionChain> {
        self.get_json(url, cancel).await
    }

    /// Fetch a Pokémon record by name or id.
    pub async fn pokemon(&self, id: &str, cancel: &CancellationToken) -> Result<Pokemon> {
        self.get_json(&self.pokemon_url(id), cancel).await
    }

    /// GET `url` and decode JSON, racing the request against `cancel`.
    ///
    /// A request whose token fires first is dropped and its result discarded.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<T> {
        if cancel.is_cancelled() {
            return Err(ApiError::Canceled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(url, "Request canceled");
                Err(ApiError::Canceled)
            }
            result = self.fetch_json(url) => result,
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}
