//! Upstream record source.

use std::sync::Arc;

use async_trait::async_trait;
use pokedex_api::{ApiError, EvolutionChain, PokeApiClient, Pokemon, Species};
use tokio_util::sync::CancellationToken;

/// The three lookups a load sequence performs.
///
/// Implementations must return [`ApiError::Canceled`] once `cancel` fires.
#[async_trait]
pub trait EvolutionSource: Send + Sync {
    async fn species(&self, id: &str, cancel: &CancellationToken) -> Result<Species, ApiError>;

    async fn evolution_chain(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<EvolutionChain, ApiError>;

    async fn pokemon(&self, name: &str, cancel: &CancellationToken) -> Result<Pokemon, ApiError>;
}

#[async_trait]
impl EvolutionSource for PokeApiClient {
    async fn species(&self, id: &str, cancel: &CancellationToken) -> Result<Species, ApiError> {
        PokeApiClient::species(self, id, cancel).await
    }

    async fn evolution_chain(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<EvolutionChain, ApiError> {
        PokeApiClient::evolution_chain(self, url, cancel).await
    }

    async fn pokemon(&self, name: &str, cancel: &CancellationToken) -> Result<Pokemon, ApiError> {
        PokeApiClient::pokemon(self, name, cancel).await
    }
}

#[async_trait]
impl<T: EvolutionSource + ?Sized> EvolutionSource for Arc<T> {
    async fn species(&self, id: &str, cancel: &CancellationToken) -> Result<Species, ApiError> {
        (**self).species(id, cancel).await
    }

    async fn evolution_chain(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<EvolutionChain, ApiError> {
        (**self).evolution_chain(url, cancel).await
    }

    async fn pokemon(&self, name: &str, cancel: &CancellationToken) -> Result<Pokemon, ApiError> {
        (**self).pokemon(name, cancel).await
    }
}
