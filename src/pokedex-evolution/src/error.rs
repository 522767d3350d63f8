//! Error types for the evolution loader.

use pokedex_api::ApiError;
use thiserror::Error;

/// Why a load sequence ended early.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A newer sequence cancelled this one
    #[error("Load canceled")]
    Canceled,

    /// The selection changed after this sequence started
    #[error("Selection changed while loading")]
    Stale,

    #[error("No evolution chain referenced by species {selection}")]
    MissingChain { selection: String },

    #[error(transparent)]
    Api(ApiError),
}

impl LoadError {
    /// Canceled and stale sequences end without any user-visible effect.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Canceled | Self::Stale)
    }
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        if err.is_canceled() {
            Self::Canceled
        } else {
            Self::Api(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canceled_api_error_maps_to_silent() {
        let err = LoadError::from(ApiError::Canceled);
        assert!(matches!(err, LoadError::Canceled));
        assert!(err.is_silent());
        assert!(LoadError::Stale.is_silent());
    }

    #[test]
    fn test_other_errors_are_reported() {
        let err = LoadError::from(ApiError::NotFound {
            url: "https://pokeapi.co/api/v2/pokemon-species/0/".into(),
        });
        assert!(!err.is_silent());
        assert!(err.to_string().contains("pokemon-species/0"));

        let err = LoadError::MissingChain {
            selection: "132".into(),
        };
        assert!(!err.is_silent());
    }
}
