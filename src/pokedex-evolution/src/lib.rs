//! Evolution chain loader.
//!
//! Given a [`Selection`], the loader fetches the species record, follows its
//! evolution chain reference, walks the chain along the first branch and
//! renders one [`EvolutionEntry`] per member into a [`RenderTarget`].
//!
//! Every [`EvolutionLoader::load`] call restarts a debounce window; only the
//! last call inside the window starts network activity. Starting a sequence
//! cancels the previous one, and every render mutation is preceded by a
//! staleness check, so only the most recent selection ever reaches the
//! target.
//!
//! ```rust,ignore
//! let api = PokeApiClient::from_config(&config)?;
//! let loader = EvolutionLoader::new(api, MemoryRenderTarget::default(), config.debounce());
//! loader.load("1".parse()?, DisplayMode::default());
//! ```

mod chain;
mod debounce;
mod error;
mod loader;
mod render;
mod selection;
mod source;

pub use chain::walk_first_branch;
pub use debounce::Debouncer;
pub use error::LoadError;
pub use loader::{EvolutionLoader, InvocationState, LoaderEvent};
pub use render::{
    DisplayMode, EvolutionEntry, MemoryRenderTarget, RenderOp, RenderState, RenderTarget,
    render_text,
};
pub use selection::{Selection, SelectionError};
pub use source::EvolutionSource;

/// Text shown while a sequence is fetching its chain.
pub const LOADING_TEXT: &str = "Loading...";

/// Text shown when a sequence failed for any reason other than cancellation.
pub const UNAVAILABLE_TEXT: &str = "No evolution data available.";
