//! `pokedex lookup`: print a Pokémon's details, then its evolution chain.

use anyhow::{Context, Result, bail};
use pokedex_api::{PokeApiClient, Pokemon};
use pokedex_common::PokedexConfig;
use pokedex_evolution::Selection;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::args::LookupArgs;
use crate::evolution_cmd::load_panel;
use crate::panel::{format_panel, format_record};

pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found! Please check the spelling and try again.";

pub async fn run_lookup(config: &PokedexConfig, args: LookupArgs) -> Result<()> {
    let selection: Selection = args.query.parse()?;
    let api = PokeApiClient::from_config(config)?;

    let record = fetch_record(&api, &selection, &CancellationToken::new()).await?;
    print!("{}", format_record(&record));

    if args.no_evolution {
        return Ok(());
    }

    let mode = args.display.resolve(config.display.into());
    let state = load_panel(api, Selection::Id(record.id), mode).await?;
    println!();
    print!("{}", format_panel(&state));
    Ok(())
}

/// Resolve a selection to its Pokémon record.
pub async fn fetch_record(
    api: &PokeApiClient,
    selection: &Selection,
    cancel: &CancellationToken,
) -> Result<Pokemon> {
    debug!(%selection, "Fetching Pokémon");
    match api.pokemon(&selection.to_string(), cancel).await {
        Ok(record) => Ok(record),
        Err(e) if e.is_not_found() => bail!(NOT_FOUND_MESSAGE),
        Err(e) => Err(e).with_context(|| format!("Failed to fetch Pokémon '{selection}'")),
    }
}
