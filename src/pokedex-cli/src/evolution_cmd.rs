//! `pokedex evolution`: load one evolution chain and print the final panel.

use std::io;
use std::time::Duration;

use anyhow::{Result, bail};
use pokedex_api::PokeApiClient;
use pokedex_common::PokedexConfig;
use pokedex_evolution::{
    DisplayMode, EvolutionLoader, InvocationState, LoaderEvent, RenderState, Selection,
};
use tokio::sync::mpsc;

use crate::cli::args::EvolutionArgs;
use crate::panel::{PanelTarget, format_panel};

pub async fn run_evolution(config: &PokedexConfig, args: EvolutionArgs) -> Result<()> {
    let selection: Selection = args.query.parse()?;
    let api = PokeApiClient::from_config(config)?;
    let mode = args.display.resolve(config.display.into());

    let state = load_panel(api, selection, mode).await?;
    print!("{}", format_panel(&state));
    Ok(())
}

/// Run a single load to completion and return what it rendered.
///
/// There is nothing to debounce for a one-shot load, so the window is zero.
pub async fn load_panel(
    api: PokeApiClient,
    selection: Selection,
    mode: DisplayMode,
) -> Result<RenderState> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let loader =
        EvolutionLoader::with_events(api, PanelTarget::quiet(io::sink()), Duration::ZERO, tx);

    let invocation = loader.load(selection, mode);
    wait_for_finish(&mut rx, invocation).await?;
    Ok(loader.with_target(|target| target.state().clone()))
}

/// Wait until `invocation` reaches a terminal state.
pub(crate) async fn wait_for_finish(
    events: &mut mpsc::UnboundedReceiver<LoaderEvent>,
    invocation: u64,
) -> Result<InvocationState> {
    while let Some(event) = events.recv().await {
        if let LoaderEvent::Finished {
            invocation: finished,
            state,
        } = event
        {
            if finished == invocation {
                return Ok(state);
            }
        }
    }
    bail!("Evolution loader stopped before invocation {invocation} finished")
}
