//! `pokedex watch`: interactive selection from stdin.
//!
//! Each line selects a Pokémon; the evolution panel is redrawn on stdout as
//! the loader renders. Rapid input is debounced by the loader, so only the
//! last of several quick selections is fetched.

use std::io;

use anyhow::{Context, Result};
use pokedex_api::PokeApiClient;
use pokedex_common::PokedexConfig;
use pokedex_evolution::{EvolutionLoader, Selection};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::args::WatchArgs;
use crate::evolution_cmd::wait_for_finish;
use crate::lookup_cmd::fetch_record;
use crate::panel::PanelTarget;

/// One line of watch input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchInput {
    Quit,
    ToggleShiny,
    ToggleBack,
    Unknown(String),
    Query(String),
}

impl WatchInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            ":quit" | ":q" => Self::Quit,
            ":shiny" => Self::ToggleShiny,
            ":back" => Self::ToggleBack,
            cmd if cmd.starts_with(':') => Self::Unknown(cmd.to_string()),
            query => Self::Query(query.to_string()),
        }
    }
}

pub async fn run_watch(config: &PokedexConfig, args: WatchArgs) -> Result<()> {
    let api = PokeApiClient::from_config(config)?;
    let mut mode = args.display.resolve(config.display.into());

    let (tx, mut events) = mpsc::unbounded_channel();
    let loader = EvolutionLoader::with_events(
        api.clone(),
        PanelTarget::live(io::stdout()),
        config.debounce(),
        tx,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current: Option<Selection> = None;
    let mut last: Option<u64> = None;

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match WatchInput::parse(&line) {
            WatchInput::Quit => return Ok(()),
            toggle @ (WatchInput::ToggleShiny | WatchInput::ToggleBack) => {
                match toggle {
                    WatchInput::ToggleShiny => mode.toggle_shiny(),
                    _ => mode.toggle_back(),
                }
                debug!(?mode, "Display mode changed");
                // Reload so the sprites match the new mode.
                if let Some(selection) = &current {
                    last = Some(loader.load(selection.clone(), mode));
                }
            }
            WatchInput::Unknown(cmd) => {
                eprintln!("Unknown command {cmd} (try :shiny, :back or :quit)");
            }
            WatchInput::Query(query) => {
                let selection: Selection = match query.parse() {
                    Ok(selection) => selection,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };
                match fetch_record(&api, &selection, &CancellationToken::new()).await {
                    Ok(record) => {
                        println!("{} {}", record.name, record.display_number());
                        let selection = Selection::Id(record.id);
                        last = Some(loader.load(selection.clone(), mode));
                        current = Some(selection);
                    }
                    Err(e) => eprintln!("{e:#}"),
                }
            }
        }
    }

    // Input closed: let the last selection finish rendering.
    if let Some(invocation) = last {
        wait_for_finish(&mut events, invocation).await?;
    }
    Ok(())
}
