//! Terminal output: Pokémon details and the evolution panel.

use std::io::Write;

use pokedex_api::Pokemon;
use pokedex_evolution::{
    EvolutionEntry, MemoryRenderTarget, RenderState, RenderTarget, render_text,
};
use tracing::warn;

/// Number of moves shown by `lookup`.
pub const MOVE_LIMIT: usize = 10;

const PANEL_HEADER: &str = "Evolution Chain";

/// Format the details section printed by `lookup`.
pub fn format_record(record: &Pokemon) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", record.name, record.display_number()));
    if let Some(artwork) = record.artwork() {
        out.push_str(&format!("Artwork: {artwork}\n"));
    }
    out.push_str(&format!("Types: {}\n", record.type_names().join(", ")));
    out.push_str(&format!("Abilities: {}\n", record.ability_names().join(", ")));

    out.push_str("Stats:\n");
    for (label, value) in record.stat_lines() {
        out.push_str(&format!("  {label:<12}{value:>4}\n"));
    }

    let moves = record.move_names(MOVE_LIMIT);
    if !moves.is_empty() {
        out.push_str(&format!("Moves: {}\n", moves.join(", ")));
    }
    out
}

/// Format the evolution panel for a render state.
pub fn format_panel(state: &RenderState) -> String {
    format!("{PANEL_HEADER}\n{}\n", render_text(state))
}

/// Render target that mirrors every mutation into memory and, when live,
/// redraws the panel to `out` after each one.
pub struct PanelTarget<W> {
    memory: MemoryRenderTarget,
    out: W,
    live: bool,
}

impl<W: Write + Send> PanelTarget<W> {
    /// Redraw on every mutation.
    pub fn live(out: W) -> Self {
        Self {
            memory: MemoryRenderTarget::default(),
            out,
            live: true,
        }
    }

    /// Only keep state; the caller prints the final panel.
    pub fn quiet(out: W) -> Self {
        Self {
            memory: MemoryRenderTarget::default(),
            out,
            live: false,
        }
    }

    pub fn state(&self) -> &RenderState {
        self.memory.state()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn redraw(&mut self) {
        if !self.live {
            return;
        }
        let panel = format_panel(self.memory.state());
        if let Err(e) = self.out.write_all(panel.as_bytes()).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to draw evolution panel");
        }
    }
}

impl<W: Write + Send> RenderTarget for PanelTarget<W> {
    fn show_loading(&mut self) {
        self.memory.show_loading();
        self.redraw();
    }

    fn clear(&mut self) {
        self.memory.clear();
        self.redraw();
    }

    fn append(&mut self, entry: EvolutionEntry) {
        self.memory.append(entry);
        self.redraw();
    }

    fn show_unavailable(&mut self) {
        self.memory.show_unavailable();
        self.redraw();
    }
}
