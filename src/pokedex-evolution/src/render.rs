//! Render target abstraction and the in-memory implementation.

use pokedex_api::Pokemon;
use pokedex_common::DisplayConfig;

use crate::{LOADING_TEXT, UNAVAILABLE_TEXT};

/// Sprite display flags for one load invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayMode {
    pub shiny: bool,
    pub back: bool,
}

impl DisplayMode {
    pub fn toggle_shiny(&mut self) {
        self.shiny = !self.shiny;
    }

    pub fn toggle_back(&mut self) {
        self.back = !self.back;
    }
}

impl From<DisplayConfig> for DisplayMode {
    fn from(config: DisplayConfig) -> Self {
        Self {
            shiny: config.shiny,
            back: config.back,
        }
    }
}

/// One rendered chain member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionEntry {
    /// Display label (the record's name)
    pub name: String,
    /// Sprite URL for the invocation's display mode, if upstream has one
    pub sprite: Option<String>,
}

impl EvolutionEntry {
    /// Build the entry for a fetched record.
    pub fn from_record(record: &Pokemon, mode: DisplayMode) -> Self {
        Self {
            name: record.name.clone(),
            sprite: record.sprite(mode.shiny, mode.back).map(str::to_string),
        }
    }
}

/// The display region the loader writes into.
///
/// The loader calls these methods only while it holds its own lock, so
/// implementations need no synchronisation of their own.
pub trait RenderTarget: Send {
    /// Replace the contents with the loading indicator.
    fn show_loading(&mut self);
    /// Remove everything, including the loading indicator.
    fn clear(&mut self);
    /// Add one entry after the existing ones.
    fn append(&mut self, entry: EvolutionEntry);
    /// Replace the contents with the fixed unavailable placeholder.
    fn show_unavailable(&mut self);
}

/// What a target currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenderState {
    #[default]
    Empty,
    Loading,
    Entries(Vec<EvolutionEntry>),
    Unavailable,
}

impl RenderState {
    /// Rendered entries; empty unless the state is `Entries`.
    pub fn entries(&self) -> &[EvolutionEntry] {
        match self {
            Self::Entries(entries) => entries,
            _ => &[],
        }
    }
}

/// A single mutation, recorded in order by [`MemoryRenderTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    Loading,
    Clear,
    Append(String),
    Unavailable,
}

/// Render target that keeps its state in memory, plus a journal of every
/// mutation applied to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderTarget {
    state: RenderState,
    journal: Vec<RenderOp>,
}

impl MemoryRenderTarget {
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn journal(&self) -> &[RenderOp] {
        &self.journal
    }
}

impl RenderTarget for MemoryRenderTarget {
    fn show_loading(&mut self) {
        self.state = RenderState::Loading;
        self.journal.push(RenderOp::Loading);
    }

    fn clear(&mut self) {
        self.state = RenderState::Entries(Vec::new());
        self.journal.push(RenderOp::Clear);
    }

    fn append(&mut self, entry: EvolutionEntry) {
        self.journal.push(RenderOp::Append(entry.name.clone()));
        match &mut self.state {
            RenderState::Entries(entries) => entries.push(entry),
            state => *state = RenderState::Entries(vec![entry]),
        }
    }

    fn show_unavailable(&mut self) {
        self.state = RenderState::Unavailable;
        self.journal.push(RenderOp::Unavailable);
    }
}

/// Plain-text rendering of a state, one line per entry.
pub fn render_text(state: &RenderState) -> String {
    match state {
        RenderState::Empty => String::new(),
        RenderState::Loading => LOADING_TEXT.to_string(),
        RenderState::Unavailable => UNAVAILABLE_TEXT.to_string(),
        RenderState::Entries(entries) => entries
            .iter()
            .enumerate()
            .map(|(i, entry)| match &entry.sprite {
                Some(sprite) => format!("{}. {}  {}", i + 1, entry.name, sprite),
                None => format!("{}. {}", i + 1, entry.name),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
