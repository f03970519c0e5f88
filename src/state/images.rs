// Per-item image load state.
// Tracks each photo's image lifecycle; loaded and error are terminal.

use std::collections::HashMap;

/// Load status of one item's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    Error,
}

impl ImageLoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageLoadState::Loading)
    }
}

/// Image fetch lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSignal {
    Start,
    Success,
    Failure,
}

/// Image states keyed by photo id. Absent ids read as `Loading`.
#[derive(Debug, Default)]
pub struct ImageStates {
    states: HashMap<String, ImageLoadState>,
}

impl ImageStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for an id.
    pub fn get(&self, id: &str) -> ImageLoadState {
        self.states.get(id).copied().unwrap_or_default()
    }

    /// Apply a lifecycle signal. Returns the resulting state.
    pub fn apply(&mut self, id: &str, signal: ImageSignal) -> ImageLoadState {
        let state = self.states.entry(id.to_string()).or_default();
        if !state.is_terminal() {
            *state = match signal {
                ImageSignal::Start => ImageLoadState::Loading,
                ImageSignal::Success => ImageLoadState::Loaded,
                ImageSignal::Failure => ImageLoadState::Error,
            };
        }
        *state
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
