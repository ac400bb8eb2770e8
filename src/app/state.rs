//! Application state - the AppState struct definition.

use crate::bindings::BindingTable;
use crate::data::DatasetStore;
use crate::external::{NameSource, NullNames, NullRender, RenderSink};
use crate::input::GestureRecognizer;
use crate::ops::ScratchTable;
use crate::storage::KeyValueStore;
use crate::types::ChartType;

/// Everything the dispatch core owns.
///
/// One instance per embedding. The recognizer and scratch table are both
/// scoped to the active chart; switching charts drops their transient
/// state (see `set_active_chart`).
pub struct AppState {
    /// The chart whose dataset fired gestures mutate
    pub active_chart: ChartType,
    pub data: DatasetStore,
    pub bindings: BindingTable,
    pub recognizer: GestureRecognizer,
    pub(super) scratch: ScratchTable,
    pub(super) store: Box<dyn KeyValueStore>,
    pub(super) render: Box<dyn RenderSink>,
    pub(super) names: Box<dyn NameSource>,
}

impl AppState {
    /// Swap in the embedding's re-render collaborator.
    pub fn set_render(&mut self, render: Box<dyn RenderSink>) {
        self.render = render;
    }

    /// Swap in the embedding's name-prompt collaborator.
    pub fn set_names(&mut self, names: Box<dyn NameSource>) {
        self.names = names;
    }

    /// The backing snapshot store, for inspection.
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Whether a continuous gesture currently holds cached originals.
    pub fn has_preview_state(&self) -> bool {
        !self.scratch.is_empty()
    }

    pub(super) fn null_collaborators() -> (Box<dyn RenderSink>, Box<dyn NameSource>) {
        (Box::new(NullRender), Box::new(NullNames))
    }
}
