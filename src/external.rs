//! Interfaces to the embedding UI.
//!
//! Rendering and name prompts are external collaborators: the core tells
//! the embedding *when* to redraw or ask for a name, never *how*.

use crate::types::ChartType;

/// Re-render collaborator. Invoked with the active chart type after any
/// successful mutation; the implementation clears and redraws from the
/// current dataset.
pub trait RenderSink {
    fn render(&mut self, chart: ChartType);
}

/// Headless sink for tests and non-visual embeddings.
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn render(&mut self, _chart: ChartType) {}
}

/// Supplies user-entered names for structural add operations (new bar,
/// new pie section, new scatter category). Returning `None` means the
/// prompt was dismissed and the operation becomes a no-op.
pub trait NameSource {
    fn request_name(&mut self, prompt: &str, default_name: &str) -> Option<String>;
}

/// Name source that always dismisses the prompt.
#[derive(Debug, Default)]
pub struct NullNames;

impl NameSource for NullNames {
    fn request_name(&mut self, _prompt: &str, _default_name: &str) -> Option<String> {
        None
    }
}
