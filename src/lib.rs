//! Gesture-to-mutation dispatch core for touch-driven chart editing.
//!
//! The crate connects recognized touch gestures (tap, double tap, hold, pan,
//! pinch, swipe) to named data-mutation operations on five chart datasets
//! (bar, pie, line, heatmap, scatterplot). Users bind gestures to operations
//! per interactive region; performing a bound gesture on a region mutates the
//! underlying dataset, triggers a re-render, and writes the dataset snapshot
//! through to a key-value store.
//!
//! Rendering, the binding-matrix UI, and low-level pointer recognition are
//! external collaborators; the crate consumes them through the traits in
//! [`external`], [`storage`], and the raw-event vocabulary in [`input`].
//!
//! ## Modules
//!
//! - `types` - chart types, gesture kinds, regions, operation catalogs
//! - `data` - dataset store, records, persisted snapshot, errors
//! - `input` - gesture recognizer adapter (anchors, quantization, throttling)
//! - `bindings` - gesture assignment table with column uniqueness
//! - `ops` - per-chart mutation operations and the preview scratch table
//! - `app` - application state and the dispatch engine
//! - `storage` - key-value snapshot stores (in-memory and on-disk)

pub mod app;
pub mod bindings;
pub mod constants;
pub mod data;
pub mod external;
pub mod input;
pub mod ops;
pub mod storage;
pub mod types;

pub use app::AppState;
pub use bindings::BindingTable;
pub use data::DatasetStore;
pub use input::{ElementId, GestureRecognizer, RawGesture};
pub use types::{ChartType, GestureKind, Operation, Region};

/// Initialize tracing output for embedding binaries.
///
/// Respects `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
