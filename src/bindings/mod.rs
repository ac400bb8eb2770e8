//! Gesture assignment table.
//!
//! Per chart type, a sparse mapping (operation, region) -> gesture kind,
//! with at-most-one-operation-per-gesture-per-region-column uniqueness
//! enforced on every edit.

mod table;

pub use table::{BindingSnapshot, BindingTable};
