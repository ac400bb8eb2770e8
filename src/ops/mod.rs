//! Per-chart mutation operation sets.
//!
//! Each operation is a function from (dataset, gesture payload) to an
//! in-place mutation. Dispatch is an exhaustive `match` over the closed
//! operation enums. Every operation returns whether it applied; a missing
//! target, duplicate natural key, or boundary condition is a no-op, never
//! an error.
//!
//! ## Preview discipline
//!
//! Continuous gestures follow one state machine per record:
//! `Idle -> Previewing` on the first preview (pre-gesture value cached in
//! the [`ScratchTable`]), repeated previews recompute from that cached
//! original, and the final update clears the cache, leaving the value where
//! the last preview put it. Invocations outside a preview/final cycle
//! (discrete gestures) mutate the live value directly.

mod bar;
mod heatmap;
mod line;
mod pie;
mod scatter;
mod scratch;

pub use scratch::ScratchTable;

use crate::data::DatasetStore;
use crate::external::NameSource;
use crate::input::{GesturePayload, TargetKey};
use crate::types::Operation;

/// Apply one operation against the store. Returns true if it mutated (or
/// finalized) data; the dispatch engine re-renders only when it did.
pub fn apply(
    op: Operation,
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    names: &mut dyn NameSource,
) -> bool {
    match op {
        Operation::Bar(op) => bar::apply(op, store, scratch, payload, names),
        Operation::Pie(op) => pie::apply(op, store, scratch, payload, names),
        Operation::Line(op) => line::apply(op, store, scratch, payload),
        Operation::Heatmap(op) => heatmap::apply(op, store, scratch, payload),
        Operation::Scatter(op) => scatter::apply(op, store, scratch, payload, names),
    }
}

/// Additive/subtractive update with the shared preview discipline. The
/// value is a magnitude and is clamped to a non-negative floor.
pub(crate) fn stepped_update(
    value: &mut i64,
    key: &TargetKey,
    scratch: &mut ScratchTable,
    amount: i64,
    payload: &GesturePayload,
) -> bool {
    if payload.preview {
        let original = scratch.original_value(key, *value);
        *value = (original + amount).max(0);
    } else if payload.final_update {
        scratch.clear_key(key);
    } else {
        *value = (*value + amount).max(0);
    }
    true
}

/// Direct-assignment update (screen position converted to a data value)
/// with the shared preview discipline. Clamped non-negative.
pub(crate) fn assigned_update(
    value: &mut i64,
    key: &TargetKey,
    scratch: &mut ScratchTable,
    new_value: i64,
    payload: &GesturePayload,
) -> bool {
    let new_value = new_value.max(0);
    if payload.preview {
        scratch.original_value(key, *value);
        *value = new_value;
    } else if payload.final_update {
        scratch.clear_key(key);
    } else {
        *value = new_value;
        scratch.clear_key(key);
    }
    true
}

/// Rounded average used by the merge operations.
pub(crate) fn avg_round(a: i64, b: i64) -> i64 {
    ((a + b) as f64 / 2.0).round() as i64
}
