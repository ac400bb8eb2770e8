//! Preview scratch table.
//!
//! Continuous gestures preview against the record's pre-gesture value so
//! repeated previews are idempotent relative to gesture start, not
//! cumulative. Those cached originals live here, keyed by record identity,
//! never as hidden fields on the records themselves - keeping record
//! invariants clean and scratch state out of serialized snapshots.

use std::collections::HashMap;

use crate::input::TargetKey;

/// Short-lived cache of pre-gesture originals, keyed by record identity.
#[derive(Debug, Default)]
pub struct ScratchTable {
    values: HashMap<TargetKey, i64>,
    positions: HashMap<TargetKey, (i64, i64)>,
}

impl ScratchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The record's value as of gesture start; caches `live` on first call.
    pub fn original_value(&mut self, key: &TargetKey, live: i64) -> i64 {
        *self.values.entry(key.clone()).or_insert(live)
    }

    /// The record's position as of gesture start; caches `live` on first call.
    pub fn original_position(&mut self, key: &TargetKey, live: (i64, i64)) -> (i64, i64) {
        *self.positions.entry(key.clone()).or_insert(live)
    }

    /// Drop any cached original for one record (gesture committed).
    pub fn clear_key(&mut self, key: &TargetKey) {
        self.values.remove(key);
        self.positions.remove(key);
    }

    pub fn contains(&self, key: &TargetKey) -> bool {
        self.values.contains_key(key) || self.positions.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.positions.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.positions.is_empty()
    }
}
