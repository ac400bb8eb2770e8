//! The persisted dataset snapshot.
//!
//! A JSON blob `{bar, pie, line, heatmap, scatterplot}` written through to
//! the key-value store on every successful mutation. On load, any chart key
//! present with a non-empty sequence fully replaces that chart's in-memory
//! dataset; absent or empty keys leave defaults untouched.

use serde::{Deserialize, Serialize};

use super::error::StoreResult;
use super::records::{BarRecord, LinePoint, PieSlice, ScatterPoint};
use super::store::DatasetStore;

/// Serialized form of all five datasets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSnapshot {
    #[serde(default)]
    pub bar: Vec<BarRecord>,
    #[serde(default)]
    pub pie: Vec<PieSlice>,
    #[serde(default)]
    pub line: Vec<LinePoint>,
    #[serde(default)]
    pub heatmap: Vec<Vec<i64>>,
    #[serde(default)]
    pub scatterplot: Vec<ScatterPoint>,
}

impl DataSnapshot {
    /// Capture the full current state of the store.
    pub fn capture(store: &DatasetStore) -> Self {
        Self {
            bar: store.bar.clone(),
            pie: store.pie.clone(),
            line: store.line.clone(),
            heatmap: store.heatmap.clone(),
            scatterplot: store.scatter.clone(),
        }
    }

    /// Apply the snapshot to a store. Empty sequences keep existing data.
    pub fn apply(self, store: &mut DatasetStore) {
        if !self.bar.is_empty() {
            store.bar = self.bar;
        }
        if !self.pie.is_empty() {
            store.pie = self.pie;
        }
        if !self.line.is_empty() {
            store.line = self.line;
        }
        if !self.heatmap.is_empty() {
            store.heatmap = self.heatmap;
        }
        if !self.scatterplot.is_empty() {
            store.scatter = self.scatterplot;
        }
    }

    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> StoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
