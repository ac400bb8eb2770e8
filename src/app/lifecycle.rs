//! Construction, restore, save, reset, and chart switching.

use tracing::{info, warn};

use crate::bindings::{BindingSnapshot, BindingTable};
use crate::constants::{CHART_DATA_KEY, GESTURE_BINDINGS_KEY};
use crate::data::{DataSnapshot, DatasetStore, StoreResult};
use crate::input::GestureRecognizer;
use crate::ops::ScratchTable;
use crate::storage::{FileStore, KeyValueStore};
use crate::types::ChartType;

use super::AppState;

impl AppState {
    /// Build an app over the given snapshot store, restoring whatever the
    /// store holds. A missing or unparsable snapshot falls back to the
    /// default datasets and an empty binding table.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let (render, names) = Self::null_collaborators();
        let mut app = Self {
            active_chart: ChartType::Bar,
            data: DatasetStore::defaults(),
            bindings: BindingTable::new(),
            recognizer: GestureRecognizer::new(),
            scratch: ScratchTable::new(),
            store,
            render,
            names,
        };
        app.restore();
        app
    }

    /// Build an app persisting to the platform data directory.
    pub fn with_disk_store() -> StoreResult<Self> {
        let dir = FileStore::default_location()
            .ok_or("no platform data directory available")?;
        let store = FileStore::new(dir)?;
        Ok(Self::new(Box::new(store)))
    }

    /// Load datasets and bindings from the snapshot store.
    fn restore(&mut self) {
        if let Some(json) = self.store.get(CHART_DATA_KEY) {
            match DataSnapshot::from_json(&json) {
                Ok(snapshot) => snapshot.apply(&mut self.data),
                Err(e) => warn!(error = %e, "ignoring unparsable dataset snapshot"),
            }
        }
        if let Some(json) = self.store.get(GESTURE_BINDINGS_KEY) {
            match serde_json::from_str::<BindingSnapshot>(&json) {
                Ok(snapshot) => self.bindings = BindingTable::restore(&snapshot),
                Err(e) => warn!(error = %e, "ignoring unparsable binding snapshot"),
            }
        }
    }

    /// Write the current datasets through to the snapshot store.
    pub fn save_data(&mut self) {
        match DataSnapshot::capture(&self.data).to_json() {
            Ok(json) => self.store.set(CHART_DATA_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize dataset snapshot"),
        }
    }

    /// Write the current binding table through to the snapshot store.
    pub fn save_bindings(&mut self) {
        match serde_json::to_string(&self.bindings.snapshot()) {
            Ok(json) => self.store.set(GESTURE_BINDINGS_KEY, &json),
            Err(e) => warn!(error = %e, "failed to serialize binding snapshot"),
        }
    }

    /// Restore default datasets, clear every binding, drop all transient
    /// gesture state, and remove both persisted snapshots.
    pub fn reset(&mut self) {
        info!("resetting datasets and bindings to defaults");
        self.data.reset();
        self.bindings.clear();
        self.scratch.clear();
        self.recognizer.abort_all();
        self.store.remove(CHART_DATA_KEY);
        self.store.remove(GESTURE_BINDINGS_KEY);
        self.render.render(self.active_chart);
    }

    /// Switch the active chart, aborting in-flight gestures and dropping
    /// preview scratch state so nothing carries across chart boundaries.
    pub fn set_active_chart(&mut self, chart: ChartType) {
        if chart == self.active_chart {
            return;
        }
        self.active_chart = chart;
        self.recognizer.clear_targets();
        self.scratch.clear();
        self.render.render(chart);
    }
}
