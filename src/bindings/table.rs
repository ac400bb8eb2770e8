//! The gesture assignment table and its persisted snapshot.

use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::types::{ChartType, GestureKind, Operation, Region};

/// Persisted shape: `{chartType: {operationName: {regionName: gesture}}}`.
/// Only assigned bindings are included.
pub type BindingSnapshot = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Sparse mapping from (chart, operation, region) to an assigned gesture.
///
/// Uniqueness invariant: within one (chart, region) column, each gesture
/// kind is assigned to at most one operation. `set` enforces this by
/// resetting any other binding in the column that held the newly claimed
/// gesture; the dispatch engine relies on it to resolve at most one
/// operation per fired (region, gesture) pair.
#[derive(Debug, Default, Clone)]
pub struct BindingTable {
    map: HashMap<(ChartType, Operation, Region), GestureKind>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, chart: ChartType, op: Operation, region: Region) -> Option<GestureKind> {
        self.map.get(&(chart, op, region)).copied()
    }

    /// Assign or clear a binding.
    ///
    /// Assigning gesture G resets any other operation bound to G in the same
    /// (chart, region) column; the displaced operations are returned so the
    /// UI can refresh their dropdowns.
    pub fn set(
        &mut self,
        chart: ChartType,
        op: Operation,
        region: Region,
        gesture: Option<GestureKind>,
    ) -> Vec<Operation> {
        let mut displaced = Vec::new();

        if op.chart_type() != chart || !chart.regions().contains(&region) {
            warn!(%chart, %op, %region, "binding edit outside the chart's catalog ignored");
            return displaced;
        }

        match gesture {
            None => {
                self.map.remove(&(chart, op, region));
            }
            Some(g) => {
                if !g.is_assignable() {
                    warn!(gesture = %g, "refusing to bind a non-assignable gesture");
                    return displaced;
                }
                for other in chart.operations() {
                    if *other != op && self.map.get(&(chart, *other, region)) == Some(&g) {
                        self.map.remove(&(chart, *other, region));
                        displaced.push(*other);
                    }
                }
                self.map.insert((chart, op, region), g);
            }
        }
        displaced
    }

    /// The valid option set for one binding's dropdown: every assignable
    /// gesture not claimed by another operation in the same column. The
    /// binding's own current value is always included.
    pub fn available(&self, chart: ChartType, op: Operation, region: Region) -> Vec<GestureKind> {
        GestureKind::ASSIGNABLE
            .iter()
            .copied()
            .filter(|g| {
                !chart
                    .operations()
                    .iter()
                    .any(|other| *other != op && self.get(chart, *other, region) == Some(*g))
            })
            .collect()
    }

    /// Resolve the at-most-one operation bound to (region, gesture) for a
    /// chart, scanning the catalog in declaration order.
    pub fn operation_for(
        &self,
        chart: ChartType,
        region: Region,
        gesture: GestureKind,
    ) -> Option<Operation> {
        chart
            .operations()
            .iter()
            .copied()
            .find(|op| self.get(chart, *op, region) == Some(gesture))
    }

    /// All assigned bindings for one chart type.
    pub fn bindings_for(&self, chart: ChartType) -> Vec<(Operation, Region, GestureKind)> {
        let mut out = Vec::new();
        for op in chart.operations() {
            for region in chart.regions() {
                if let Some(g) = self.get(chart, *op, *region) {
                    out.push((*op, *region, g));
                }
            }
        }
        out
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // ==================== Persistence ====================

    /// Capture the assigned bindings as the persisted snapshot shape.
    pub fn snapshot(&self) -> BindingSnapshot {
        let mut out = BindingSnapshot::new();
        for chart in ChartType::ALL {
            for (op, region, gesture) in self.bindings_for(chart) {
                out.entry(chart.key().to_string())
                    .or_default()
                    .entry(op.name().to_string())
                    .or_default()
                    .insert(region.name().to_string(), gesture.label().to_string());
            }
        }
        out
    }

    /// Rebuild a table from a snapshot, re-applying each entry through
    /// `set` so the uniqueness invariant holds even for hand-edited or
    /// stale snapshots. Unknown names are skipped with a warning.
    pub fn restore(snapshot: &BindingSnapshot) -> Self {
        let mut table = Self::new();
        for (chart_key, ops) in snapshot {
            let Some(chart) = ChartType::parse(chart_key) else {
                warn!(%chart_key, "unknown chart type in binding snapshot");
                continue;
            };
            for (op_name, regions) in ops {
                let Some(op) = Operation::parse(chart, op_name) else {
                    warn!(%chart, %op_name, "unknown operation in binding snapshot");
                    continue;
                };
                for (region_name, gesture_label) in regions {
                    let Some(region) = Region::parse(chart, region_name) else {
                        warn!(%chart, %region_name, "unknown region in binding snapshot");
                        continue;
                    };
                    let Some(gesture) = GestureKind::parse(gesture_label) else {
                        warn!(%gesture_label, "unknown gesture in binding snapshot");
                        continue;
                    };
                    table.set(chart, op, region, Some(gesture));
                }
            }
        }
        table
    }
}
