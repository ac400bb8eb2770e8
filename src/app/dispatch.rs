//! The fired-gesture to mutation pipeline.

use tracing::{debug, warn};

use crate::input::{ElementId, GestureEvent, RawGesture};
use crate::ops;
use crate::types::{ChartType, GestureKind, Operation, Region};

use super::AppState;

impl AppState {
    /// Feed one raw engine event through recognition and dispatch.
    /// Returns whether a dataset mutation happened.
    pub fn handle_pointer(&mut self, element: ElementId, raw: RawGesture) -> bool {
        match self.recognizer.handle(element, raw) {
            Some(event) => self.fire(event),
            None => false,
        }
    }

    /// Dispatch a recognized gesture on the active chart.
    ///
    /// Resolves the bound operation for (region, gesture), applies it, and
    /// on any mutation re-renders and writes the dataset snapshot through.
    /// Unbound pairs are ignored.
    pub fn fire(&mut self, event: GestureEvent) -> bool {
        let chart = self.active_chart;
        if !chart.regions().contains(&event.region) {
            warn!(%chart, region = %event.region, "gesture on a region outside the active chart");
            return false;
        }
        let Some(op) = self.bindings.operation_for(chart, event.region, event.kind) else {
            debug!(%chart, region = %event.region, gesture = %event.kind, "no binding, gesture ignored");
            return false;
        };
        debug!(%chart, %op, gesture = %event.kind, amount = event.payload.amount, "dispatching");

        let changed = ops::apply(
            op,
            &mut self.data,
            &mut self.scratch,
            &event.payload,
            self.names.as_mut(),
        );
        if changed {
            self.render.render(chart);
            self.save_data();
        }
        changed
    }

    /// Edit one binding and persist the table. Returns the operations that
    /// lost the gesture to the new holder.
    pub fn assign(
        &mut self,
        chart: ChartType,
        op: Operation,
        region: Region,
        gesture: Option<GestureKind>,
    ) -> Vec<Operation> {
        let displaced = self.bindings.set(chart, op, region, gesture);
        self.save_bindings();
        displaced
    }
}
