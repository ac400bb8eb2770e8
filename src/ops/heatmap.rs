//! Heatmap mutation operations.

use crate::constants::{
    HEATMAP_CELL_SIZE, HEATMAP_CHANGE_SPAN, HEATMAP_MARGIN_TOP, HEATMAP_NEW_COLUMN_VALUE,
    HEATMAP_STEP,
};
use crate::data::DatasetStore;
use crate::input::{GesturePayload, TargetKey};
use crate::types::HeatmapOp;

use super::{ScratchTable, assigned_update, avg_round, stepped_update};

pub(super) fn apply(
    op: HeatmapOp,
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
) -> bool {
    match op {
        // cell add/remove move by a fixed unit regardless of gesture amount
        HeatmapOp::AddTime => cell_step(store, scratch, payload, HEATMAP_STEP),
        HeatmapOp::RemoveTime => cell_step(store, scratch, payload, -HEATMAP_STEP),
        HeatmapOp::AddColumn => {
            if store.heatmap.is_empty() {
                return false;
            }
            for row in &mut store.heatmap {
                row.push(HEATMAP_NEW_COLUMN_VALUE);
            }
            true
        }
        HeatmapOp::RemoveColumn => {
            if store.heatmap_columns() <= 1 {
                return false;
            }
            for row in &mut store.heatmap {
                row.pop();
            }
            true
        }
        HeatmapOp::MergeColumns => {
            let Some((_, col)) = payload.context.cell() else {
                return false;
            };
            // merges with the immediate right neighbor; last column has none
            if col + 1 >= store.heatmap_columns() {
                return false;
            }
            for row in &mut store.heatmap {
                row[col] = avg_round(row[col], row[col + 1]);
                row.remove(col + 1);
            }
            true
        }
        HeatmapOp::ChangeTime => {
            let Some((row, col)) = payload.context.cell() else {
                return false;
            };
            // map the pointer's height within the cell onto a value span:
            // the cell bottom is 0, the cell top is HEATMAP_CHANGE_SPAN,
            // with no upper bound when dragging above the cell
            let cell_top = HEATMAP_MARGIN_TOP + row as f32 * HEATMAP_CELL_SIZE;
            let cell_bottom = cell_top + HEATMAP_CELL_SIZE;
            let relative = (cell_bottom - payload.event_y) / HEATMAP_CELL_SIZE;
            let new_value = (relative * HEATMAP_CHANGE_SPAN as f32).round() as i64;
            let key = TargetKey::Cell { row, col };
            let Some(cell) = store.cell_mut(row, col) else {
                return false;
            };
            assigned_update(cell, &key, scratch, new_value, payload)
        }
    }
}

fn cell_step(
    store: &mut DatasetStore,
    scratch: &mut ScratchTable,
    payload: &GesturePayload,
    amount: i64,
) -> bool {
    let Some((row, col)) = payload.context.cell() else {
        return false;
    };
    let key = TargetKey::Cell { row, col };
    let Some(cell) = store.cell_mut(row, col) else {
        return false;
    };
    stepped_update(cell, &key, scratch, amount, payload)
}
