//! Heatmap operation tests.

use inputviz::data::DatasetStore;
use inputviz::external::NullNames;
use inputviz::input::{GesturePayload, TargetContext, TargetKey};
use inputviz::ops::{self, ScratchTable};
use inputviz::types::{HeatmapOp, Operation};

fn cell_context(row: usize, col: usize) -> TargetContext {
    TargetContext::new(TargetKey::Cell { row, col })
}

fn apply(op: HeatmapOp, store: &mut DatasetStore, payload: &GesturePayload) -> bool {
    let mut scratch = ScratchTable::new();
    ops::apply(Operation::Heatmap(op), store, &mut scratch, payload, &mut NullNames)
}

#[test]
fn test_add_and_remove_time_step_by_one() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(cell_context(0, 0), 0.0, 0.0);

    assert!(apply(HeatmapOp::AddTime, &mut store, &payload));
    assert_eq!(store.heatmap[0][0], 31);

    assert!(apply(HeatmapOp::RemoveTime, &mut store, &payload));
    assert!(apply(HeatmapOp::RemoveTime, &mut store, &payload));
    assert_eq!(store.heatmap[0][0], 29);
}

#[test]
fn test_remove_time_clamps_at_zero() {
    let mut store = DatasetStore::defaults();
    store.heatmap[1][1] = 0;
    let payload = GesturePayload::discrete(cell_context(1, 1), 0.0, 0.0);
    assert!(apply(HeatmapOp::RemoveTime, &mut store, &payload));
    assert_eq!(store.heatmap[1][1], 0);
}

#[test]
fn test_out_of_range_cell_is_a_no_op() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(cell_context(99, 0), 0.0, 0.0);
    assert!(!apply(HeatmapOp::AddTime, &mut store, &payload));
}

#[test]
fn test_add_column_extends_every_row() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(TargetContext::background(), 0.0, 0.0);

    assert!(apply(HeatmapOp::AddColumn, &mut store, &payload));
    assert_eq!(store.heatmap_columns(), 5);
    assert!(store.heatmap.iter().all(|row| row.len() == 5 && row[4] == 1));
}

#[test]
fn test_remove_column_keeps_at_least_one() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(TargetContext::background(), 0.0, 0.0);

    assert!(apply(HeatmapOp::RemoveColumn, &mut store, &payload));
    assert_eq!(store.heatmap_columns(), 3);

    store.heatmap = vec![vec![5]; 7];
    assert!(!apply(HeatmapOp::RemoveColumn, &mut store, &payload));
    assert_eq!(store.heatmap_columns(), 1);
}

#[test]
fn test_merge_columns_averages_into_the_right_neighbor() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(cell_context(0, 1), 0.0, 0.0);

    assert!(apply(HeatmapOp::MergeColumns, &mut store, &payload));
    assert_eq!(store.heatmap_columns(), 3);
    // row 0: [30, 45, 20, 15] -> [30, round(32.5), 15]
    assert_eq!(store.heatmap[0], vec![30, 33, 15]);
    // row 1: [25, 50, 35, 10] -> [25, round(42.5), 10]
    assert_eq!(store.heatmap[1], vec![25, 43, 10]);
}

#[test]
fn test_merge_last_column_is_a_no_op() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(cell_context(0, 3), 0.0, 0.0);
    assert!(!apply(HeatmapOp::MergeColumns, &mut store, &payload));
    assert_eq!(store.heatmap_columns(), 4);
}

#[test]
fn test_change_time_maps_pointer_height_within_the_cell() {
    let mut store = DatasetStore::defaults();

    // row 0 spans y 40..100; the bottom edge maps to 0, the top edge to 8
    let bottom = GesturePayload::discrete(cell_context(0, 0), 0.0, 100.0);
    assert!(apply(HeatmapOp::ChangeTime, &mut store, &bottom));
    assert_eq!(store.heatmap[0][0], 0);

    let top = GesturePayload::discrete(cell_context(0, 0), 0.0, 40.0);
    assert!(apply(HeatmapOp::ChangeTime, &mut store, &top));
    assert_eq!(store.heatmap[0][0], 8);

    let middle = GesturePayload::discrete(cell_context(0, 0), 0.0, 70.0);
    assert!(apply(HeatmapOp::ChangeTime, &mut store, &middle));
    assert_eq!(store.heatmap[0][0], 4);
}

#[test]
fn test_change_time_above_the_cell_keeps_growing() {
    let mut store = DatasetStore::defaults();
    // 60 px above the top of row 0: relative height 2.0
    let payload = GesturePayload::discrete(cell_context(0, 0), 0.0, -20.0);
    assert!(apply(HeatmapOp::ChangeTime, &mut store, &payload));
    assert_eq!(store.heatmap[0][0], 16);
}

#[test]
fn test_change_time_below_the_cell_clamps_at_zero() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(cell_context(0, 0), 0.0, 400.0);
    assert!(apply(HeatmapOp::ChangeTime, &mut store, &payload));
    assert_eq!(store.heatmap[0][0], 0);
}
