//! Line chart operation tests.

use inputviz::data::DatasetStore;
use inputviz::external::NullNames;
use inputviz::input::{GesturePayload, LinearScale, TargetContext, TargetKey};
use inputviz::ops::{self, ScratchTable};
use inputviz::types::{LineOp, Operation};

fn point_context(day: i64) -> TargetContext {
    TargetContext::new(TargetKey::Point(day))
}

fn y_scale() -> LinearScale {
    // data 0..=20 drawn top-down over 460..=20
    LinearScale::new((0.0, 20.0), (460.0, 20.0))
}

fn apply(op: LineOp, store: &mut DatasetStore, payload: &GesturePayload) -> bool {
    let mut scratch = ScratchTable::new();
    ops::apply(Operation::Line(op), store, &mut scratch, payload, &mut NullNames)
}

fn height(store: &DatasetStore, day: i64) -> i64 {
    store.line.iter().find(|p| p.day == day).unwrap().height
}

#[test]
fn test_add_point_appends_the_next_day() {
    let mut store = DatasetStore::defaults();
    let context = TargetContext::background().with_y_scale(y_scale());
    let payload = GesturePayload::discrete(context, 0.0, 240.0);

    assert!(apply(LineOp::AddPoint, &mut store, &payload));
    assert_eq!(store.line.len(), 6);
    assert_eq!(store.line[5].day, 6);
    assert_eq!(store.line[5].height, 10);
}

#[test]
fn test_add_point_on_an_empty_chart_starts_at_day_one() {
    let mut store = DatasetStore::defaults();
    store.line.clear();
    let context = TargetContext::background().with_y_scale(y_scale());
    let payload = GesturePayload::discrete(context, 0.0, 460.0);

    assert!(apply(LineOp::AddPoint, &mut store, &payload));
    assert_eq!(store.line, vec![inputviz::data::LinePoint::new(1, 0)]);
}

#[test]
fn test_add_point_skips_previews() {
    // a pan previewing over the background must not spray points
    let mut store = DatasetStore::defaults();
    let context = TargetContext::background().with_y_scale(y_scale());
    let payload = GesturePayload::discrete(context, 0.0, 240.0).previewing();

    assert!(!apply(LineOp::AddPoint, &mut store, &payload));
    assert_eq!(store.line.len(), 5);
}

#[test]
fn test_remove_point_subtracts_height_directly() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(point_context(5).with_amount(6), 0.0, 0.0);
    assert!(apply(LineOp::RemovePoint, &mut store, &payload));
    assert_eq!(height(&store, 5), 14);

    // clamped, not removed
    let big = GesturePayload::discrete(point_context(5).with_amount(100), 0.0, 0.0);
    assert!(apply(LineOp::RemovePoint, &mut store, &big));
    assert_eq!(height(&store, 5), 0);
    assert_eq!(store.line.len(), 5);
}

#[test]
fn test_add_and_remove_point_height() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(point_context(1).with_amount(4), 0.0, 0.0);
    assert!(apply(LineOp::AddPointHeight, &mut store, &payload));
    assert_eq!(height(&store, 1), 14);

    assert!(apply(LineOp::RemovePointHeight, &mut store, &payload));
    assert_eq!(height(&store, 1), 10);
}

#[test]
fn test_change_point_height_from_pointer() {
    let mut store = DatasetStore::defaults();
    let context = point_context(2).with_y_scale(y_scale());
    let payload = GesturePayload::discrete(context, 0.0, 20.0);
    assert!(apply(LineOp::ChangePointHeight, &mut store, &payload));
    assert_eq!(height(&store, 2), 20);
}

#[test]
fn test_add_line_inserts_with_the_context_initial_height() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(point_context(9).with_amount(7), 0.0, 0.0);
    assert!(apply(LineOp::AddLine, &mut store, &payload));
    assert_eq!(height(&store, 9), 7);
}

#[test]
fn test_add_line_rejects_an_existing_day() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(point_context(3).with_amount(7), 0.0, 0.0);
    assert!(!apply(LineOp::AddLine, &mut store, &payload));
    assert_eq!(store.line.len(), 5);
    assert_eq!(height(&store, 3), 15);
}

#[test]
fn test_remove_line_deletes_the_record() {
    let mut store = DatasetStore::defaults();
    let payload = GesturePayload::discrete(point_context(3), 0.0, 0.0);
    assert!(apply(LineOp::RemoveLine, &mut store, &payload));
    assert_eq!(store.line.len(), 4);
    assert!(store.line.iter().all(|p| p.day != 3));
}
