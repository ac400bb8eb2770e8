//! Raw event to mutation to persistence, end to end.

use inputviz::constants::CHART_DATA_KEY;
use inputviz::data::DataSnapshot;
use inputviz::input::{ElementId, RawGesture, TargetContext, TargetKey};
use inputviz::types::{BarOp, ChartType, GestureKind, Operation, Region};

use crate::helpers::{FixedNames, TestAppBuilder, bar_time, discrete_event};

#[test]
fn test_tap_mutates_renders_and_persists() {
    let mut app = TestAppBuilder::new()
        .with_binding(Operation::Bar(BarOp::AddToBar), Region::BarArea, GestureKind::Tap)
        .build();

    let el = ElementId(1);
    app.recognizer.bind_target(
        el,
        Region::BarArea,
        TargetContext::new(TargetKey::Bar("Fantasy".into())),
    );

    assert!(app.handle_pointer(el, RawGesture::Tap { x: 5.0, y: 5.0 }));
    assert_eq!(bar_time(&app, "Fantasy"), 13);

    // written through on the same invocation
    let json = app.store().get(CHART_DATA_KEY).unwrap();
    let snapshot = DataSnapshot::from_json(&json).unwrap();
    assert_eq!(snapshot.bar[0].time, 13);
}

#[test]
fn test_gesture_without_a_binding_is_ignored() {
    let mut app = TestAppBuilder::new().build();

    let fired = app.fire(discrete_event(
        Region::BarArea,
        GestureKind::DoubleTap,
        TargetContext::new(TargetKey::Bar("Fantasy".into())),
    ));
    assert!(!fired);
    assert_eq!(bar_time(&app, "Fantasy"), 12);
    assert_eq!(app.store().get(CHART_DATA_KEY), None);
}

#[test]
fn test_bindings_resolve_per_region() {
    let mut app = TestAppBuilder::new()
        .with_binding(Operation::Bar(BarOp::AddToBar), Region::BarArea, GestureKind::Tap)
        .with_binding(Operation::Bar(BarOp::RemoveFromBar), Region::BarTopEdge, GestureKind::Tap)
        .build();

    let context = TargetContext::new(TargetKey::Bar("Mystery".into()));
    assert!(app.fire(discrete_event(Region::BarArea, GestureKind::Tap, context.clone())));
    assert_eq!(bar_time(&app, "Mystery"), 9);

    assert!(app.fire(discrete_event(Region::BarTopEdge, GestureKind::Tap, context)));
    assert_eq!(bar_time(&app, "Mystery"), 8);
}

#[test]
fn test_region_outside_the_active_chart_is_ignored() {
    let mut app = TestAppBuilder::new()
        .with_binding(Operation::Bar(BarOp::AddToBar), Region::BarArea, GestureKind::Tap)
        .build();

    let fired = app.fire(discrete_event(
        Region::SectionArea,
        GestureKind::Tap,
        TargetContext::background(),
    ));
    assert!(!fired);
}

#[test]
fn test_failed_operation_does_not_persist() {
    let mut app = TestAppBuilder::new()
        .with_binding(Operation::Bar(BarOp::RemoveBar), Region::BarArea, GestureKind::Hold)
        .build();

    let fired = app.fire(discrete_event(
        Region::BarArea,
        GestureKind::Hold,
        TargetContext::new(TargetKey::Bar("Romance".into())),
    ));
    assert!(!fired);
    assert_eq!(app.store().get(CHART_DATA_KEY), None);
}

#[test]
fn test_prompted_add_goes_through_the_name_source() {
    let mut app = TestAppBuilder::new()
        .with_binding(Operation::Bar(BarOp::AddBar), Region::OutsideBars, GestureKind::DoubleTap)
        .build();
    app.set_names(Box::new(FixedNames("Horror")));

    let fired = app.fire(discrete_event(
        Region::OutsideBars,
        GestureKind::DoubleTap,
        TargetContext::background(),
    ));
    assert!(fired);
    assert_eq!(app.data.bar.len(), 5);
    assert_eq!(bar_time(&app, "Horror"), 1);
}

#[test]
fn test_assign_displaces_and_persists() {
    let mut app = TestAppBuilder::new().build();

    app.assign(
        ChartType::Bar,
        Operation::Bar(BarOp::AddToBar),
        Region::BarArea,
        Some(GestureKind::Tap),
    );
    let displaced = app.assign(
        ChartType::Bar,
        Operation::Bar(BarOp::RemoveFromBar),
        Region::BarArea,
        Some(GestureKind::Tap),
    );
    assert_eq!(displaced, vec![Operation::Bar(BarOp::AddToBar)]);
    assert_eq!(
        app.bindings.operation_for(ChartType::Bar, Region::BarArea, GestureKind::Tap),
        Some(Operation::Bar(BarOp::RemoveFromBar))
    );
    assert!(app.store().get(inputviz::constants::GESTURE_BINDINGS_KEY).is_some());
}
