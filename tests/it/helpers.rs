//! Shared fixtures and builders for the dispatch tests.

use inputviz::app::AppState;
use inputviz::external::NameSource;
use inputviz::input::{GestureEvent, GesturePayload, TargetContext};
use inputviz::storage::MemoryStore;
use inputviz::types::{ChartType, GestureKind, Operation, Region};

// ============================================================================
// TestAppBuilder - app over an in-memory store with bindings pre-assigned
// ============================================================================

/// Builder for a test app.
///
/// # Example
/// ```ignore
/// let mut app = TestAppBuilder::new()
///     .with_chart(ChartType::Bar)
///     .with_binding(Operation::Bar(BarOp::AddToBar), Region::BarArea, GestureKind::Tap)
///     .build();
/// ```
pub struct TestAppBuilder {
    chart: ChartType,
    bindings: Vec<(Operation, Region, GestureKind)>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            chart: ChartType::Bar,
            bindings: Vec::new(),
        }
    }

    pub fn with_chart(mut self, chart: ChartType) -> Self {
        self.chart = chart;
        self
    }

    pub fn with_binding(mut self, op: Operation, region: Region, gesture: GestureKind) -> Self {
        self.bindings.push((op, region, gesture));
        self
    }

    pub fn build(self) -> AppState {
        let mut app = AppState::new(Box::new(MemoryStore::new()));
        for (op, region, gesture) in self.bindings {
            app.assign(op.chart_type(), op, region, Some(gesture));
        }
        app.set_active_chart(self.chart);
        app
    }
}

// ============================================================================
// Gesture event constructors
// ============================================================================

/// A one-shot gesture event (tap, double tap, hold, swipe) at the origin.
pub fn discrete_event(region: Region, kind: GestureKind, context: TargetContext) -> GestureEvent {
    GestureEvent {
        region,
        kind,
        payload: GesturePayload::discrete(context, 0.0, 0.0),
    }
}

/// A continuous-gesture preview event carrying a quantized amount.
pub fn preview_event(
    region: Region,
    kind: GestureKind,
    context: TargetContext,
    amount: i64,
) -> GestureEvent {
    GestureEvent {
        region,
        kind,
        payload: GesturePayload {
            context,
            amount,
            ..Default::default()
        }
        .previewing(),
    }
}

/// The finalizing event of a continuous gesture.
pub fn final_event(
    region: Region,
    kind: GestureKind,
    context: TargetContext,
    amount: i64,
) -> GestureEvent {
    GestureEvent {
        region,
        kind,
        payload: GesturePayload {
            context,
            amount,
            ..Default::default()
        }
        .finalized(),
    }
}

// ============================================================================
// Dataset accessors
// ============================================================================

pub fn bar_time(app: &AppState, subject: &str) -> i64 {
    app.data
        .bar
        .iter()
        .find(|b| b.subject == subject)
        .map(|b| b.time)
        .unwrap_or_else(|| panic!("no bar named {subject}"))
}

pub fn line_height(app: &AppState, day: i64) -> i64 {
    app.data
        .line
        .iter()
        .find(|p| p.day == day)
        .map(|p| p.height)
        .unwrap_or_else(|| panic!("no line point for day {day}"))
}

// ============================================================================
// Collaborator stubs
// ============================================================================

/// Name source that always accepts the prompt with a fixed name.
pub struct FixedNames(pub &'static str);

impl NameSource for FixedNames {
    fn request_name(&mut self, _prompt: &str, _default_name: &str) -> Option<String> {
        Some(self.0.to_string())
    }
}
