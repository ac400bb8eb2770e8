//! Gesture payloads and the static context attached to chart elements.

use crate::data::PointId;

/// A linear axis mapping from the active render, used to convert screen
/// coordinates back into data values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f32, f32),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a screen-space position back to a data-space value.
    pub fn invert(&self, pos: f32) -> f32 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (r1 - r0).abs() < f32::EPSILON {
            return d0;
        }
        d0 + (pos - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Identity of the record a gesture is aimed at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKey {
    /// Bar, by subject
    Bar(String),
    /// Pie section, by task
    Slice(String),
    /// Line point, by day
    Point(i64),
    /// Heatmap cell
    Cell { row: usize, col: usize },
    /// Scatter point, by stable id
    Scatter(PointId),
}

/// Static context captured when an element is bound to a region.
///
/// A copy is snapshotted into the anchor at gesture start so that a pan's
/// payload refers to the record as it was when the pointer went down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TargetContext {
    /// The record this element represents, if any (background regions have none)
    pub key: Option<TargetKey>,
    /// Step size for discrete gestures, or the initial value for addLine
    pub amount: i64,
    pub x_scale: Option<LinearScale>,
    pub y_scale: Option<LinearScale>,
}

impl TargetContext {
    pub fn new(key: TargetKey) -> Self {
        Self {
            key: Some(key),
            amount: 1,
            x_scale: None,
            y_scale: None,
        }
    }

    /// A context with no record identity, for chart-background regions.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_x_scale(mut self, scale: LinearScale) -> Self {
        self.x_scale = Some(scale);
        self
    }

    pub fn with_y_scale(mut self, scale: LinearScale) -> Self {
        self.y_scale = Some(scale);
        self
    }

    // Typed key accessors used by the mutation operations.

    pub fn bar_subject(&self) -> Option<&str> {
        match &self.key {
            Some(TargetKey::Bar(s)) => Some(s),
            _ => None,
        }
    }

    pub fn slice_task(&self) -> Option<&str> {
        match &self.key {
            Some(TargetKey::Slice(t)) => Some(t),
            _ => None,
        }
    }

    pub fn line_day(&self) -> Option<i64> {
        match &self.key {
            Some(TargetKey::Point(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn cell(&self) -> Option<(usize, usize)> {
        match &self.key {
            Some(TargetKey::Cell { row, col }) => Some((*row, *col)),
            _ => None,
        }
    }

    pub fn scatter_id(&self) -> Option<PointId> {
        match &self.key {
            Some(TargetKey::Scatter(id)) => Some(*id),
            _ => None,
        }
    }
}

/// Transient gesture-specific data handed to a mutation operation.
///
/// `preview` marks a provisional update that later events in the same
/// continuous gesture will replace; `final_update` marks the gesture's end,
/// after which any cached scratch state is cleared. Discrete gestures carry
/// neither flag. Not persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GesturePayload {
    pub context: TargetContext,
    /// Position in the chart's coordinate frame
    pub event_x: f32,
    pub event_y: f32,
    /// Cumulative delta from the gesture anchor
    pub delta_x: f32,
    pub delta_y: f32,
    /// Euclidean distance from the anchor
    pub distance: f32,
    /// Quantized, signed magnitude (pan: distance/10; pinch: scale delta x10)
    pub amount: i64,
    /// Raw scale delta for pinch gestures
    pub scale_change: f32,
    pub preview: bool,
    pub final_update: bool,
}

impl GesturePayload {
    /// Payload for a one-shot gesture (tap, double tap, hold, swipe);
    /// `amount` comes from the element's static context.
    pub fn discrete(context: TargetContext, event_x: f32, event_y: f32) -> Self {
        Self {
            amount: context.amount,
            context,
            event_x,
            event_y,
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn previewing(mut self) -> Self {
        self.preview = true;
        self.final_update = false;
        self
    }

    pub fn finalized(mut self) -> Self {
        self.preview = false;
        self.final_update = true;
        self
    }
}
