//! Raw-event handling: quantization, throttling, and semantic gesture events.

use tracing::{debug, trace};

use crate::constants::{
    ANCHOR_MAX_AGE, HORIZONTAL_TIE_BREAK, PAN_QUANTUM, PINCH_AMOUNT_SCALE, PINCH_THROTTLE_STEP,
};
use crate::types::{GestureKind, Region};

use super::ElementId;
use super::payload::{GesturePayload, TargetContext};
use super::state::{Anchor, AnchorTable};
use std::collections::HashMap;

/// Swipe direction reported by the low-level engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// A raw notification from the external gesture engine, addressed to a
/// bound element. Positions are in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawGesture {
    Tap { x: f32, y: f32 },
    DoubleTap { x: f32, y: f32 },
    Hold { x: f32, y: f32 },
    PanStart { x: f32, y: f32 },
    PanMove { x: f32, y: f32 },
    PanEnd { x: f32, y: f32 },
    PinchStart { x: f32, y: f32, scale: f32 },
    PinchMove { x: f32, y: f32, scale: f32 },
    PinchEnd { x: f32, y: f32, scale: f32 },
    Swipe { direction: SwipeDirection, x: f32, y: f32 },
}

/// A semantic gesture ready for dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent {
    pub region: Region,
    pub kind: GestureKind,
    pub payload: GesturePayload,
}

struct Target {
    region: Region,
    context: TargetContext,
}

/// Converts raw pointer interactions on bound chart elements into semantic
/// gesture events.
///
/// The renderer binds each interactive node once per render pass
/// (`clear_targets` + `bind_target`); the embedding forwards raw engine
/// events through [`GestureRecognizer::handle`].
pub struct GestureRecognizer {
    targets: HashMap<ElementId, Target>,
    anchors: AnchorTable,
    /// Chart-container origin in page coordinates
    frame: (f32, f32),
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
            anchors: AnchorTable::new(),
            frame: (0.0, 0.0),
        }
    }

    /// Record the chart container's page position so event coordinates can
    /// be reported relative to the chart frame.
    pub fn set_frame(&mut self, left: f32, top: f32) {
        self.frame = (left, top);
    }

    /// Bind an interactive element to a region with its static context.
    pub fn bind_target(&mut self, element: ElementId, region: Region, context: TargetContext) {
        self.targets.insert(element, Target { region, context });
    }

    /// Drop all bindings and any in-flight anchors. Called before a render
    /// pass re-registers the chart's interactive nodes.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
        self.anchors.clear();
    }

    /// Cancellation hook for pointer-capture loss on one element.
    pub fn cancel(&mut self, element: ElementId) -> bool {
        self.anchors.cancel(element)
    }

    /// Abort every in-flight gesture without firing end events.
    pub fn abort_all(&mut self) {
        self.anchors.clear();
    }

    pub fn active_gestures(&self) -> usize {
        self.anchors.len()
    }

    /// Process one raw event. Returns a semantic event when the interaction
    /// produced (or finalized) a new quantized amount; start events and
    /// throttled moves return `None`.
    pub fn handle(&mut self, element: ElementId, raw: RawGesture) -> Option<GestureEvent> {
        let (left, top) = self.frame;

        let Some(target) = self.targets.get(&element) else {
            trace!(?element, "raw gesture on unbound element ignored");
            return None;
        };
        let region = target.region;
        let context = target.context.clone();

        match raw {
            RawGesture::Tap { x, y } => Some(GestureEvent {
                region,
                kind: GestureKind::Tap,
                payload: GesturePayload::discrete(context, x - left, y - top),
            }),
            RawGesture::DoubleTap { x, y } => Some(GestureEvent {
                region,
                kind: GestureKind::DoubleTap,
                payload: GesturePayload::discrete(context, x - left, y - top),
            }),
            RawGesture::Hold { x, y } => Some(GestureEvent {
                region,
                kind: GestureKind::Hold,
                payload: GesturePayload::discrete(context, x - left, y - top),
            }),
            RawGesture::Swipe { direction, x, y } => {
                let kind = match direction {
                    SwipeDirection::Left => GestureKind::SwipeLeft,
                    SwipeDirection::Right => GestureKind::SwipeRight,
                };
                Some(GestureEvent {
                    region,
                    kind,
                    payload: GesturePayload::discrete(context, x - left, y - top),
                })
            }
            RawGesture::PanStart { x, y } => {
                let evicted = self.anchors.evict_stale(ANCHOR_MAX_AGE);
                if evicted > 0 {
                    debug!(evicted, "evicted stale gesture anchors");
                }
                self.anchors.begin_pan(element, x, y, context);
                None
            }
            RawGesture::PanMove { x, y } => {
                let Some(Anchor::Pan {
                    start_x,
                    start_y,
                    context,
                    last_amount,
                }) = self.anchors.get_mut(element)
                else {
                    return None;
                };
                let (delta_x, delta_y) = (x - *start_x, y - *start_y);
                let (distance, amount) = pan_amount(delta_x, delta_y);
                // throttle: re-fire only when the quantized amount moves
                if amount == *last_amount {
                    return None;
                }
                *last_amount = amount;
                let payload = GesturePayload {
                    context: context.clone(),
                    event_x: x - left,
                    event_y: y - top,
                    delta_x,
                    delta_y,
                    distance,
                    amount,
                    scale_change: 0.0,
                    preview: true,
                    final_update: false,
                };
                Some(GestureEvent {
                    region,
                    kind: GestureKind::Pan,
                    payload,
                })
            }
            RawGesture::PanEnd { x, y } => {
                let Some(Anchor::Pan {
                    start_x,
                    start_y,
                    context,
                    ..
                }) = self.anchors.take(element)
                else {
                    return None;
                };
                let (delta_x, delta_y) = (x - start_x, y - start_y);
                let (distance, amount) = pan_amount(delta_x, delta_y);
                let payload = GesturePayload {
                    context,
                    event_x: x - left,
                    event_y: y - top,
                    delta_x,
                    delta_y,
                    distance,
                    amount,
                    scale_change: 0.0,
                    preview: false,
                    final_update: true,
                };
                Some(GestureEvent {
                    region,
                    kind: GestureKind::Pan,
                    payload,
                })
            }
            RawGesture::PinchStart { scale, .. } => {
                let evicted = self.anchors.evict_stale(ANCHOR_MAX_AGE);
                if evicted > 0 {
                    debug!(evicted, "evicted stale gesture anchors");
                }
                self.anchors.begin_pinch(element, scale, context);
                None
            }
            RawGesture::PinchMove { x, y, scale } => {
                let Some(Anchor::Pinch {
                    start_scale,
                    context,
                    last_amount,
                }) = self.anchors.get_mut(element)
                else {
                    return None;
                };
                let scale_change = scale - *start_scale;
                let amount = pinch_amount(scale_change);
                if (amount - *last_amount).abs() < PINCH_THROTTLE_STEP {
                    return None;
                }
                *last_amount = amount;
                let payload = GesturePayload {
                    context: context.clone(),
                    event_x: x - left,
                    event_y: y - top,
                    delta_x: 0.0,
                    delta_y: 0.0,
                    distance: 0.0,
                    amount,
                    scale_change,
                    preview: true,
                    final_update: false,
                };
                Some(GestureEvent {
                    region,
                    kind: pinch_kind(scale),
                    payload,
                })
            }
            RawGesture::PinchEnd { x, y, scale } => {
                let Some(Anchor::Pinch {
                    start_scale,
                    context,
                    ..
                }) = self.anchors.take(element)
                else {
                    return None;
                };
                let scale_change = scale - start_scale;
                let payload = GesturePayload {
                    context,
                    event_x: x - left,
                    event_y: y - top,
                    delta_x: 0.0,
                    delta_y: 0.0,
                    distance: 0.0,
                    amount: pinch_amount(scale_change),
                    scale_change,
                    preview: false,
                    final_update: true,
                };
                Some(GestureEvent {
                    region,
                    kind: pinch_kind(scale),
                    payload,
                })
            }
        }
    }
}

/// Quantize a pan delta into (distance, signed amount).
///
/// Mostly-vertical drags take their sign from the vertical delta (downward
/// positive); drags whose vertical magnitude stays under the tie-break
/// threshold count as horizontal, with rightward motion negative.
fn pan_amount(delta_x: f32, delta_y: f32) -> (f32, i64) {
    let distance = (delta_x * delta_x + delta_y * delta_y).sqrt();
    let sign: i64 = if delta_y.abs() < HORIZONTAL_TIE_BREAK {
        if delta_x > 0.0 { -1 } else { 1 }
    } else if delta_y > 0.0 {
        1
    } else {
        -1
    };
    (distance, (distance / PAN_QUANTUM).round() as i64 * sign)
}

/// Quantize a pinch scale delta into a signed amount.
fn pinch_amount(scale_change: f32) -> i64 {
    let magnitude = (scale_change.abs() * PINCH_AMOUNT_SCALE).round() as i64;
    if scale_change > 0.0 { magnitude } else { -magnitude }
}

/// Pinch direction from the absolute scale: below 1 is "pinch in", above 1
/// is "pinch out", exactly 1 is the neutral (never-assignable) kind.
fn pinch_kind(scale: f32) -> GestureKind {
    if scale < 1.0 {
        GestureKind::PinchIn
    } else if scale > 1.0 {
        GestureKind::PinchOut
    } else {
        GestureKind::Pinch
    }
}
