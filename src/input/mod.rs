//! Gesture recognizer adapter.
//!
//! Wraps an external low-level gesture engine: raw tap/press/pan/pinch/swipe
//! notifications addressed to interactive chart elements come in, semantic
//! gesture events with quantized payloads come out.
//!
//! ## Architecture
//!
//! Continuous gestures (pan, pinch) keep per-instance anchor state in an
//! explicit keyed side-table (`AnchorTable`) rather than scattered fields.
//! Move events are throttled on the quantized `amount` so a held-still
//! pointer never re-fires the same mutation.
//!
//! ## Modules
//!
//! - `payload` - gesture payloads, target contexts, axis scales
//! - `state` - the per-instance anchor side-table
//! - `recognizer` - raw-event handling, quantization, throttling

mod payload;
mod recognizer;
mod state;

pub use payload::{GesturePayload, LinearScale, TargetContext, TargetKey};
pub use recognizer::{GestureEvent, GestureRecognizer, RawGesture, SwipeDirection};
pub use state::{Anchor, AnchorTable};

/// Identity of an interactive chart element, assigned by the renderer.
///
/// Distinguishes concurrent gesture instances; each element holds its own
/// anchor state while a continuous gesture is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(pub u64);
