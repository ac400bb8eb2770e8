//! Anchor side-table - per-instance state for continuous gestures.
//!
//! Each in-flight pan or pinch holds its anchor in a table keyed by the
//! originating element, making concurrent gesture instances independent.
//! Entries are removed when the gesture ends; a gesture that never ends
//! (pointer-capture loss, element removed mid-drag) is cleaned up through
//! `cancel` or the age-based `evict_stale` sweep.
//!
//! ## State Transitions
//!
//! ```text
//! (absent) -> Pan/Pinch    (on *Start: anchor position/scale + context copy)
//! occupied -> occupied     (moves update last fired amount, throttled)
//! occupied -> (absent)     (on *End, cancel, or stale eviction)
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::ElementId;
use super::payload::TargetContext;

/// Anchor state for one continuous gesture instance.
#[derive(Clone, Debug)]
pub enum Anchor {
    Pan {
        /// Pointer position when the pan started, in page coordinates
        start_x: f32,
        start_y: f32,
        /// Copy of the element's static context at gesture start
        context: TargetContext,
        /// Last quantized amount that fired, for throttling
        last_amount: i64,
    },
    Pinch {
        /// Scale ratio when the pinch started
        start_scale: f32,
        context: TargetContext,
        last_amount: i64,
    },
}

#[derive(Debug)]
struct AnchorEntry {
    anchor: Anchor,
    started: Instant,
}

/// Keyed side-table of in-flight gesture anchors.
#[derive(Debug, Default)]
pub struct AnchorTable {
    entries: HashMap<ElementId, AnchorEntry>,
}

impl AnchorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_pan(&mut self, element: ElementId, x: f32, y: f32, context: TargetContext) {
        self.entries.insert(
            element,
            AnchorEntry {
                anchor: Anchor::Pan {
                    start_x: x,
                    start_y: y,
                    context,
                    last_amount: 0,
                },
                started: Instant::now(),
            },
        );
    }

    pub fn begin_pinch(&mut self, element: ElementId, scale: f32, context: TargetContext) {
        self.entries.insert(
            element,
            AnchorEntry {
                anchor: Anchor::Pinch {
                    start_scale: scale,
                    context,
                    last_amount: 0,
                },
                started: Instant::now(),
            },
        );
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut Anchor> {
        self.entries.get_mut(&element).map(|e| &mut e.anchor)
    }

    /// Remove and return the anchor for a finished gesture.
    pub fn take(&mut self, element: ElementId) -> Option<Anchor> {
        self.entries.remove(&element).map(|e| e.anchor)
    }

    /// Explicit cancellation hook for pointer-capture loss.
    pub fn cancel(&mut self, element: ElementId) -> bool {
        self.entries.remove(&element).is_some()
    }

    /// Drop anchors older than `max_age`; returns how many were evicted.
    pub fn evict_stale(&mut self, max_age: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.started.elapsed() < max_age);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
