//! Record types, one small struct per chart type.
//!
//! Magnitude fields (time, value, height, cell counts) are kept as integers
//! and clamped to zero by the mutation operations; scatter coordinates are
//! unbounded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One bar: reading time per genre. Keyed by `subject`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarRecord {
    pub subject: String,
    pub time: i64,
}

impl BarRecord {
    pub fn new(subject: impl Into<String>, time: i64) -> Self {
        Self {
            subject: subject.into(),
            time,
        }
    }
}

/// One pie section. Keyed by `task`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub task: String,
    pub value: i64,
}

impl PieSlice {
    pub fn new(task: impl Into<String>, value: i64) -> Self {
        Self {
            task: task.into(),
            value,
        }
    }
}

/// One line chart sample. Keyed by `day`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePoint {
    pub day: i64,
    pub height: i64,
}

impl LinePoint {
    pub fn new(day: i64, height: i64) -> Self {
        Self { day, height }
    }
}

/// Stable synthetic identity for a scatter point.
///
/// Scatter points have no natural key, and positional indices go stale the
/// moment a point is added or removed mid-gesture. Every point gets an id
/// at creation and all gesture handlers resolve by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(pub Uuid);

impl PointId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PointId {
    fn default() -> Self {
        Self::new()
    }
}

/// One scatter point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Snapshots written before ids existed get fresh ones on load.
    #[serde(default)]
    pub id: PointId,
    pub x: i64,
    pub y: i64,
    pub category: String,
}

impl ScatterPoint {
    pub fn new(x: i64, y: i64, category: impl Into<String>) -> Self {
        Self {
            id: PointId::new(),
            x,
            y,
            category: category.into(),
        }
    }
}
