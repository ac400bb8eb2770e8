//! Application-wide constants.
//!
//! Centralizes magic numbers and persistence keys to make the codebase
//! more maintainable and self-documenting.

use std::time::Duration;

// ============================================================================
// Gesture Quantization
// ============================================================================

/// Pixels of pan travel per unit of quantized `amount`
pub const PAN_QUANTUM: f32 = 10.0;

/// Vertical delta magnitude below which a pan counts as horizontal.
/// Distinguishes "mostly vertical" from "mostly horizontal" drags without
/// a true angle computation.
pub const HORIZONTAL_TIE_BREAK: f32 = 30.0;

/// Multiplier converting a pinch scale change into a quantized amount
pub const PINCH_AMOUNT_SCALE: f32 = 10.0;

/// Minimum quantized-amount change before a pinch move re-fires
pub const PINCH_THROTTLE_STEP: i64 = 1;

/// Age after which an unterminated gesture anchor is evicted
pub const ANCHOR_MAX_AGE: Duration = Duration::from_secs(30);

// ============================================================================
// Mutation Defaults
// ============================================================================

/// Starting value for a newly added bar or pie section
pub const NEW_RECORD_VALUE: i64 = 1;

/// Fixed step applied by heatmap add/remove regardless of gesture amount
pub const HEATMAP_STEP: i64 = 1;

/// Value filled into every row of a newly added heatmap column
pub const HEATMAP_NEW_COLUMN_VALUE: i64 = 1;

/// Pixels of pan travel per unit of pie section change
pub const SECTION_CHANGE_QUANTUM: f32 = 5.0;

// ============================================================================
// Heatmap Geometry (for screen-to-value conversion in changeTime)
// ============================================================================

/// Top margin of the heatmap grid within the chart frame
pub const HEATMAP_MARGIN_TOP: f32 = 40.0;

/// Rendered size of one heatmap cell in pixels
pub const HEATMAP_CELL_SIZE: f32 = 60.0;

/// Value span mapped across one cell's height when dragging a cell value
pub const HEATMAP_CHANGE_SPAN: i64 = 8;

// ============================================================================
// Persistence Keys
// ============================================================================

/// Key-value store key for the dataset snapshot
pub const CHART_DATA_KEY: &str = "inputviz_chart_data";

/// Key-value store key for the gesture-binding snapshot
pub const GESTURE_BINDINGS_KEY: &str = "inputviz_gesture_assignments";
