//! Core types for the gesture-driven chart system.
//!
//! This module defines the fixed vocabularies everything else is built on:
//! chart types, gesture kinds, interactive regions, and the per-chart
//! operation catalogs. Operations are closed enums dispatched through
//! exhaustive `match`, so adding a variant is a compile-time event rather
//! than a runtime string lookup.

use std::fmt;

// ============================================================================
// Chart Types
// ============================================================================

/// One of the five demo chart types, each with its own dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Bar,
    Pie,
    Line,
    Heatmap,
    Scatterplot,
}

impl ChartType {
    pub const ALL: [ChartType; 5] = [
        ChartType::Bar,
        ChartType::Pie,
        ChartType::Line,
        ChartType::Heatmap,
        ChartType::Scatterplot,
    ];

    /// Stable key used in persisted snapshots
    pub fn key(self) -> &'static str {
        match self {
            ChartType::Bar => "bar",
            ChartType::Pie => "pie",
            ChartType::Line => "line",
            ChartType::Heatmap => "heatmap",
            ChartType::Scatterplot => "scatterplot",
        }
    }

    pub fn parse(key: &str) -> Option<ChartType> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// The fixed operation catalog for this chart type, in dispatch order.
    pub fn operations(self) -> &'static [Operation] {
        match self {
            ChartType::Bar => &BAR_OPERATIONS,
            ChartType::Pie => &PIE_OPERATIONS,
            ChartType::Line => &LINE_OPERATIONS,
            ChartType::Heatmap => &HEATMAP_OPERATIONS,
            ChartType::Scatterplot => &SCATTER_OPERATIONS,
        }
    }

    /// The fixed set of interactive regions for this chart type.
    pub fn regions(self) -> &'static [Region] {
        match self {
            ChartType::Bar => &[Region::BarArea, Region::BarTopEdge, Region::OutsideBars],
            ChartType::Pie => &[Region::SectionArea, Region::OutsideSections],
            ChartType::Line => &[Region::Point, Region::Line, Region::OutsideLines],
            ChartType::Heatmap => &[Region::Cell, Region::OutsideCells],
            ChartType::Scatterplot => &[Region::Point, Region::OutsidePoints],
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Gesture Kinds
// ============================================================================

/// A recognized gesture category.
///
/// `Pinch` is the neutral case (scale exactly 1) emitted by the recognizer;
/// it is never assignable and so never matches a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    Tap,
    DoubleTap,
    Hold,
    Pan,
    PinchIn,
    PinchOut,
    Pinch,
    SwipeLeft,
    SwipeRight,
}

impl GestureKind {
    /// Gestures offered in the binding matrix.
    pub const ASSIGNABLE: [GestureKind; 8] = [
        GestureKind::Tap,
        GestureKind::DoubleTap,
        GestureKind::Hold,
        GestureKind::Pan,
        GestureKind::PinchIn,
        GestureKind::PinchOut,
        GestureKind::SwipeLeft,
        GestureKind::SwipeRight,
    ];

    pub fn is_assignable(self) -> bool {
        !matches!(self, GestureKind::Pinch)
    }

    /// Human-readable label, also the persisted spelling.
    pub fn label(self) -> &'static str {
        match self {
            GestureKind::Tap => "tap",
            GestureKind::DoubleTap => "double tap",
            GestureKind::Hold => "hold",
            GestureKind::Pan => "pan",
            GestureKind::PinchIn => "pinch in",
            GestureKind::PinchOut => "pinch out",
            GestureKind::Pinch => "pinch",
            GestureKind::SwipeLeft => "swipe left",
            GestureKind::SwipeRight => "swipe right",
        }
    }

    pub fn parse(label: &str) -> Option<GestureKind> {
        Self::ASSIGNABLE.iter().copied().find(|g| g.label() == label)
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Regions
// ============================================================================

/// A named interactive zone within a chart.
///
/// Names are unique within one chart type; `Point` is shared by the line
/// and scatter charts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    // bar
    BarArea,
    BarTopEdge,
    OutsideBars,
    // pie
    SectionArea,
    OutsideSections,
    // line + scatter
    Point,
    Line,
    OutsideLines,
    // heatmap
    Cell,
    OutsideCells,
    // scatter
    OutsidePoints,
}

impl Region {
    /// Stable name used in persisted snapshots
    pub fn name(self) -> &'static str {
        match self {
            Region::BarArea => "barArea",
            Region::BarTopEdge => "barTopEdge",
            Region::OutsideBars => "outsideBars",
            Region::SectionArea => "sectionArea",
            Region::OutsideSections => "outsideSections",
            Region::Point => "point",
            Region::Line => "line",
            Region::OutsideLines => "outsideLines",
            Region::Cell => "cell",
            Region::OutsideCells => "outsideCells",
            Region::OutsidePoints => "outsidePoints",
        }
    }

    /// Parse a region name within the scope of one chart type.
    pub fn parse(chart: ChartType, name: &str) -> Option<Region> {
        chart.regions().iter().copied().find(|r| r.name() == name)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Bar chart mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarOp {
    AddToBar,
    RemoveFromBar,
    ChangeBar,
    AddBar,
    RemoveBar,
    MergeBars,
    ReorderBars,
}

/// Pie chart mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieOp {
    AddToSection,
    RemoveFromSection,
    ChangeSection,
    AddSection,
    RemoveSection,
}

/// Line chart mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineOp {
    AddPoint,
    RemovePoint,
    AddPointHeight,
    RemovePointHeight,
    ChangePointHeight,
    AddLine,
    RemoveLine,
}

/// Heatmap mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeatmapOp {
    AddTime,
    RemoveTime,
    AddColumn,
    RemoveColumn,
    MergeColumns,
    ChangeTime,
}

/// Scatterplot mutation operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScatterOp {
    AddPoint,
    RemovePoint,
    AddCategory,
    RemoveCategory,
    ChangePointLocation,
    ChangePointColor,
}

/// A named data-mutation capability, tagged by chart type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Bar(BarOp),
    Pie(PieOp),
    Line(LineOp),
    Heatmap(HeatmapOp),
    Scatter(ScatterOp),
}

const BAR_OPERATIONS: [Operation; 7] = [
    Operation::Bar(BarOp::AddToBar),
    Operation::Bar(BarOp::RemoveFromBar),
    Operation::Bar(BarOp::ChangeBar),
    Operation::Bar(BarOp::AddBar),
    Operation::Bar(BarOp::RemoveBar),
    Operation::Bar(BarOp::MergeBars),
    Operation::Bar(BarOp::ReorderBars),
];

const PIE_OPERATIONS: [Operation; 5] = [
    Operation::Pie(PieOp::AddToSection),
    Operation::Pie(PieOp::RemoveFromSection),
    Operation::Pie(PieOp::ChangeSection),
    Operation::Pie(PieOp::AddSection),
    Operation::Pie(PieOp::RemoveSection),
];

const LINE_OPERATIONS: [Operation; 7] = [
    Operation::Line(LineOp::AddPoint),
    Operation::Line(LineOp::RemovePoint),
    Operation::Line(LineOp::AddPointHeight),
    Operation::Line(LineOp::RemovePointHeight),
    Operation::Line(LineOp::ChangePointHeight),
    Operation::Line(LineOp::AddLine),
    Operation::Line(LineOp::RemoveLine),
];

const HEATMAP_OPERATIONS: [Operation; 6] = [
    Operation::Heatmap(HeatmapOp::AddTime),
    Operation::Heatmap(HeatmapOp::RemoveTime),
    Operation::Heatmap(HeatmapOp::AddColumn),
    Operation::Heatmap(HeatmapOp::RemoveColumn),
    Operation::Heatmap(HeatmapOp::MergeColumns),
    Operation::Heatmap(HeatmapOp::ChangeTime),
];

const SCATTER_OPERATIONS: [Operation; 6] = [
    Operation::Scatter(ScatterOp::AddPoint),
    Operation::Scatter(ScatterOp::RemovePoint),
    Operation::Scatter(ScatterOp::AddCategory),
    Operation::Scatter(ScatterOp::RemoveCategory),
    Operation::Scatter(ScatterOp::ChangePointLocation),
    Operation::Scatter(ScatterOp::ChangePointColor),
];

impl Operation {
    pub fn chart_type(self) -> ChartType {
        match self {
            Operation::Bar(_) => ChartType::Bar,
            Operation::Pie(_) => ChartType::Pie,
            Operation::Line(_) => ChartType::Line,
            Operation::Heatmap(_) => ChartType::Heatmap,
            Operation::Scatter(_) => ChartType::Scatterplot,
        }
    }

    /// Stable name used in persisted snapshots, unique within a chart type.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Bar(op) => match op {
                BarOp::AddToBar => "addToBar",
                BarOp::RemoveFromBar => "removeFromBar",
                BarOp::ChangeBar => "changeBar",
                BarOp::AddBar => "addBar",
                BarOp::RemoveBar => "removeBar",
                BarOp::MergeBars => "mergeBars",
                BarOp::ReorderBars => "reorderBars",
            },
            Operation::Pie(op) => match op {
                PieOp::AddToSection => "addToSection",
                PieOp::RemoveFromSection => "removeFromSection",
                PieOp::ChangeSection => "changeSection",
                PieOp::AddSection => "addSection",
                PieOp::RemoveSection => "removeSection",
            },
            Operation::Line(op) => match op {
                LineOp::AddPoint => "addPoint",
                LineOp::RemovePoint => "removePoint",
                LineOp::AddPointHeight => "addPointHeight",
                LineOp::RemovePointHeight => "removePointHeight",
                LineOp::ChangePointHeight => "changePointHeight",
                LineOp::AddLine => "addLine",
                LineOp::RemoveLine => "removeLine",
            },
            Operation::Heatmap(op) => match op {
                HeatmapOp::AddTime => "addTime",
                HeatmapOp::RemoveTime => "removeTime",
                HeatmapOp::AddColumn => "addColumn",
                HeatmapOp::RemoveColumn => "removeColumn",
                HeatmapOp::MergeColumns => "mergeColumns",
                HeatmapOp::ChangeTime => "changeTime",
            },
            Operation::Scatter(op) => match op {
                ScatterOp::AddPoint => "addPoint",
                ScatterOp::RemovePoint => "removePoint",
                ScatterOp::AddCategory => "addCategory",
                ScatterOp::RemoveCategory => "removeCategory",
                ScatterOp::ChangePointLocation => "changePointLocation",
                ScatterOp::ChangePointColor => "changePointColor",
            },
        }
    }

    /// Parse an operation name within the scope of one chart type.
    pub fn parse(chart: ChartType, name: &str) -> Option<Operation> {
        chart.operations().iter().copied().find(|o| o.name() == name)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
