//! The in-memory dataset store: five independent mutable collections.

use super::records::{BarRecord, LinePoint, PieSlice, PointId, ScatterPoint};

/// Holds the current dataset for every chart type.
///
/// Created at startup from defaults (or a restored snapshot) and mutated in
/// place by the mutation operations. Single-threaded; the dispatch engine is
/// the only writer.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetStore {
    pub bar: Vec<BarRecord>,
    pub pie: Vec<PieSlice>,
    pub line: Vec<LinePoint>,
    /// Rows of columns; all rows share the same column count.
    pub heatmap: Vec<Vec<i64>>,
    pub scatter: Vec<ScatterPoint>,
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::defaults()
    }
}

impl DatasetStore {
    /// The hardcoded default datasets, also the reset target.
    pub fn defaults() -> Self {
        Self {
            bar: vec![
                BarRecord::new("Fantasy", 12),
                BarRecord::new("Mystery", 8),
                BarRecord::new("Sci-Fi", 15),
                BarRecord::new("Non-fiction", 10),
            ],
            pie: vec![
                PieSlice::new("snacks", 2),
                PieSlice::new("homemade", 3),
                PieSlice::new("fruit", 1),
                PieSlice::new("outside", 5),
            ],
            line: vec![
                LinePoint::new(1, 10),
                LinePoint::new(2, 12),
                LinePoint::new(3, 15),
                LinePoint::new(4, 18),
                LinePoint::new(5, 20),
            ],
            heatmap: vec![
                vec![30, 45, 20, 15],
                vec![25, 50, 35, 10],
                vec![40, 30, 20, 10],
                vec![20, 40, 25, 15],
                vec![30, 35, 20, 15],
                vec![25, 45, 30, 10],
                vec![20, 30, 25, 15],
            ],
            scatter: vec![
                ScatterPoint::new(2, 15, "Food"),
                ScatterPoint::new(4, 30, "Utilities"),
                ScatterPoint::new(3, 20, "Entertainment"),
            ],
        }
    }

    /// Restore every dataset to its default contents.
    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    /// Dataset equality ignoring scatter point ids.
    ///
    /// Every construction mints fresh ids, so two independently built
    /// stores are never `==` even when they hold the same data. Scatter
    /// points compare by `(x, y, category)` here.
    pub fn same_data(&self, other: &DatasetStore) -> bool {
        self.bar == other.bar
            && self.pie == other.pie
            && self.line == other.line
            && self.heatmap == other.heatmap
            && self.scatter.len() == other.scatter.len()
            && self
                .scatter
                .iter()
                .zip(&other.scatter)
                .all(|(a, b)| (a.x, a.y, &a.category) == (b.x, b.y, &b.category))
    }

    // ==================== Natural-Key Lookups ====================

    pub fn bar_mut(&mut self, subject: &str) -> Option<&mut BarRecord> {
        self.bar.iter_mut().find(|b| b.subject == subject)
    }

    pub fn bar_index(&self, subject: &str) -> Option<usize> {
        self.bar.iter().position(|b| b.subject == subject)
    }

    pub fn slice_mut(&mut self, task: &str) -> Option<&mut PieSlice> {
        self.pie.iter_mut().find(|s| s.task == task)
    }

    pub fn line_point_mut(&mut self, day: i64) -> Option<&mut LinePoint> {
        self.line.iter_mut().find(|p| p.day == day)
    }

    pub fn scatter_mut(&mut self, id: PointId) -> Option<&mut ScatterPoint> {
        self.scatter.iter_mut().find(|p| p.id == id)
    }

    pub fn scatter_index(&self, id: PointId) -> Option<usize> {
        self.scatter.iter().position(|p| p.id == id)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut i64> {
        self.heatmap.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Column count of the heatmap grid; 0 if there are no rows.
    pub fn heatmap_columns(&self) -> usize {
        self.heatmap.first().map(Vec::len).unwrap_or(0)
    }

    /// Distinct scatter categories in first-appearance order.
    pub fn scatter_categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for p in &self.scatter {
            if !out.iter().any(|c| c == &p.category) {
                out.push(p.category.clone());
            }
        }
        out
    }
}
