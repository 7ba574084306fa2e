//! Mapping between surface units and terminal cells

use serde::{Deserialize, Serialize};

/// Size of one terminal cell in surface units
///
/// The cloud works in pixel-like units; a cell is usually about twice as
/// tall as it is wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: 8.0,
            cell_height: 16.0,
        }
    }
}

impl CellMetrics {
    /// Surface extent of a `columns` x `rows` grid
    pub fn surface_size(&self, columns: u16, rows: u16) -> (f64, f64) {
        (
            columns as f64 * self.cell_width,
            rows as f64 * self.cell_height,
        )
    }

    /// Nearest cell corner to a surface point, or whole cells spanned by an
    /// offset. May lie off the grid.
    pub fn cell_origin(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x / self.cell_width).round() as i32,
            (y / self.cell_height).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_size() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.surface_size(80, 24), (640.0, 384.0));
    }

    #[test]
    fn test_cell_origin_rounds() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.cell_origin(0.0, 0.0), (0, 0));
        assert_eq!(metrics.cell_origin(11.0, 25.0), (1, 2));
        assert_eq!(metrics.cell_origin(-13.0, -7.0), (-2, 0));
    }

    #[test]
    fn test_offsets_span_whole_cells() {
        let metrics = CellMetrics::default();
        assert_eq!(metrics.cell_origin(0.0, 5.0), (0, 0));
        assert_eq!(metrics.cell_origin(8.0, 12.0), (1, 1));
    }
}
