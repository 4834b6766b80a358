//! Flat 2D grid storage.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dense 2D grid of cell values, rows = time, columns = space.
///
/// Storage is a single flat buffer in row-major order. Reads outside the
/// grid return 0.0 and writes outside are ignored, so callers never have to
/// special-case the boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Grid {
    /// Cell values, row-major.
    data: Vec<f64>,
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
}

impl Grid {
    /// Creates a zero-filled grid.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Reads a cell, or 0.0 when out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col]
        } else {
            0.0
        }
    }

    /// Writes a cell; out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Returns one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the whole buffer, row-major.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Extracts a sub-grid.
    ///
    /// Ranges are clamped to the grid, so an oversized window simply yields
    /// fewer cells.
    pub fn crop(&self, row_range: Range<usize>, col_range: Range<usize>) -> Grid {
        let r0 = row_range.start.min(self.rows);
        let r1 = row_range.end.min(self.rows);
        let c0 = col_range.start.min(self.cols);
        let c1 = col_range.end.min(self.cols);

        let mut out = Grid::zeros(r1.saturating_sub(r0), c1.saturating_sub(c0));
        for r in r0..r1 {
            let src = &self.row(r)[c0..c1];
            let start = (r - r0) * out.cols;
            out.data[start..start + src.len()].copy_from_slice(src);
        }
        out
    }

    /// Counts cells with a nonzero value.
    pub fn population(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    /// Renders the grid as text, one character per cell.
    ///
    /// Nonzero cells become blocks; zero cells become spaces. Handy for
    /// eyeballing a pattern in a terminal.
    pub fn to_string_art(&self) -> String {
        let mut result = String::with_capacity((self.cols + 1) * self.rows);
        for r in 0..self.rows {
            for &cell in self.row(r) {
                result.push(if cell != 0.0 { '█' } else { ' ' });
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let grid = Grid::zeros(3, 7);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 7);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::zeros(4, 4);
        grid.set(1, 2, 5.0);
        assert_eq!(grid.get(1, 2), 5.0);
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn test_out_of_range_reads_zero() {
        let grid = Grid::zeros(2, 2);
        assert_eq!(grid.get(5, 0), 0.0);
        assert_eq!(grid.get(0, 5), 0.0);
    }

    #[test]
    fn test_out_of_range_write_ignored() {
        let mut grid = Grid::zeros(2, 2);
        grid.set(5, 5, 1.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_crop() {
        let mut grid = Grid::zeros(4, 6);
        for c in 0..6 {
            grid.set(1, c, c as f64);
        }
        let sub = grid.crop(1..3, 2..5);
        assert_eq!((sub.rows(), sub.cols()), (2, 3));
        assert_eq!(sub.row(0), [2.0, 3.0, 4.0]);
        assert_eq!(sub.row(1), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_crop_clamps() {
        let grid = Grid::zeros(2, 2);
        let sub = grid.crop(0..10, 1..10);
        assert_eq!((sub.rows(), sub.cols()), (2, 1));
    }

    #[test]
    fn test_to_string_art() {
        let mut grid = Grid::zeros(2, 3);
        grid.set(0, 1, 1.0);
        assert_eq!(grid.to_string_art(), " █ \n   \n");
    }
}
