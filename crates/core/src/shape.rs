//! Shape module - occupancy matrices of the piece templates
//!
//! A shape is a rectangular `rows x cols` boolean matrix (row 0 at the top),
//! stored flat in row-major order. Shapes are values: rotating returns a new
//! matrix and never touches the original.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::ShapeError;

/// Largest supported number of rows or columns
pub const MAX_SHAPE_SIDE: usize = 4;

/// Rectangular occupancy matrix of a piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    /// Row-major cells (r * cols + c)
    cells: ArrayVec<bool, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>,
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// Any non-zero value counts as filled. Rows must all have the same length.
    ///
    /// ```
    /// use tui_blockfall_core::Shape;
    ///
    /// let s = Shape::from_rows(&[[1u8, 1, 0], [0, 1, 1]]).unwrap();
    /// assert_eq!((s.rows(), s.cols()), (2, 3));
    ///
    /// let jagged: [&[u8]; 2] = [&[1, 1], &[1]];
    /// assert!(Shape::from_rows(&jagged).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let expected = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if rows.is_empty() || expected == 0 {
            return Err(ShapeError::Empty);
        }
        for (row, values) in rows.iter().enumerate() {
            let len = values.as_ref().len();
            if len != expected {
                return Err(ShapeError::Jagged { row, len, expected });
            }
        }
        if rows.len() > MAX_SHAPE_SIDE || expected > MAX_SHAPE_SIDE {
            return Err(ShapeError::TooLarge {
                rows: rows.len(),
                cols: expected,
            });
        }

        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&v| v != 0))
            .collect();
        Ok(Self {
            rows: rows.len() as u8,
            cols: expected as u8,
            cells,
        })
    }

    /// Build a shape from a fixed-size matrix known at compile time.
    pub(crate) fn from_matrix<const R: usize, const C: usize>(matrix: [[u8; C]; R]) -> Self {
        assert!(
            R > 0 && C > 0 && R <= MAX_SHAPE_SIDE && C <= MAX_SHAPE_SIDE,
            "template matrix must be 1..={MAX_SHAPE_SIDE} on each side"
        );
        Self {
            rows: R as u8,
            cols: C as u8,
            cells: matrix.iter().flatten().map(|&v| v != 0).collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether cell `(r, c)` is filled. Out-of-matrix cells are empty.
    pub fn is_filled(&self, r: usize, c: usize) -> bool {
        r < self.rows() && c < self.cols() && self.cells[r * self.cols() + c]
    }

    /// `(r, c)` of every filled cell, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// 90° clockwise rotation: `new[i][j] = old[rows - 1 - j][i]`.
    ///
    /// An `R x C` shape becomes `C x R`; four rotations give back the original.
    pub fn rotate_clockwise(&self) -> Shape {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = ArrayVec::new();
        for i in 0..cols {
            for j in 0..rows {
                cells.push(self.cells[(rows - 1 - j) * cols + i]);
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                f.write_str(if self.is_filled(r, c) { "#" } else { "." })?;
            }
            if r + 1 < self.rows() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
