//! Grid module - the playfield
//!
//! A fixed `width x height` matrix of cells stored flat in row-major order
//! (`row * width + col`), row 0 at the top. Dimensions never change: clearing
//! a row removes it and inserts an empty row at the top.
//!
//! Query methods take `(col, row)` to match the `(dcol, drow)` order of moves.

use crate::piece::Piece;
use crate::types::Cell;

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// If either side is 0 or larger than `i16::MAX`, the largest coordinate
    /// pieces can address. [`EngineConfig::validate`](crate::EngineConfig::validate)
    /// keeps engine grids well inside that range.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            (1..=i16::MAX as u16).contains(&width) && (1..=i16::MAX as u16).contains(&height),
            "grid size {}x{} must be 1..={} on each side",
            width,
            height,
            i16::MAX
        );
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn index(&self, col: i16, row: i16) -> Option<usize> {
        if !self.is_inside(col, row) {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// `0 <= col < width` and `0 <= row < height`
    pub fn is_inside(&self, col: i16, row: i16) -> bool {
        col >= 0 && row >= 0 && (col as u16) < self.width && (row as u16) < self.height
    }

    /// Whether the cell is occupied. Out-of-range coordinates count as blocked.
    pub fn is_occupied(&self, col: i16, row: i16) -> bool {
        !matches!(self.get(col, row), Some(None))
    }

    /// Cell at `(col, row)`, `None` when out of range
    pub fn get(&self, col: i16, row: i16) -> Option<Cell> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Set cell at `(col, row)`. Returns false if out of range.
    pub fn set(&mut self, col: i16, row: i16, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether every filled cell of `piece`, shifted by `(dcol, drow)`, lands
    /// inside the grid on an empty cell. Empty shape cells are not checked.
    /// Shifts that overflow `i16` never fit.
    pub fn can_place(&self, piece: &Piece, dcol: i16, drow: i16) -> bool {
        piece.cells().all(|p| match p.checked_offset(dcol, drow) {
            Some(q) => self.is_inside(q.col, q.row) && !self.is_occupied(q.col, q.row),
            None => false,
        })
    }

    /// Commit the piece's filled cells into the grid.
    ///
    /// # Panics
    ///
    /// If any filled cell is outside the grid or already occupied. Callers
    /// check [`can_place`](Self::can_place) first.
    pub fn merge(&mut self, piece: &Piece) {
        for p in piece.cells() {
            assert!(
                self.is_inside(p.col, p.row) && !self.is_occupied(p.col, p.row),
                "merge of {:?} at {:?} overlaps cell (row {}, col {})",
                piece.kind,
                piece.anchor,
                p.row,
                p.col
            );
        }
        for p in piece.cells() {
            self.set(p.col, p.row, Some(piece.color));
        }
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|c| c.is_some()))
    }

    /// Row slice, `None` when out of range
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        let width = self.width as usize;
        self.cells.get(row * width..(row + 1) * width)
    }

    /// Remove every full row and insert an empty row at the top for each.
    /// Returns the number of rows removed.
    ///
    /// Rows are compacted bottom-up in place, which gives the same result as
    /// removing full rows one at a time and re-scanning.
    pub fn clear_full_rows(&mut self) -> u32 {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut cleared = 0;
        let mut write_row = height;

        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        self.cells[..write_row * width].fill(None);
        cleared
    }

    /// Flat row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
