//! Piece module - a shape bound to a color and a grid anchor

use serde::Serialize;

use crate::shape::Shape;
use crate::types::{PieceKind, Rgb};

/// Grid coordinate, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Position {
    pub row: i16,
    pub col: i16,
}

impl Position {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Position shifted by a column and a row delta, `None` on `i16` overflow
    pub fn checked_offset(self, dcol: i16, drow: i16) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(drow)?,
            self.col.checked_add(dcol)?,
        ))
    }

    /// Position shifted by a column and a row delta, clamped to the `i16` range
    pub fn offset(self, dcol: i16, drow: i16) -> Self {
        Self::new(self.row.saturating_add(drow), self.col.saturating_add(dcol))
    }
}

/// A falling piece
///
/// `anchor` is the top-left corner of the shape's bounding box. Nothing here
/// checks bounds or collisions; that is the grid's and engine's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
    pub anchor: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, shape: Shape, color: Rgb, anchor: Position) -> Self {
        Self {
            kind,
            shape,
            color,
            anchor,
        }
    }

    /// Independent copy: moving or rotating the copy never affects `self`.
    pub fn duplicate(&self) -> Piece {
        self.clone()
    }

    /// Shift the anchor by `(dcol, drow)`
    pub fn translate(&mut self, dcol: i16, drow: i16) {
        self.anchor = self.anchor.offset(dcol, drow);
    }

    /// Replace the shape by its clockwise rotation, keeping the anchor
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotate_clockwise();
    }

    /// Absolute grid positions of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.shape
            .filled_cells()
            .map(move |(r, c)| self.anchor.offset(c as i16, r as i16))
    }
}
