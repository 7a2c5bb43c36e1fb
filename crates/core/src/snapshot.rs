//! Read-only views of the engine for renderers and tools

use serde::Serialize;

use crate::piece::{Piece, Position};
use crate::types::{Cell, PieceKind, Rgb};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Rgb,
    pub anchor: Position,
    /// Absolute positions of the filled cells
    pub cells: Vec<Position>,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            color: piece.color,
            anchor: piece.anchor,
            cells: piece.cells().collect(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Settled cells, row-major, row 0 at the top
    pub board: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub pieces_spawned: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Settled cell at `(col, row)`, `None` when out of range
    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.board
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }
}

/// End-of-session numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: u32,
    pub pieces_spawned: u32,
    pub game_over: bool,
}
