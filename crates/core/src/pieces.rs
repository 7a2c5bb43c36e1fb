//! Pieces module - the fixed catalog of seven templates
//!
//! Matrices are reproduced exactly (including their empty padding rows), so
//! silhouettes and rotation pivots behave the same in every build.

use crate::piece::{Piece, Position};
use crate::shape::Shape;
use crate::types::{PieceKind, Rgb};

/// Template matrix for a piece kind
pub fn template_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => Shape::from_matrix([[0, 0, 0], [0, 1, 0], [1, 1, 1]]),
        PieceKind::I => Shape::from_matrix([
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::L => Shape::from_matrix([[0, 0, 1], [1, 1, 1], [0, 0, 0], [0, 0, 0]]),
        PieceKind::J => Shape::from_matrix([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        PieceKind::O => Shape::from_matrix([[1, 1], [1, 1]]),
        PieceKind::S => Shape::from_matrix([[0, 0, 0], [0, 1, 1], [1, 1, 0]]),
        PieceKind::Z => Shape::from_matrix([[0, 0, 0], [1, 1, 0], [0, 1, 1]]),
    }
}

/// Display color for a piece kind
pub fn template_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::T => Rgb::new(0x3c, 0xc7, 0xd6),
        PieceKind::I => Rgb::new(0xfb, 0xb4, 0x14),
        PieceKind::L => Rgb::new(0xb0, 0x44, 0x97),
        PieceKind::J => Rgb::new(0x7e, 0x57, 0xc2),
        PieceKind::O => Rgb::new(0x39, 0x93, 0xd0),
        PieceKind::S => Rgb::new(0xed, 0x65, 0x2f),
        PieceKind::Z => Rgb::new(0x95, 0xc4, 0x3d),
    }
}

/// Fresh template piece anchored at the origin
pub fn template(kind: PieceKind) -> Piece {
    Piece::new(
        kind,
        template_shape(kind),
        template_color(kind),
        Position::new(0, 0),
    )
}

/// Piece for `kind` with its anchor at the spawn cell `(row 0, spawn_col)`
pub fn spawn_piece(kind: PieceKind, spawn_col: i16) -> Piece {
    let mut piece = template(kind).duplicate();
    piece.anchor = Position::new(0, spawn_col);
    piece
}
