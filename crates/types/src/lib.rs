//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no game logic, so the core engine, the
//! terminal renderer and the input mapping can all depend on it.
//!
//! # Playfield Dimensions
//!
//! - **Width**: 15 columns (indexed 0-14)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: row 0, column `width / 2`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_SECOND` | 30 | Render cadence |
//! | `GRAVITY_FRAMES` | 10 | Frames between gravity steps (~333ms) |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::O.as_str(), "O");
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (15, 20));
//! ```

use serde::Serialize;

/// Default playfield width in cells
pub const GRID_WIDTH: u16 = 15;

/// Default playfield height in cells
pub const GRID_HEIGHT: u16 = 20;

/// Render frames per second
pub const FRAMES_PER_SECOND: u32 = 30;

/// Frames between two gravity steps
pub const GRAVITY_FRAMES: u32 = 10;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the playfield
///
/// - `None`: empty
/// - `Some(color)`: occupied by a settled block of that color
pub type Cell = Option<Rgb>;

/// The seven piece templates, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    T,
    I,
    L,
    J,
    O,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// One-letter name, as shown in the side panel and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::I => "I",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Discrete player actions delivered by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Two independent single-row moves down
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
}
