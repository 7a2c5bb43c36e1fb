//! Terminal rendering for the game.
//!
//! A small game-oriented rendering layer: no widget toolkit, just a
//! framebuffer of styled characters that a view fills from a
//! [`core::GameSnapshot`] and a renderer flushes to the terminal.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer mapping (2 columns per cell)
//! - [`renderer`]: crossterm output with run-based diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
