//! Terminal input (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::GameAction`]. Auto-repeat events from a held key are
//! treated like fresh presses, so no repeat timing lives here.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
