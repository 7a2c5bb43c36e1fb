//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the falling-block game state machine and nothing else: no
//! terminal, no timers, no input devices. Outer layers drive it:
//!
//! - a timer calls [`GameEngine::tick`] once per gravity step
//! - input calls [`GameEngine::apply_action`] on key events
//! - a renderer reads [`GameEngine::snapshot`] once per frame
//!
//! # Module Structure
//!
//! - [`shape`]: rectangular occupancy matrices and clockwise rotation
//! - [`piece`]: a shape with a color and a grid anchor
//! - [`pieces`]: the seven templates and their colors
//! - [`grid`]: the playfield, placement checks, merge and line clears
//! - [`engine`]: spawning, gravity, moves, rotation, scoring, game over
//! - [`rng`]: seeded uniform template picker
//! - [`clock`]: frame counter for the gravity cadence
//! - [`snapshot`]: read-only views for renderers
//!
//! # Rules
//!
//! - New pieces spawn with their top-left anchor at row 0, column `width / 2`
//! - Each gravity step moves the piece down one row or, if blocked, settles it
//! - Every cleared row scores one point
//! - Rotation is clockwise around the bounding box, rejected on collision (no kicks)
//! - The game ends when a new piece cannot be placed
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{EngineConfig, GameEngine, TickOutcome};
//! use tui_blockfall_core::types::GameAction;
//!
//! let mut engine = GameEngine::new(EngineConfig::default().with_seed(7)).unwrap();
//! assert!(matches!(engine.tick(), TickOutcome::Spawned(_)));
//!
//! engine.apply_action(GameAction::MoveLeft);
//! engine.apply_action(GameAction::SoftDrop);
//! assert_eq!(engine.tick(), TickOutcome::Fell);
//! assert_eq!(engine.score(), 0);
//! ```

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use tui_blockfall_types as types;

pub use clock::GravityClock;
pub use config::EngineConfig;
pub use engine::{EngineState, GameEngine, TickOutcome};
pub use error::{ConfigError, ShapeError};
pub use grid::Grid;
pub use piece::{Piece, Position};
pub use pieces::{spawn_piece, template, template_color, template_shape};
pub use rng::SimpleRng;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot, GameSummary};
