//! Game engine - owns the grid, the active piece and the score
//!
//! State machine: `Spawning -> Falling -> {Spawning | GameOver}`. A timer calls
//! [`GameEngine::tick`] once per gravity step and input calls
//! [`GameEngine::move_by`] / [`GameEngine::rotate`] (or
//! [`GameEngine::apply_action`]). Once the game is over every mutating call is
//! a no-op.

use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::pieces::spawn_piece;
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, GameSummary};
use crate::types::{GameAction, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No active piece; the next tick spawns one
    Spawning,
    /// A piece is falling
    Falling,
    /// Terminal: a new piece could not be placed
    GameOver,
}

/// What a call to [`GameEngine::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new piece entered the grid
    Spawned(PieceKind),
    /// The active piece moved down one row
    Fell,
    /// The active piece settled, rows were cleared and the next piece spawned
    Locked { lines_cleared: u32 },
    /// This tick ended the game
    GameOver,
    /// The game was already over; nothing changed
    Halted,
}

/// One game session
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    grid: Grid,
    active: Option<Piece>,
    rng: SimpleRng,
    score: u32,
    pieces_spawned: u32,
    game_over: bool,
}

impl GameEngine {
    /// Create an engine with an empty grid and no active piece
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: EngineConfig) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            active: None,
            rng: SimpleRng::new(config.seed),
            score: 0,
            pieces_spawned: 0,
            game_over: false,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup and tools.
    ///
    /// Writing cells under the active piece breaks the no-overlap invariant
    /// and makes the next merge panic.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn state(&self) -> EngineState {
        if self.game_over {
            EngineState::GameOver
        } else if self.active.is_some() {
            EngineState::Falling
        } else {
            EngineState::Spawning
        }
    }

    /// One gravity step
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over {
            return TickOutcome::Halted;
        }

        let Some(mut piece) = self.active.take() else {
            let kind = self.rng.pick_kind();
            return if self.spawn_kind(kind) {
                TickOutcome::Spawned(kind)
            } else {
                TickOutcome::GameOver
            };
        };

        if self.grid.can_place(&piece, 0, 1) {
            piece.translate(0, 1);
            self.active = Some(piece);
            return TickOutcome::Fell;
        }

        self.grid.merge(&piece);
        let lines_cleared = self.grid.clear_full_rows();
        self.score += lines_cleared;
        debug!(
            kind = piece.kind.as_str(),
            row = piece.anchor.row,
            col = piece.anchor.col,
            lines = lines_cleared,
            score = self.score,
            "piece locked"
        );

        let kind = self.rng.pick_kind();
        if self.spawn_kind(kind) {
            TickOutcome::Locked { lines_cleared }
        } else {
            TickOutcome::GameOver
        }
    }

    /// Spawn `kind` at `(row 0, col width / 2)`, replacing any active piece.
    ///
    /// If any filled cell of the new piece is blocked the game ends instead
    /// and false is returned.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.game_over {
            return false;
        }

        let piece = spawn_piece(kind, self.config.spawn_col());
        if !self.grid.can_place(&piece, 0, 0) {
            self.active = None;
            self.game_over = true;
            info!(
                kind = kind.as_str(),
                score = self.score,
                pieces = self.pieces_spawned,
                "spawn blocked, game over"
            );
            return false;
        }

        debug!(kind = kind.as_str(), col = piece.anchor.col, "piece spawned");
        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    /// Translate the active piece by `(dcol, drow)` if every filled cell fits.
    /// Returns false (and changes nothing) otherwise.
    pub fn move_by(&mut self, dcol: i16, drow: i16) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if !self.grid.can_place(active, dcol, drow) {
            return false;
        }
        active.translate(dcol, drow);
        true
    }

    /// Rotate the active piece clockwise in place, without wall kicks.
    ///
    /// The rotation is tried on a copy first and rejected if any filled cell
    /// would leave the grid or overlap a settled cell.
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let mut probe = active.duplicate();
        probe.rotate();
        if !self.grid.can_place(&probe, 0, 0) {
            return false;
        }
        active.rotate();
        true
    }

    /// Apply a player action. Returns whether the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0),
            GameAction::MoveRight => self.move_by(1, 0),
            GameAction::SoftDrop => {
                // Two separate steps: the first may land even if the second is blocked
                let first = self.move_by(0, 1);
                let second = self.move_by(0, 1);
                first || second
            }
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Fill `out` with the current state, reusing its allocations
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.board.clear();
        out.board.extend_from_slice(self.grid.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.score = self.score;
        out.pieces_spawned = self.pieces_spawned;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            pieces_spawned: self.pieces_spawned,
            game_over: self.game_over,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::from_valid_config(EngineConfig::default())
    }
}
