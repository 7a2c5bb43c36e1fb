//! Engine configuration

use crate::error::ConfigError;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Narrowest grid where every template fits at the spawn column
pub const MIN_WIDTH: u16 = 8;

/// Shortest grid (the tallest template is four rows)
pub const MIN_HEIGHT: u16 = 4;

/// Largest accepted grid side
pub const MAX_SIDE: u16 = 64;

/// Runtime parameters of a [`GameEngine`](crate::GameEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Columns in the playfield
    pub width: u16,
    /// Rows in the playfield
    pub height: u16,
    /// Seed for the piece picker
    pub seed: u32,
}

impl EngineConfig {
    pub fn new(width: u16, height: u16, seed: u32) -> Self {
        Self {
            width,
            height,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIDTH..=MAX_SIDE).contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !(MIN_HEIGHT..=MAX_SIDE).contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        Ok(())
    }

    /// Column of the spawn anchor
    pub fn spawn_col(&self) -> i16 {
        (self.width / 2) as i16
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT, 1)
    }
}
