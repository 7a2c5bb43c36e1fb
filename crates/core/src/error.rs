//! Error types for the blockfall core
//!
//! Gameplay never fails: blocked moves and rotations are reported as `false`.
//! These errors only surface when building shapes or engines from caller input.

use thiserror::Error;

use crate::config::{MAX_SIDE, MIN_HEIGHT, MIN_WIDTH};
use crate::shape::MAX_SHAPE_SIDE;

/// Errors raised when building a [`Shape`](crate::Shape) from a matrix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The matrix has no rows or no columns
    #[error("shape matrix is empty")]
    Empty,

    /// A row has a different length than the first row
    #[error("shape row {row} has {len} columns, expected {expected}")]
    Jagged {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The matrix does not fit the fixed shape storage
    #[error("shape is {rows}x{cols}, at most {max}x{max} is supported", max = MAX_SHAPE_SIDE)]
    TooLarge { rows: usize, cols: usize },
}

/// Errors raised by [`EngineConfig::validate`](crate::EngineConfig::validate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid width {0} is out of range ({min}..={max})", min = MIN_WIDTH, max = MAX_SIDE)]
    Width(u16),

    #[error("grid height {0} is out of range ({min}..={max})", min = MIN_HEIGHT, max = MAX_SIDE)]
    Height(u16),
}
