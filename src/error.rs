//! Engine error taxonomy.
//!
//! Every error is detected at the boundary of a run, before any row is
//! computed. The engine either returns a fully valid grid or fails with
//! no partial output.

use thiserror::Error;

/// Errors produced while validating or running an automaton generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Rule number outside the 8-bit rule space.
    #[error("rule number must be between 0 and 255, got {0}")]
    RuleOutOfRange(u32),

    /// Zero rows or zero columns requested.
    #[error("grid dimensions must be positive, got {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },

    /// An empty starting state cannot be tiled to any width.
    #[error("starting state must contain at least one cell")]
    EmptyStartingState,

    /// A character other than '0' or '1' in a state string.
    #[error("invalid character {found:?} at position {position} in state string")]
    InvalidStateChar { found: char, position: usize },

    /// A prior state or continuation row whose width differs from the grid.
    #[error("row width mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
