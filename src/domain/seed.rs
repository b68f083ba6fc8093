//! Starting-state handling.
//!
//! Seeds arrive as '0'/'1' strings or boolean vectors of any positive
//! length. A seed shorter than the grid width is tiled by integer
//! repetition and then left-padded with dead cells to the exact width; a
//! longer one is truncated. Width conformance happens once, before any
//! row is computed.

use crate::error::EngineError;
use rand::Rng;

/// Parse a '0'/'1' string into a boolean row.
pub fn parse_bit_string(s: &str) -> Result<Vec<bool>, EngineError> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(EngineError::InvalidStateChar { found, position }),
        })
        .collect()
}

/// Conform a starting state to exactly `cols` cells.
///
/// Shorter states are repeated `cols / len` times and left-padded with
/// dead cells; longer states keep their first `cols` cells. Empty states
/// are rejected.
pub fn conform_state(state: &[bool], cols: usize) -> Result<Vec<bool>, EngineError> {
    if state.is_empty() {
        return Err(EngineError::EmptyStartingState);
    }
    if state.len() >= cols {
        return Ok(state[..cols].to_vec());
    }
    let repeats = cols / state.len();
    let mut tiled = Vec::with_capacity(cols);
    tiled.resize(cols - repeats * state.len(), false);
    for _ in 0..repeats {
        tiled.extend_from_slice(state);
    }
    Ok(tiled)
}

/// Require a row (prior state or continuation seed) to be exactly `cols` wide.
pub fn require_width(row: &[bool], cols: usize) -> Result<(), EngineError> {
    if row.len() == cols {
        Ok(())
    } else {
        Err(EngineError::ShapeMismatch {
            expected: cols,
            actual: row.len(),
        })
    }
}

/// Random starting state with the given live-cell density in [0, 1].
pub fn random_state(cols: usize, density: f64) -> Vec<bool> {
    let mut rng = rand::rng();
    (0..cols).map(|_| rng.random_bool(density)).collect()
}
