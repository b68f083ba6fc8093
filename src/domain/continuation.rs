//! Splitting one logical sequence across independent runs.
//!
//! Very large generations are produced in bounded-memory passes: the
//! trailing two rows of one grid seed the next run. Because the automaton
//! is second-order, those two rows carry the complete state. Swapping
//! their roles replays the sequence backwards instead.

use super::engine::RunConfig;
use super::{BoundaryPolicy, Grid};
use crate::error::EngineError;

/// Seed material extracted from a finished grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Continuation {
    /// Row 0 of the next run
    pub starting_state: Vec<bool>,
    /// Virtual row before row 0 of the next run
    pub prior_state: Vec<bool>,
}

impl Continuation {
    /// Seed a forward continuation: the next run's row 0 duplicates the
    /// grid's last row, and its first computed row is the row the original
    /// sequence would have produced next.
    pub fn seed_next(grid: &Grid) -> Result<Self, EngineError> {
        let (last, second_last) = trailing_rows(grid)?;
        Ok(Self {
            starting_state: last,
            prior_state: second_last,
        })
    }

    /// Seed a backward replay: with the trailing rows swapped, the next
    /// run walks the sequence in reverse, reproducing row N-2, N-3, ...
    /// of the original.
    pub fn seed_reversed(grid: &Grid) -> Result<Self, EngineError> {
        let (last, second_last) = trailing_rows(grid)?;
        Ok(Self {
            starting_state: second_last,
            prior_state: last,
        })
    }

    /// Turn the seed into a full run configuration.
    pub fn into_config(self, rule_num: u32, rows: usize, boundary: BoundaryPolicy) -> RunConfig {
        let cols = self.starting_state.len();
        RunConfig {
            rule_num,
            rows,
            cols,
            starting_state: self.starting_state,
            prior_state: Some(self.prior_state),
            boundary,
        }
    }
}

/// Last and second-to-last rows; a continuation needs two finalized rows.
fn trailing_rows(grid: &Grid) -> Result<(Vec<bool>, Vec<bool>), EngineError> {
    let (rows, cols) = grid.dimensions();
    if rows < 2 {
        return Err(EngineError::InvalidDimensions { rows, cols });
    }
    Ok((grid.row(rows - 1).to_vec(), grid.row(rows - 2).to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule_num: u32, rows: usize) -> Grid {
        RunConfig::from_bit_strings(rule_num, rows, 7, "0001000", None)
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn test_forward_continuation_composes() {
        // One 9-row run vs a 5-row run continued for 5 more: the split
        // pair shares the boundary row and matches from there on.
        let full = run(122, 9);
        let first = run(122, 5);
        let second = Continuation::seed_next(&first)
            .unwrap()
            .into_config(122, 5, BoundaryPolicy::Wrap)
            .run()
            .unwrap();
        for j in 0..5 {
            assert_eq!(second.row(j), full.row(4 + j), "continued row {}", j);
        }
    }

    #[test]
    fn test_reversed_seed_replays_backwards() {
        let first = run(122, 5);
        let reversed = Continuation::seed_reversed(&first)
            .unwrap()
            .into_config(122, 4, BoundaryPolicy::Wrap)
            .run()
            .unwrap();
        for j in 0..4 {
            assert_eq!(reversed.row(j), first.row(3 - j), "replayed row {}", j);
        }
    }

    #[test]
    fn test_continuation_preserves_prior_state_chain() {
        // Splitting twice still matches the single long run
        let full = run(150, 13);
        let a = run(150, 5);
        let b = Continuation::seed_next(&a)
            .unwrap()
            .into_config(150, 5, BoundaryPolicy::Wrap)
            .run()
            .unwrap();
        let c = Continuation::seed_next(&b)
            .unwrap()
            .into_config(150, 5, BoundaryPolicy::Wrap)
            .run()
            .unwrap();
        for j in 0..5 {
            assert_eq!(c.row(j), full.row(8 + j), "second continuation row {}", j);
        }
    }

    #[test]
    fn test_rejects_grids_with_fewer_than_two_rows() {
        let single = run(122, 1);
        assert_eq!(
            Continuation::seed_next(&single),
            Err(EngineError::InvalidDimensions { rows: 1, cols: 7 })
        );
        assert!(Continuation::seed_reversed(&single).is_err());
    }
}
