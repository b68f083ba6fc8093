//! Grid generation.
//!
//! `RunConfig` is the full, explicit configuration for one generation; all
//! validation happens up front in `run`, and identical configurations
//! always produce bit-identical grids.

use super::row::{compute_row, compute_row_parallel};
use super::{BoundaryPolicy, Grid, Rule, seed};
use crate::error::EngineError;

/// Configuration for one automaton generation.
///
/// Every field is explicit; there is no implicit default seed or rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Rule number in [0, 255]
    pub rule_num: u32,
    /// Number of rows to generate, including the starting row
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Row 0, conformed to `cols` by tiling/padding/truncation
    pub starting_state: Vec<bool>,
    /// Virtual row before row 0; supplies the flip bits for row 1.
    /// Must be exactly `cols` wide when present.
    pub prior_state: Option<Vec<bool>>,
    /// Edge handling for neighbor lookups
    pub boundary: BoundaryPolicy,
}

impl RunConfig {
    /// Build a config with states given as '0'/'1' strings.
    pub fn from_bit_strings(
        rule_num: u32,
        rows: usize,
        cols: usize,
        starting_state: &str,
        prior_state: Option<&str>,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            rule_num,
            rows,
            cols,
            starting_state: seed::parse_bit_string(starting_state)?,
            prior_state: prior_state.map(seed::parse_bit_string).transpose()?,
            boundary: BoundaryPolicy::Wrap,
        })
    }

    /// Validate everything that can fail, before any row is computed.
    /// Returns the decoded rule and the conformed row 0.
    fn validate(&self) -> Result<(Rule, Vec<bool>), EngineError> {
        let rule = Rule::decode(self.rule_num)?;
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let row0 = seed::conform_state(&self.starting_state, self.cols)?;
        if let Some(prior) = &self.prior_state {
            seed::require_width(prior, self.cols)?;
        }
        Ok((rule, row0))
    }

    /// Run the generation, retaining the full matrix.
    pub fn run(&self) -> Result<Grid, EngineError> {
        self.run_with(compute_row)
    }

    /// Run with rayon-parallel row evaluation. Bit-identical to [`run`],
    /// worthwhile for wide grids.
    ///
    /// [`run`]: RunConfig::run
    pub fn run_parallel(&self) -> Result<Grid, EngineError> {
        self.run_with(compute_row_parallel)
    }

    fn run_with(
        &self,
        evolve: fn(&[bool], Option<&[bool]>, &Rule, BoundaryPolicy) -> Vec<bool>,
    ) -> Result<Grid, EngineError> {
        let (rule, row0) = self.validate()?;
        let mut grid = Grid::new(self.rows, self.cols);
        grid.fill_row(0, &row0);

        let mut prev = row0;
        // Flip source for row 1 is the prior state, or nothing
        let mut two_back = self.prior_state.clone();
        for i in 1..self.rows {
            let next = evolve(&prev, two_back.as_deref(), &rule, self.boundary);
            grid.fill_row(i, &next);
            two_back = Some(std::mem::replace(&mut prev, next));
        }
        Ok(grid)
    }

    /// Stream rows one at a time with a rolling two-row window.
    ///
    /// Yields exactly the rows [`run`] would produce, in order, but keeps
    /// O(cols) state instead of the whole matrix.
    ///
    /// [`run`]: RunConfig::run
    pub fn stream(&self) -> Result<RowStream, EngineError> {
        let (rule, row0) = self.validate()?;
        Ok(RowStream {
            rule,
            boundary: self.boundary,
            remaining: self.rows,
            prev: row0,
            two_back: self.prior_state.clone(),
            started: false,
        })
    }
}

/// Row-by-row generation retaining only the last two rows.
pub struct RowStream {
    rule: Rule,
    boundary: BoundaryPolicy,
    remaining: usize,
    prev: Vec<bool>,
    two_back: Option<Vec<bool>>,
    started: bool,
}

impl RowStream {
    /// The decoded rule driving this stream
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }
}

impl Iterator for RowStream {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if !self.started {
            self.started = true;
            return Some(self.prev.clone());
        }
        let next = compute_row(&self.prev, self.two_back.as_deref(), &self.rule, self.boundary);
        self.two_back = Some(std::mem::replace(&mut self.prev, next.clone()));
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RowStream {}
