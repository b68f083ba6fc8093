mod boundary;
mod continuation;
mod engine;
mod grid;
mod patterns;
mod row;
mod rule;
pub mod seed;

pub use boundary::BoundaryPolicy;
pub use continuation::Continuation;
pub use engine::{RowStream, RunConfig};
pub use grid::{Grid, row_to_bit_string};
pub use patterns::{Preset, presets};
pub use row::{compute_row, compute_row_parallel, recover_prior_row};
pub use rule::Rule;
