// Domain layer - Core automaton engine
pub mod domain;

// Error taxonomy - fail-fast validation at the run boundary
pub mod error;

// Re-exports for convenience
pub use domain::{
    BoundaryPolicy, Continuation, Grid, Preset, RowStream, Rule, RunConfig, presets,
};
pub use error::EngineError;
