//! Graph-subsystem error type.

use thiserror::Error;

use mg_core::StationId;

/// Errors produced by `mg-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The graph is not connected enough for the requested walk.  Fatal: the
    /// simulation requires a path between any two sampled stations.
    #[error("no route from {from} to {to}")]
    NoRoute { from: StationId, to: StationId },

    #[error("edge references unknown station label {0}")]
    UnknownStation(u32),

    #[error("duplicate station label {0}")]
    DuplicateStation(u32),

    #[error("edge {from}-{to} has negative weight {weight}")]
    NegativeWeight { from: u32, to: u32, weight: f64 },

    #[error("graph parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
