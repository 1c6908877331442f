//! Simulation error type.

use thiserror::Error;

use mg_core::StationId;
use mg_graph::GraphError;

/// Errors produced by `mg-sim`.  All are fatal: the generator is a
/// single-shot batch process with no partial-output recovery.
#[derive(Debug, Error)]
pub enum SimError {
    /// A station referenced by the run has no probability table entry.
    #[error("no probability entry for station {0}")]
    MissingProbability(StationId),

    /// No station has a positive admission probability — the accept/reject
    /// placement loop could never terminate.
    #[error("degenerate probability configuration: no station admits users")]
    DegenerateDistribution,

    #[error("the station network has no stations")]
    EmptyNetwork,

    /// A route contained consecutive stations with no link between them.
    /// Indicates a corrupted network, not a user error.
    #[error("route hop {from} -> {to} has no link")]
    BrokenRoute { from: StationId, to: StationId },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("probability file parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
