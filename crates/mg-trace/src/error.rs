//! Trace-writer error type.

use thiserror::Error;

/// Errors that can occur while writing trace files.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
