//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `SimError`,
//! `TraceError`) and convert upward via `From` impls; `MgError` covers the
//! configuration layer that everything shares.

use thiserror::Error;

/// Errors produced by `mg-core`, chiefly configuration loading.
#[derive(Debug, Error)]
pub enum MgError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `mg-core`.
pub type MgResult<T> = Result<T, MgError>;
