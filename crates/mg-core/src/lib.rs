//! `mg-core` — foundational types for the mobgen trace generator.
//!
//! This crate is a dependency of every other `mg-*` crate.  It intentionally
//! has no `mg-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`ids`]     | `UserId`, `StationId`, `LinkId`               |
//! | [`geo`]     | `Point`, Euclidean distance                   |
//! | [`rng`]     | `SimRng` — the run's single random source     |
//! | [`params`]  | `SimParams` — validated run configuration     |
//! | [`error`]   | `MgError`, `MgResult`                         |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MgError, MgResult};
pub use geo::Point;
pub use ids::{LinkId, StationId, UserId};
pub use params::SimParams;
pub use rng::SimRng;
