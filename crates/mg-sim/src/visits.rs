//! The visiting log: every confirmed arrival at a station, across all users.
//!
//! Append-only while walks are simulated, read-only once incident generation
//! starts.  One entry per confirmed arrival — a hop abandoned because it
//! would overshoot the stop time is never logged.

use rustc_hash::FxHashMap;

use mg_core::{StationId, UserId};

/// One confirmed arrival.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit {
    pub user: UserId,
    /// Simulated arrival time.
    pub at: f64,
}

/// Arrivals grouped by station, in per-user chronological append order.
#[derive(Default)]
pub struct VisitingLog {
    by_station: FxHashMap<StationId, Vec<Visit>>,
}

impl VisitingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed arrival of `user` at `station`.
    pub fn record(&mut self, station: StationId, user: UserId, at: f64) {
        self.by_station
            .entry(station)
            .or_default()
            .push(Visit { user, at });
    }

    /// All recorded visits to `station`; `None` if it was never visited.
    pub fn visits(&self, station: StationId) -> Option<&[Visit]> {
        self.by_station.get(&station).map(Vec::as_slice)
    }

    /// Number of stations with at least one visit.
    pub fn visited_station_count(&self) -> usize {
        self.by_station.len()
    }

    /// Total number of recorded arrivals.
    pub fn total_visits(&self) -> usize {
        self.by_station.values().map(Vec::len).sum()
    }
}
