//! The `WaypointSink` seam between the simulator and concrete trace writers.
//!
//! Waypoints stream out as they are produced, so the simulator writes through
//! this trait rather than buffering a run's worth of movement in memory.
//! `mg-trace` provides the file-backed implementation; [`MemorySink`] backs
//! tests.

use std::io;

use mg_core::UserId;

/// Receiver for the mobility simulator's output, called in emission order:
/// one `initial_position` per user followed by that user's movements, each
/// user's block contiguous and time-monotone.  The stream as a whole is
/// ordered by user, not by global time.
pub trait WaypointSink {
    /// A user's off-network starting position.
    fn initial_position(&mut self, user: UserId, x: f64, y: f64) -> io::Result<()>;

    /// A movement waypoint: at simulated time `at`, `user` starts moving to
    /// `(x, y)` at `speed`.
    fn movement(&mut self, at: f64, user: UserId, x: f64, y: f64, speed: f64) -> io::Result<()>;
}

// ── MemorySink ────────────────────────────────────────────────────────────────

/// A starting-position record captured by [`MemorySink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialPosition {
    pub user: UserId,
    pub x: f64,
    pub y: f64,
}

/// A movement record captured by [`MemorySink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub at: f64,
    pub user: UserId,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

/// A [`WaypointSink`] that records everything in memory.
#[derive(Default)]
pub struct MemorySink {
    pub initials: Vec<InitialPosition>,
    pub movements: Vec<Movement>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movements belonging to one user, in emission order.
    pub fn movements_for(&self, user: UserId) -> Vec<Movement> {
        self.movements
            .iter()
            .copied()
            .filter(|m| m.user == user)
            .collect()
    }
}

impl WaypointSink for MemorySink {
    fn initial_position(&mut self, user: UserId, x: f64, y: f64) -> io::Result<()> {
        self.initials.push(InitialPosition { user, x, y });
        Ok(())
    }

    fn movement(&mut self, at: f64, user: UserId, x: f64, y: f64, speed: f64) -> io::Result<()> {
        self.movements.push(Movement { at, user, x, y, speed });
        Ok(())
    }
}
