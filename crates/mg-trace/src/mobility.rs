//! Streaming mobility trace writer.
//!
//! # Line formats
//!
//! ```text
//! $node_(3) set X_ 41.38
//! $node_(3) set Y_ 2.17
//! $ns_ at 12.5 "$node_(3) setdest 41.39 2.18 1.5"
//! ```
//!
//! The first two lines place a node before the simulation starts; `setdest`
//! lines schedule movements.  Waypoints are written in the order the
//! simulator produces them: per-user contiguous blocks, each time-monotone.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mg_core::UserId;
use mg_sim::WaypointSink;

use crate::TraceResult;

/// Writes the mobility trace incrementally through one buffered handle.
pub struct MobilityTraceWriter {
    out: BufWriter<File>,
    finished: bool,
}

impl MobilityTraceWriter {
    /// Create (or truncate) the mobility trace file.
    pub fn create(path: &Path) -> TraceResult<Self> {
        let file = File::create(path)?;
        Ok(Self { out: BufWriter::new(file), finished: false })
    }

    /// Flush the underlying handle.  Idempotent.
    pub fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

impl WaypointSink for MobilityTraceWriter {
    fn initial_position(&mut self, user: UserId, x: f64, y: f64) -> io::Result<()> {
        writeln!(self.out, "$node_({}) set X_ {}", user.0, x)?;
        writeln!(self.out, "$node_({}) set Y_ {}", user.0, y)
    }

    fn movement(&mut self, at: f64, user: UserId, x: f64, y: f64, speed: f64) -> io::Result<()> {
        writeln!(
            self.out,
            "$ns_ at {} \"$node_({}) setdest {} {} {}\"",
            at, user.0, x, y, speed
        )
    }
}
