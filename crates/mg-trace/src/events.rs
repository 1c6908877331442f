//! Incident events trace writer.
//!
//! # Line format
//!
//! ```text
//! $ns_ at 42.0 "$node_(3) geninc at 12"
//! $ns_ at 60.0 "$node_(-1) geninc at 9"
//! ```
//!
//! The node id is the attributed user, or a negative sentinel (-1 never
//! visited, -2 not visited at the sampled time).  The incident list arrives
//! already sorted and deduplicated; this writer emits it as a single batch.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mg_sim::Incident;

use crate::TraceResult;

/// Writes the events trace in one batch.
pub struct EventsTraceWriter {
    out: BufWriter<File>,
    finished: bool,
}

impl EventsTraceWriter {
    /// Create (or truncate) the events trace file.
    pub fn create(path: &Path) -> TraceResult<Self> {
        let file = File::create(path)?;
        Ok(Self { out: BufWriter::new(file), finished: false })
    }

    /// Write the full incident list in order.
    pub fn write_batch(&mut self, incidents: &[Incident]) -> TraceResult<()> {
        for incident in incidents {
            writeln!(
                self.out,
                "$ns_ at {} \"$node_({}) geninc at {}\"",
                incident.time,
                incident.attribution.code(),
                incident.station
            )?;
        }
        Ok(())
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
