//! `mg-trace` — ns-2 style trace file writers.
//!
//! Two writers, matching the two output files of a run:
//!
//! | Writer                 | File            | Mode                         |
//! |------------------------|-----------------|------------------------------|
//! | [`MobilityTraceWriter`]| mobility trace  | streaming, one open handle   |
//! | [`EventsTraceWriter`]  | events trace    | single batch after sorting   |
//!
//! The mobility writer implements [`mg_sim::WaypointSink`] so the simulator
//! streams waypoints straight to disk.  Both writers hold their file handle
//! for their whole lifetime and close it on drop on all paths; `finish()`
//! flushes and is idempotent.

pub mod error;
pub mod events;
pub mod mobility;


pub use error::{TraceError, TraceResult};
pub use events::EventsTraceWriter;
pub use mobility::MobilityTraceWriter;
