//! `mg-sim` — the mobility-and-incident simulation engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`probability`] | `ProbabilityTable` + its CSV loader                   |
//! | [`distribute`]  | round-robin accept/reject user placement              |
//! | [`walk`]        | the graph-walk mobility simulator                     |
//! | [`visits`]      | `VisitingLog` — who was where, when                   |
//! | [`incidents`]   | incident sampling, attribution, ordering, dedup       |
//! | [`sink`]        | `WaypointSink` trait decoupling sim from writers      |
//! | [`error`]       | `SimError`, `SimResult<T>`                            |
//!
//! # Phases
//!
//! A run is four strictly sequential phases sharing one [`mg_core::SimRng`]:
//! distribution → per-user walks (producing waypoints and the visiting log)
//! → incident generation (consuming the log) → trace writing.  The visiting
//! log is the only value written by one phase and read by a later one.

pub mod distribute;
pub mod error;
pub mod incidents;
pub mod probability;
pub mod sink;
pub mod visits;
pub mod walk;


pub use distribute::{Placement, distribute_users};
pub use error::{SimError, SimResult};
pub use incidents::{
    ATTRIBUTION_WINDOW, Attribution, Incident, IncidentBatch, generate_incidents, order_incidents,
};
pub use probability::{ProbabilityTable, StationProbs};
pub use sink::{MemorySink, WaypointSink};
pub use visits::{Visit, VisitingLog};
pub use walk::{PEDESTRIAN_SPEED, WalkParams, simulate_walks, walk_user};
