//! Incident sampling and attribution.
//!
//! Runs once, after all walks are simulated, against the complete visiting
//! log.  Ticks advance from 0 by `interval` while strictly below the stop
//! time; each tick samples one station uniformly — independent of traffic,
//! so a station nobody ever visited can be drawn.
//!
//! Attribution per tick:
//! - station absent from the log → `NeverVisited` sentinel at the tick time;
//! - visits exist within ±[`ATTRIBUTION_WINDOW`] of the tick → one is chosen
//!   uniformly and the incident carries the *visit's arrival time* and that
//!   user's id (the moment the user was actually present, not the tick);
//! - visits exist but none in the window → `NotVisitedAtTime` sentinel at
//!   the tick time.
//!
//! The finished list is sorted ascending by `(time, attribution code,
//! station)` and exact *adjacent* duplicates are collapsed — consecutive
//! collapse only, not full set deduplication.

use mg_core::{SimRng, UserId};
use mg_graph::StationNetwork;

use crate::visits::{Visit, VisitingLog};

/// Half-width of the attribution window around a tick, in time-units
/// (inclusive on both ends).
pub const ATTRIBUTION_WINDOW: f64 = 180.0;

/// Who an incident is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribution {
    /// A user confirmed present near the sampled time.
    User(UserId),
    /// The sampled station appears nowhere in the visiting log.
    NeverVisited,
    /// The station was visited, but never within the attribution window.
    NotVisitedAtTime,
}

impl Attribution {
    /// Identifier as written to the events file.  Sentinels are negative so
    /// they sort before any real user id.
    pub fn code(self) -> i64 {
        match self {
            Attribution::User(u) => u.0 as i64,
            Attribution::NeverVisited => -1,
            Attribution::NotVisitedAtTime => -2,
        }
    }
}

/// One sampled incident, keyed for output by the station's external label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incident {
    pub time: f64,
    pub attribution: Attribution,
    /// External station label as it appears in the events file.
    pub station: u32,
}

/// The ordered, deduplicated incident list plus the pre-dedup diagnostic
/// count (the number of ticks that produced an incident, not the number of
/// lines that will be written).
pub struct IncidentBatch {
    pub incidents: Vec<Incident>,
    pub generated: usize,
}

/// Sample incidents over the whole run and return them ordered and
/// adjacent-deduplicated.
pub fn generate_incidents(
    net: &StationNetwork,
    log: &VisitingLog,
    interval: f64,
    stop_time: f64,
    rng: &mut SimRng,
) -> IncidentBatch {
    let stations: Vec<_> = net.stations().collect();
    let mut incidents = Vec::new();
    let mut generated = 0usize;

    let mut current_time = 0.0;
    while current_time < stop_time {
        if let Some(&station) = rng.choose(&stations) {
            incidents.push(sample_incident(net, log, station, current_time, rng));
            generated += 1;
        }
        current_time += interval;
    }

    order_incidents(&mut incidents);
    IncidentBatch { incidents, generated }
}

fn sample_incident(
    net: &StationNetwork,
    log: &VisitingLog,
    station: mg_core::StationId,
    current_time: f64,
    rng: &mut SimRng,
) -> Incident {
    let label = net.label(station);

    let Some(visits) = log.visits(station) else {
        return Incident {
            time: current_time,
            attribution: Attribution::NeverVisited,
            station: label,
        };
    };

    let eligible: Vec<&Visit> = visits
        .iter()
        .filter(|v| (v.at - current_time).abs() <= ATTRIBUTION_WINDOW)
        .collect();

    match rng.choose(&eligible) {
        // The incident carries the visit's own arrival time, not the tick
        // time.
        Some(&visit) => Incident {
            time: visit.at,
            attribution: Attribution::User(visit.user),
            station: label,
        },
        None => Incident {
            time: current_time,
            attribution: Attribution::NotVisitedAtTime,
            station: label,
        },
    }
}

/// Sort ascending by `(time, attribution code, station)` and collapse exact
/// adjacent duplicates.
pub fn order_incidents(incidents: &mut Vec<Incident>) {
    incidents.sort_by(|a, b| {
        a.time
            .total_cmp(&b.time)
            .then_with(|| a.attribution.code().cmp(&b.attribution.code()))
            .then_with(|| a.station.cmp(&b.station))
    });
    incidents.dedup();
}
