//! The graph-walk mobility simulator.
//!
//! Each user moves through the states Placed → Approaching → Traveling →
//! Done:
//!
//! - **Placed → Approaching**: the user starts off-network at
//!   `(station_x + radius, station_y + radius)`.  After a uniform delay in
//!   `[0, start_delay]` a single waypoint moves them onto the station at the
//!   fixed pedestrian speed; the diagonal walk covers `sqrt(2) * radius`.
//! - **Approaching → Traveling**: arrival at the station (while still before
//!   the stop time) is logged, then the user repeatedly selects a
//!   destination, computes the shortest path there, and traverses it hop by
//!   hop — uniform speed per hop in `[min_speed, max_speed]`, uniform pause
//!   in `[0, max_pause]` on arrival.
//! - **Traveling → Done**: a hop whose arrival would land strictly past the
//!   stop time is emitted as a waypoint but not logged, and ends the user's
//!   walk; arriving exactly at the stop time still counts as a visit.
//!
//! Waypoints stream to the sink as they are produced: each user's block is
//! contiguous and time-monotone, but the stream as a whole is ordered by
//! user.

use mg_core::{SimRng, StationId, UserId, geo};
use mg_graph::{StationNetwork, shortest_path};

use crate::distribute::Placement;
use crate::probability::ProbabilityTable;
use crate::sink::WaypointSink;
use crate::visits::VisitingLog;
use crate::{SimError, SimResult};

/// Fixed walking speed for the initial approach, in distance-units per
/// time-unit.
pub const PEDESTRIAN_SPEED: f64 = 1.5;

/// Consecutive destination draws equal to the current hop before a user's
/// walk is ended.  Selection is deterministic on a single-station network
/// (and whenever one station dominates the thresholds), so an unbounded
/// redraw would never terminate.
const MAX_IDLE_DRAWS: u32 = 8;

/// Motion settings for the walk phase, lifted from the run parameters.
#[derive(Debug, Clone, Copy)]
pub struct WalkParams {
    pub min_speed: f64,
    pub max_speed: f64,
    pub max_pause: f64,
    pub radius: f64,
    pub start_delay: f64,
    pub stop_time: f64,
}

impl From<&mg_core::SimParams> for WalkParams {
    fn from(p: &mg_core::SimParams) -> Self {
        Self {
            min_speed: p.min_speed,
            max_speed: p.max_speed,
            max_pause: p.max_pause,
            radius: p.radius,
            start_delay: p.start_delay,
            stop_time: p.stop_time,
        }
    }
}

/// Simulate every placed user's walk in placement order.
pub fn simulate_walks<S: WaypointSink>(
    net: &StationNetwork,
    table: &ProbabilityTable,
    placements: &[Placement],
    params: &WalkParams,
    log: &mut VisitingLog,
    sink: &mut S,
    rng: &mut SimRng,
) -> SimResult<()> {
    for p in placements {
        walk_user(net, table, p.user, p.station, params, log, sink, rng)?;
    }
    Ok(())
}

/// Simulate one user's walk from their assigned start station.
#[allow(clippy::too_many_arguments)]
pub fn walk_user<S: WaypointSink>(
    net: &StationNetwork,
    table: &ProbabilityTable,
    user: UserId,
    start: StationId,
    params: &WalkParams,
    log: &mut VisitingLog,
    sink: &mut S,
    rng: &mut SimRng,
) -> SimResult<()> {
    let mut current = start;
    let station_pos = net.position(current);

    // Off-network start, then the approach walk onto the station.
    let start_pos = station_pos.offset(params.radius);
    sink.initial_position(user, start_pos.x, start_pos.y)?;

    let delay = rng.gen_range(0.0..=params.start_delay);
    sink.movement(delay, user, station_pos.x, station_pos.y, PEDESTRIAN_SPEED)?;

    let mut at_time = delay + geo::offset_walk_distance(params.radius) / PEDESTRIAN_SPEED;
    if at_time >= params.stop_time {
        return Ok(());
    }
    log.record(current, user, at_time);

    let mut idle_draws = 0u32;
    while at_time < params.stop_time {
        let destination = select_destination(net, table, rng)?;
        if destination == current {
            idle_draws += 1;
            if idle_draws >= MAX_IDLE_DRAWS {
                return Ok(());
            }
            continue;
        }
        idle_draws = 0;

        let route = shortest_path(net, current, destination)?;
        for &next in route.hops() {
            let pos = net.position(next);
            let speed = rng.gen_range(params.min_speed..=params.max_speed);
            sink.movement(at_time, user, pos.x, pos.y, speed)?;

            let pause = rng.gen_range(0.0..=params.max_pause);
            let distance = net
                .hop_distance(current, next)
                .ok_or(SimError::BrokenRoute { from: current, to: next })?;
            at_time += distance / speed + pause;

            // Strict overshoot: the waypoint above was emitted, but the hop
            // is not a confirmed arrival.
            if at_time > params.stop_time {
                return Ok(());
            }
            log.record(next, user, at_time);
            current = next;
        }
    }

    Ok(())
}

/// Select a travel destination, biased toward high-`src_prob` stations.
///
/// One uniform `criteria` draw in [0, 1) gates the candidate set: stations
/// whose `src_prob` exceeds it.  A uniform member of the candidates is
/// returned, or a uniform station from the whole node set when no station
/// qualifies — no station is ever excluded entirely.
pub fn select_destination(
    net: &StationNetwork,
    table: &ProbabilityTable,
    rng: &mut SimRng,
) -> SimResult<StationId> {
    let criteria: f64 = rng.random();

    let mut candidates = Vec::new();
    for station in net.stations() {
        if criteria < table.src_prob(station)? {
            candidates.push(station);
        }
    }

    if let Some(&station) = rng.choose(&candidates) {
        return Ok(station);
    }

    let all: Vec<StationId> = net.stations().collect();
    rng.choose(&all).copied().ok_or(SimError::EmptyNetwork)
}
