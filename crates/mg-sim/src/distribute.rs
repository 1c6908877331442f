//! User distribution: assign each user a starting station.
//!
//! Accept/reject scheme, not a weighted partition: the node set is cycled in
//! a fixed round-robin order and each visited station admits a new user when
//! a uniform draw falls below its `dest_prob`.  Expected admissions per
//! station are proportional to `dest_prob`, but exact per-station counts are
//! not guaranteed.

use mg_core::{SimRng, StationId, UserId};
use mg_graph::StationNetwork;

use crate::probability::ProbabilityTable;
use crate::{SimError, SimResult};

/// One user's starting assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub user: UserId,
    pub station: StationId,
}

/// Produce exactly `count` placements with contiguous user ids `0..count`.
///
/// Fails up front with [`SimError::DegenerateDistribution`] when no station
/// has a positive admission probability — the loop could otherwise cycle
/// forever.  A station missing from the probability table is a fatal lookup
/// error, surfaced before any admission is attempted.
pub fn distribute_users(
    count: usize,
    net: &StationNetwork,
    table: &ProbabilityTable,
    rng: &mut SimRng,
) -> SimResult<Vec<Placement>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    // Resolve every station's admission probability once; the round-robin
    // visits all of them anyway, so a missing entry is fatal regardless.
    let admission: Vec<f64> = net
        .stations()
        .map(|s| table.dest_prob(s))
        .collect::<SimResult<_>>()?;

    if !admission.iter().any(|&p| p > 0.0) {
        return Err(SimError::DegenerateDistribution);
    }

    let mut placements = Vec::with_capacity(count);
    let mut next_user = 0u32;

    'admitting: loop {
        for (idx, &p) in admission.iter().enumerate() {
            if rng.random::<f64>() < p {
                placements.push(Placement {
                    user: UserId(next_user),
                    station: StationId(idx as u32),
                });
                next_user += 1;
                if placements.len() == count {
                    break 'admitting;
                }
            }
        }
    }

    Ok(placements)
}
