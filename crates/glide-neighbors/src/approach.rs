//! Shared approach geometry and signal-violation checks.
//!
//! Free functions over the invocation's `IntersectionData` slice, used by
//! both generator variants.  `intersections` must be sorted by stop-bar
//! distance, which [`NeighborGenerator::initialize`][crate::NeighborGenerator]
//! implementations guarantee.

use glide_core::{Node, SignalPhase};
use glide_signal::{IntersectionData, SignalOracle};

use crate::{NeighborConfig, SPEED_EPSILON_MPS};

/// Index of the intersection the vehicle is currently approaching: the first
/// whose stop bar is still ahead of `distance_m`.  `None` once every bar has
/// been crossed (or there are none).
pub fn current_intersection(intersections: &[IntersectionData], distance_m: f64) -> Option<usize> {
    intersections.iter().position(|i| i.stop_bar_m > distance_m)
}

/// Signed distance from `distance_m` to intersection `idx`'s stop bar, m.
/// Negative once the bar is behind the vehicle.
#[inline]
pub fn dist_to_stop_bar(intersections: &[IntersectionData], idx: usize, distance_m: f64) -> f64 {
    intersections[idx].stop_bar_m - distance_m
}

/// Would travelling from (`start_dist`, `start_time`) to (`end_dist`,
/// `end_time`) run a red light?
///
/// Only an edge that actually crosses the upcoming stop bar consults the
/// phase oracle.  The crossing instant is interpolated along the edge, and
/// the phase is checked at that instant ± `buffer_s` to absorb uncertainty
/// in the vehicle's dynamic response — a crossing planned exactly on a phase
/// boundary is therefore always rejected.
pub fn signal_violation<O: SignalOracle>(
    intersections: &[IntersectionData],
    oracle: &O,
    start_dist: f64,
    end_dist: f64,
    start_time: f64,
    end_time: f64,
    buffer_s: f64,
) -> bool {
    let Some(idx) = current_intersection(intersections, start_dist) else {
        return false;
    };

    // Not reaching the bar on this edge: nothing to violate.
    if dist_to_stop_bar(intersections, idx, end_dist) > 0.0 {
        return false;
    }

    let bar = intersections[idx].stop_bar_m;
    let interp_factor = (bar - start_dist) / (end_dist - start_dist);
    let crossing_time = start_time + interp_factor * (end_time - start_time);

    let oracle_index = intersections[idx].index;
    let red_if_early = oracle.phase_at(oracle_index, crossing_time - buffer_s).phase == SignalPhase::Red;
    let red_if_late = oracle.phase_at(oracle_index, crossing_time + buffer_s).phase == SignalPhase::Red;
    red_if_early || red_if_late
}

/// Candidate target speeds reachable from `node` over `dt` seconds.
///
/// Bounded by the acceleration limit and the speed limit; both clamped
/// bounds are always included, with interior speeds every
/// `speed_increment_mps`.  Speeds below the crawling floor are suppressed
/// except when a stop at the upcoming bar is acceptable — and a vehicle
/// already stopped there holds at zero until the phase will be green once
/// this step completes.
pub(crate) fn candidate_speeds<O: SignalOracle>(
    cfg: &NeighborConfig,
    intersections: &[IntersectionData],
    oracle: &O,
    stop_distance_m: f64,
    node: &Node,
    dt: f64,
    speed_increment_mps: f64,
) -> Vec<f64> {
    let cur_speed = node.speed_mps();
    let min_speed = (cur_speed - cfg.max_accel_mps2 * dt).max(0.0);
    let max_speed = (cur_speed + cfg.max_accel_mps2 * dt).min(cfg.speed_limit_mps);

    let near_stop = match current_intersection(intersections, node.distance_m()) {
        Some(idx) => {
            let dtsb = dist_to_stop_bar(intersections, idx, node.distance_m());
            if dtsb <= stop_distance_m {
                let next_is_green = oracle
                    .phase_at(intersections[idx].index, node.time_s() + dt)
                    .phase
                    .is_green();
                if cur_speed < SPEED_EPSILON_MPS && !next_is_green {
                    // Stopped at the bar with no green coming: hold here.
                    return vec![0.0];
                }
                true
            } else {
                false
            }
        }
        None => false,
    };

    let mut speeds = Vec::new();

    if near_stop && min_speed < SPEED_EPSILON_MPS {
        speeds.push(0.0);
    } else {
        speeds.push(min_speed.max(cfg.crawling_speed_mps));
    }

    if cur_speed > cfg.crawling_speed_mps {
        speeds.push(cur_speed);
    }

    let mut s = cur_speed - speed_increment_mps;
    while s > min_speed {
        if s > cfg.crawling_speed_mps {
            speeds.push(s);
        }
        s -= speed_increment_mps;
    }

    let mut s = cur_speed + speed_increment_mps;
    while s < max_speed {
        if s > cfg.crawling_speed_mps {
            speeds.push(s);
        }
        s += speed_increment_mps;
    }
    speeds.push(max_speed);

    speeds
}
