//! Fine-resolution neighbor generation.
//!
//! The refinement pass: time steps never shorter than the vehicle's dynamic
//! response lag, an optional allowable-speed corridor around a previously
//! computed coarse path, and optional filtering against tracked vehicles.

use tracing::{debug, info, warn};

use glide_core::Node;
use glide_signal::{IntersectionData, SignalOracle};

use crate::approach::{candidate_speeds, signal_violation};
use crate::{CollisionChecker, NeighborConfig, NeighborGenerator, NoConflicts};

/// Fine-grid successor generation.
///
/// Construct once per vehicle with [`FinePathNeighbors::new`] (or
/// [`with_collision_checker`][FinePathNeighbors::with_collision_checker]);
/// rebind per invocation via
/// [`initialize`][NeighborGenerator::initialize] and, when refining a coarse
/// solution, [`set_coarse_plan`][NeighborGenerator::set_coarse_plan].
pub struct FinePathNeighbors<O: SignalOracle, C: CollisionChecker = NoConflicts> {
    cfg: NeighborConfig,
    oracle: O,
    collision: Option<C>,
    intersections: Vec<IntersectionData>,
    time_increment_s: f64,
    speed_increment_mps: f64,
    /// Effective stop distance — the configured value, raised in
    /// `initialize` so it always spans at least one search cell.
    stop_distance_m: f64,
    /// Coarse corridor to follow; empty = unconstrained.
    coarse_path: Vec<Node>,
}

impl<O: SignalOracle> FinePathNeighbors<O> {
    pub fn new(cfg: NeighborConfig, oracle: O) -> Self {
        Self {
            stop_distance_m: cfg.acceptable_stop_distance_m,
            cfg,
            oracle,
            collision: None,
            intersections: Vec::new(),
            time_increment_s: 0.0,
            speed_increment_mps: 0.0,
            coarse_path: Vec::new(),
        }
    }
}

impl<O: SignalOracle, C: CollisionChecker> FinePathNeighbors<O, C> {
    pub fn with_collision_checker(cfg: NeighborConfig, oracle: O, checker: C) -> Self {
        Self {
            stop_distance_m: cfg.acceptable_stop_distance_m,
            cfg,
            oracle,
            collision: Some(checker),
            intersections: Vec::new(),
            time_increment_s: 0.0,
            speed_increment_mps: 0.0,
            coarse_path: Vec::new(),
        }
    }

    fn violates(&self, start_dist: f64, end_dist: f64, start_time: f64, end_time: f64) -> bool {
        // A quarter of the configured buffer per side: the coarse pass has
        // already kept well clear of phase boundaries, so the refinement can
        // use the room it needs to land on its tighter grid.
        signal_violation(
            &self.intersections,
            &self.oracle,
            start_dist,
            end_dist,
            start_time,
            end_time,
            self.cfg.time_buffer_s * 0.25,
        )
    }

    /// Is `speed_mps` within the allowable corridor around the coarse plan
    /// at `distance_m`?  Distances before the corridor starts or after it
    /// ends are unconstrained.
    fn in_allowable_speed_region(&self, speed_mps: f64, distance_m: f64) -> bool {
        if self.coarse_path.is_empty() {
            return true;
        }
        for (i, waypoint) in self.coarse_path.iter().enumerate() {
            if distance_m < waypoint.distance_m() {
                if i == 0 {
                    return true;
                }
                let prev = &self.coarse_path[i - 1];
                let delta_d = waypoint.distance_m() - prev.distance_m();
                let corridor_speed = if delta_d <= f64::EPSILON {
                    // Stop waypoints share a distance; hold the earlier speed.
                    prev.speed_mps()
                } else {
                    let delta_v = waypoint.speed_mps() - prev.speed_mps();
                    prev.speed_mps() + (distance_m - prev.distance_m()) / delta_d * delta_v
                };
                return (corridor_speed - speed_mps).abs() <= self.cfg.allowable_speed_region_mps;
            }
        }
        true
    }

    fn traced(&self, distance_m: f64) -> bool {
        self.cfg.debug_threshold_m >= 0.0 && distance_m >= self.cfg.debug_threshold_m
    }
}

impl<O: SignalOracle, C: CollisionChecker> NeighborGenerator for FinePathNeighbors<O, C> {
    fn initialize(
        &mut self,
        mut intersections: Vec<IntersectionData>,
        time_increment_s: f64,
        speed_increment_mps: f64,
    ) {
        info!(time_increment_s, speed_increment_mps, "initializing fine neighbor generation");
        debug_assert!(time_increment_s > 0.0 && speed_increment_mps > 0.0);

        intersections.sort_by(|a, b| a.stop_bar_m.total_cmp(&b.stop_bar_m));
        self.intersections = intersections;
        self.time_increment_s = time_increment_s;
        self.speed_increment_mps = speed_increment_mps;

        // The stop window must cover at least one cell of the search grid or
        // no stopped state could ever be generated inside it.
        self.stop_distance_m = (1.1 * 2.0 * time_increment_s * speed_increment_mps)
            .max(self.cfg.acceptable_stop_distance_m);
        info!(stop_distance_m = self.stop_distance_m, "using acceptable stop distance");

        // The corridor belongs to one invocation; a fresh initialize drops it.
        self.coarse_path.clear();
    }

    fn neighbors(&self, node: &Node) -> Vec<Node> {
        if self.time_increment_s <= 0.0 || self.speed_increment_mps <= 0.0 {
            warn!("neighbors requested before initialize");
            return Vec::new();
        }

        let cur_time = node.time_s();
        let cur_dist = node.distance_m();
        let cur_speed = node.speed_mps();

        // If even a maximum-effort stop from here crosses the bar on red,
        // every continuation violates the signal: the branch is dead.
        let time_to_stop = cur_speed / self.cfg.max_accel_mps2;
        let dist_to_stop = 0.5 * cur_speed * time_to_stop;
        if self.violates(cur_dist, cur_dist + dist_to_stop, cur_time, cur_time + time_to_stop) {
            debug!(node = %node, "no neighbors: stopping distance already crosses on red");
            return Vec::new();
        }

        // Never command a step shorter than the vehicle can respond to.
        let dt = self.time_increment_s.max(self.cfg.response_lag_s);
        let new_time = cur_time + dt;

        let speeds = candidate_speeds(
            &self.cfg,
            &self.intersections,
            &self.oracle,
            self.stop_distance_m,
            node,
            dt,
            self.speed_increment_mps,
        );

        let traced = self.traced(cur_dist);
        let mut neighbors = Vec::with_capacity(speeds.len());
        for target_speed in speeds {
            let new_dist = cur_dist + dt * (cur_speed + target_speed) * 0.5;

            if self.violates(cur_dist, new_dist, cur_time, new_time) {
                if traced {
                    debug!(target_speed, "candidate rejected: red at crossing");
                }
                continue;
            }
            if !self.in_allowable_speed_region(target_speed, new_dist) {
                if traced {
                    debug!(target_speed, "candidate rejected: outside coarse corridor");
                }
                continue;
            }

            let candidate = Node::new(new_dist, new_time, target_speed);
            if let Some(checker) = &self.collision {
                if checker.conflicts(node, &candidate) {
                    if traced {
                        debug!(candidate = %candidate, "candidate rejected: conflicts with tracked vehicle");
                    }
                    continue;
                }
            }
            neighbors.push(candidate);
        }

        debug!(node = %node, count = neighbors.len(), "generated fine neighbors");
        neighbors
    }

    fn set_coarse_plan(&mut self, path: Vec<Node>) {
        self.coarse_path = path;
    }
}
