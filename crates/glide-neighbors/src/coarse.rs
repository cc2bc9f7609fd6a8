//! Coarse-resolution neighbor generation.
//!
//! The first pass of the two-resolution strategy: a wide time/speed grid
//! with no response-lag floor, no corridor and no collision filtering.  Its
//! solution becomes the fine pass's allowable-speed corridor.

use tracing::{debug, info, warn};

use glide_core::Node;
use glide_signal::{IntersectionData, SignalOracle};

use crate::approach::{candidate_speeds, signal_violation};
use crate::{NeighborConfig, NeighborGenerator};

/// Coarse-grid successor generation.
pub struct CoarsePathNeighbors<O: SignalOracle> {
    cfg: NeighborConfig,
    oracle: O,
    intersections: Vec<IntersectionData>,
    time_increment_s: f64,
    speed_increment_mps: f64,
}

impl<O: SignalOracle> CoarsePathNeighbors<O> {
    pub fn new(cfg: NeighborConfig, oracle: O) -> Self {
        Self {
            cfg,
            oracle,
            intersections: Vec::new(),
            time_increment_s: 0.0,
            speed_increment_mps: 0.0,
        }
    }

    fn violates(&self, start_dist: f64, end_dist: f64, start_time: f64, end_time: f64) -> bool {
        // Half the configured buffer per side — twice the fine pass's margin,
        // leaving the refinement room to land inside what coarse accepted.
        signal_violation(
            &self.intersections,
            &self.oracle,
            start_dist,
            end_dist,
            start_time,
            end_time,
            self.cfg.time_buffer_s * 0.5,
        )
    }
}

impl<O: SignalOracle> NeighborGenerator for CoarsePathNeighbors<O> {
    fn initialize(
        &mut self,
        mut intersections: Vec<IntersectionData>,
        time_increment_s: f64,
        speed_increment_mps: f64,
    ) {
        info!(time_increment_s, speed_increment_mps, "initializing coarse neighbor generation");
        debug_assert!(time_increment_s > 0.0 && speed_increment_mps > 0.0);

        intersections.sort_by(|a, b| a.stop_bar_m.total_cmp(&b.stop_bar_m));
        self.intersections = intersections;
        self.time_increment_s = time_increment_s;
        self.speed_increment_mps = speed_increment_mps;
    }

    fn neighbors(&self, node: &Node) -> Vec<Node> {
        if self.time_increment_s <= 0.0 || self.speed_increment_mps <= 0.0 {
            warn!("neighbors requested before initialize");
            return Vec::new();
        }

        let cur_time = node.time_s();
        let cur_dist = node.distance_m();
        let cur_speed = node.speed_mps();

        let time_to_stop = cur_speed / self.cfg.max_accel_mps2;
        let dist_to_stop = 0.5 * cur_speed * time_to_stop;
        if self.violates(cur_dist, cur_dist + dist_to_stop, cur_time, cur_time + time_to_stop) {
            debug!(node = %node, "no neighbors: stopping distance already crosses on red");
            return Vec::new();
        }

        // The coarse grid steps exactly at the configured increment.
        let dt = self.time_increment_s;
        let new_time = cur_time + dt;

        let speeds = candidate_speeds(
            &self.cfg,
            &self.intersections,
            &self.oracle,
            self.cfg.acceptable_stop_distance_m,
            node,
            dt,
            self.speed_increment_mps,
        );

        let mut neighbors = Vec::with_capacity(speeds.len());
        for target_speed in speeds {
            let new_dist = cur_dist + dt * (cur_speed + target_speed) * 0.5;
            if self.violates(cur_dist, new_dist, cur_time, new_time) {
                continue;
            }
            neighbors.push(Node::new(new_dist, new_time, target_speed));
        }

        debug!(node = %node, count = neighbors.len(), "generated coarse neighbors");
        neighbors
    }
}
