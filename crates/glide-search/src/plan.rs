//! The produced trajectory.

use glide_core::Node;

/// The result of a successful search: the planned state sequence from the
/// start node to a goal node, inclusive.
///
/// This is the planner's entire produced interface — the trajectory
/// execution layer converts it into speed commands.
#[derive(Clone, Debug)]
pub struct TrajectoryPlan {
    /// States in travel order.  Never empty; `nodes[0]` is the start.
    pub nodes: Vec<Node>,
    /// Total path cost of the plan under the invocation's cost model.
    pub total_cost: f64,
    /// Nodes expanded to find it (diagnostic).
    pub expanded: usize,
}

impl TrajectoryPlan {
    /// Planned travel time, seconds.
    pub fn duration_s(&self) -> f64 {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(first), Some(last)) => last.time_s() - first.time_s(),
            _ => 0.0,
        }
    }

    /// Speed at the end of the plan, m/s.
    pub fn final_speed_mps(&self) -> Option<f64> {
        self.nodes.last().map(Node::speed_mps)
    }

    /// `true` when the start node already satisfied the goal.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }
}
