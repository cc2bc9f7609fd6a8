//! Per-invocation goal context.
//!
//! # Design
//!
//! Goal and tolerance state is scoped to a single planning invocation, so it
//! travels as an explicit value passed into every cost-model and search call
//! rather than as fields mutated on a long-lived component between calls.
//! A `GoalRegion` built with [`GoalRegion::new`] always carries tolerances;
//! the tolerance-free [`GoalRegion::strict`] form exists for callers that
//! only need the "at or past the target, at or above the target speed" test.

use std::fmt;

use crate::Node;

/// A target [`Node`] plus an optional Node-shaped acceptance tolerance.
///
/// The tolerance node's `distance` and `speed` fields widen the acceptance
/// region symmetrically around the target; its `time` field is unused
/// (arrival time cannot be predicted in the presence of signal delay, so
/// time never participates in goal acceptance — it is minimized through the
/// cost function instead).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalRegion {
    target: Node,
    tolerances: Option<Node>,
}

impl GoalRegion {
    /// A goal with an acceptance tolerance around the target.
    pub fn new(target: Node, tolerances: Node) -> Self {
        Self { target, tolerances: Some(tolerances) }
    }

    /// A tolerance-free goal: accepted at or past the target distance, at or
    /// above the target speed.
    ///
    /// Strict regions have no overshoot window, so they cannot answer the
    /// cost model's `is_unusable` test — see `MovesCostModel::is_unusable`.
    pub fn strict(target: Node) -> Self {
        Self { target, tolerances: None }
    }

    #[inline]
    pub fn target(&self) -> Node {
        self.target
    }

    #[inline]
    pub fn tolerances(&self) -> Option<Node> {
        self.tolerances
    }

    /// The far edge of the acceptance window: target distance plus distance
    /// tolerance (or the target distance itself for a strict goal), meters.
    pub fn max_distance_m(&self) -> f64 {
        match self.tolerances {
            Some(tol) => self.target.distance_m() + tol.distance_m(),
            None => self.target.distance_m(),
        }
    }
}

impl fmt::Display for GoalRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tolerances {
            Some(tol) => write!(f, "goal {} ± {}", self.target, tol),
            None => write!(f, "goal {} (strict)", self.target),
        }
    }
}
