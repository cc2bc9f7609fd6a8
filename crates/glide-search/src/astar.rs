//! The best-first search driver.

use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use glide_core::{GoalRegion, Node};
use glide_cost::{CostModel, MAX_COST};
use glide_neighbors::NeighborGenerator;

use crate::frontier::OpenEntry;
use crate::{SearchError, SearchResult, TrajectoryPlan};

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// Work bounds for one search invocation.
///
/// The planner runs inside a real-time guidance cycle, so it must fail
/// closed — report "no trajectory" — rather than keep searching past its
/// slot.  Either bound trips the [`SearchError::is_budget_exceeded`] family.
#[derive(Clone, Debug)]
pub struct SearchLimits {
    /// Maximum frontier size before the search gives up.
    pub max_frontier: usize,
    /// Wall-clock budget for one `search` call.  `None` leaves the deadline
    /// to the caller.
    pub time_budget: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_frontier: 100_000, time_budget: None }
    }
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// A* over dynamically generated (distance, time, speed) states.
///
/// The frontier is ordered by `g + heuristic` with ties preferring the node
/// farther downtrack; nodes are identified by value equality on the state
/// grid, with the best-known path cost and parent pointer per node.  All of
/// that state is scoped to one [`search`][AStarPlanner::search] call.
pub struct AStarPlanner {
    limits: SearchLimits,
}

impl AStarPlanner {
    pub fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Search from `start` until a node satisfies `goal`.
    ///
    /// The caller has already bound `generator` to this invocation's
    /// intersections and grid (and coarse plan, if refining).  With a
    /// tolerance-free `goal` the overshoot pruning test is skipped — a
    /// strict goal has no overshoot window to test against.
    ///
    /// Returns the reconstructed trajectory, or a [`SearchError`] when the
    /// frontier empties or a work bound trips.  Both are expected outcomes;
    /// the caller falls back to its default control strategy.
    pub fn search<C, N>(
        &self,
        start: Node,
        goal: &GoalRegion,
        cost_model: &C,
        generator: &N,
    ) -> SearchResult<TrajectoryPlan>
    where
        C: CostModel,
        N: NeighborGenerator,
    {
        let deadline = self.limits.time_budget.map(|budget| (Instant::now() + budget, budget));

        let mut g_score: FxHashMap<Node, f64> = FxHashMap::default();
        let mut parent: FxHashMap<Node, Node> = FxHashMap::default();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut expanded = 0usize;

        g_score.insert(start, 0.0);
        open.push(OpenEntry { f: cost_model.heuristic(&start, goal), g: 0.0, node: start });

        while let Some(entry) = open.pop() {
            if let Some((deadline, budget)) = deadline {
                if Instant::now() > deadline {
                    info!(expanded, "search aborted: time budget spent");
                    return Err(SearchError::TimeBudgetExceeded {
                        budget_ms: budget.as_millis() as u64,
                        expanded,
                    });
                }
            }

            // A cheaper path to this node was admitted after this entry was
            // pushed; the newer entry will handle it.
            if g_score.get(&entry.node).is_some_and(|&best| entry.g > best) {
                continue;
            }

            if cost_model.is_goal(&entry.node, goal) {
                let plan = reconstruct(&parent, &entry, expanded);
                info!(
                    nodes = plan.nodes.len(),
                    total_cost = plan.total_cost,
                    expanded,
                    "goal found"
                );
                return Ok(plan);
            }

            // Overshot states have no way back; drop them unexpanded.
            if goal.tolerances().is_some() && cost_model.is_unusable(&entry.node, goal) {
                continue;
            }

            expanded += 1;
            for successor in generator.neighbors(&entry.node) {
                let edge_cost = cost_model.cost(&entry.node, &successor);
                if edge_cost >= MAX_COST {
                    // Sentinel: the edge is infeasible and does not exist.
                    continue;
                }

                let tentative = entry.g + edge_cost;
                if tentative < g_score.get(&successor).copied().unwrap_or(f64::INFINITY) {
                    g_score.insert(successor, tentative);
                    parent.insert(successor, entry.node);
                    open.push(OpenEntry {
                        f: tentative + cost_model.heuristic(&successor, goal),
                        g: tentative,
                        node: successor,
                    });
                }
            }

            if open.len() > self.limits.max_frontier {
                info!(frontier = open.len(), expanded, "search aborted: frontier over budget");
                return Err(SearchError::FrontierOverflow {
                    frontier: open.len(),
                    max_frontier: self.limits.max_frontier,
                });
            }
        }

        debug!(expanded, "frontier exhausted without reaching the goal");
        Err(SearchError::Exhausted { expanded })
    }
}

impl Default for AStarPlanner {
    fn default() -> Self {
        Self::new(SearchLimits::default())
    }
}

// ── Path reconstruction ───────────────────────────────────────────────────────

/// Walk the parent pointers back from the goal entry and reverse.
///
/// Terminates because every admitted edge strictly advances time, so parent
/// chains cannot cycle.
fn reconstruct(
    parent: &FxHashMap<Node, Node>,
    goal_entry: &OpenEntry,
    expanded: usize,
) -> TrajectoryPlan {
    let mut nodes = vec![goal_entry.node];
    let mut current = goal_entry.node;
    while let Some(&prev) = parent.get(&current) {
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();

    TrajectoryPlan { nodes, total_cost: goal_entry.g, expanded }
}
