//! The `CostModel` trait and its MOVES-calibrated implementation.

use std::cell::Cell;

use tracing::debug;

use glide_core::{GoalRegion, Node};

use crate::table::{BaseRateTable, IDLE_OP_MODE};
use crate::vsp::{operating_mode, vehicle_specific_power};
use crate::{CostConfig, CostError, CostResult};

/// Sentinel returned by [`CostModel::cost`] for an infeasible edge.
///
/// Deliberately `f64::MAX` rather than infinity: the search driver compares
/// against this value to recognize "never traverse this edge" while the
/// heuristic reserves `f64::INFINITY` for "this node cannot reach the goal".
pub const MAX_COST: f64 = f64::MAX;

const SEC_PER_HR: f64 = 3600.0;
const J_PER_KJ: f64 = 1000.0;

// ── CostModel trait ───────────────────────────────────────────────────────────

/// Edge cost, cost-to-goal estimation, and goal classification for the
/// trajectory search.
///
/// All goal-dependent questions take the invocation's [`GoalRegion`]
/// explicitly, so a model instance carries no goal state between planning
/// invocations.
pub trait CostModel {
    /// Incremental cost of moving from `from` to an adjacent `to`.
    ///
    /// Requires `to.time > from.time`, `to.distance ≥ from.distance` and
    /// non-negative speeds; violations return [`MAX_COST`] (and are logged)
    /// rather than erroring, and the search driver must treat that value as
    /// "edge does not exist".
    fn cost(&self, from: &Node, to: &Node) -> f64;

    /// Estimated remaining cost from `node` to the goal.
    ///
    /// Zero exactly at the goal; `f64::INFINITY` for nodes that can no
    /// longer reach it.  Admissible when the configured heuristic weight
    /// is 1.0.
    fn heuristic(&self, node: &Node, goal: &GoalRegion) -> f64;

    /// `true` when `node` satisfies the goal region.
    fn is_goal(&self, node: &Node, goal: &GoalRegion) -> bool;

    /// `true` when `node` overshot the goal region and cannot be corrected —
    /// the search should discard it without expansion.
    fn is_unusable(&self, node: &Node, goal: &GoalRegion) -> bool;
}

// ── MovesCostModel ────────────────────────────────────────────────────────────

/// [`CostModel`] backed by the MOVES emissions methodology.
///
/// Fuel energy for an edge comes from the operating-mode base-rate table;
/// the returned cost is
///
///   (J / fuel_norm) · pct_fuel  +  (dt / time_norm) · pct_time
///
/// with the two shares complementary and fixed at construction.
///
/// # Thread model
///
/// The model is reused across planning invocations but each invocation runs
/// on one thread.  The diagnostic counter of cost evaluations since the last
/// input error lives in a `Cell`, which makes the model intentionally
/// `!Sync`; clone it (the table is the only heap data) for concurrent
/// vehicles.
#[derive(Clone)]
pub struct MovesCostModel {
    cfg: CostConfig,
    table: BaseRateTable,
    percent_cost_for_fuel: f64,
    idle_rate_kj_hr: f64,
    costs_since_error: Cell<u64>,
}

impl MovesCostModel {
    /// Build the model from its configuration and a loaded base-rate table.
    ///
    /// Fails when the configuration is out of range; table problems have
    /// already failed loudly in [`BaseRateTable::from_reader`].
    pub fn new(cfg: CostConfig, table: BaseRateTable) -> CostResult<Self> {
        if !(0.0..=1.0).contains(&cfg.percent_cost_for_time) {
            return Err(CostError::Config(format!(
                "percent_cost_for_time must be within [0, 1], got {}",
                cfg.percent_cost_for_time
            )));
        }
        if cfg.fuel_normalization_denominator <= 0.0 || cfg.time_normalization_denominator <= 0.0 {
            return Err(CostError::Config(
                "normalization denominators must be positive".into(),
            ));
        }
        if cfg.max_velocity_mps <= 0.0 || cfg.max_accel_mps2 <= 0.0 {
            return Err(CostError::Config(
                "max velocity and max acceleration must be positive".into(),
            ));
        }

        let idle_rate_kj_hr = table
            .energy_rate_kj_hr(IDLE_OP_MODE)
            .ok_or(CostError::MissingIdleMode)?;

        Ok(Self {
            percent_cost_for_fuel: cfg.percent_cost_for_fuel(),
            idle_rate_kj_hr,
            cfg,
            table,
            costs_since_error: Cell::new(0),
        })
    }

    pub fn config(&self) -> &CostConfig {
        &self.cfg
    }

    pub fn table(&self) -> &BaseRateTable {
        &self.table
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Energy in Joules consumed over `dt` seconds at `rate_kj_hr`.
    #[inline]
    fn joules_over(rate_kj_hr: f64, dt: f64) -> f64 {
        J_PER_KJ * (rate_kj_hr / SEC_PER_HR) * dt
    }

    /// Normalize and combine a fuel energy (J) with an elapsed time (s).
    #[inline]
    fn combine(&self, joules: f64, dt: f64) -> f64 {
        let normalized_fuel = joules / self.cfg.fuel_normalization_denominator;
        let normalized_time = dt / self.cfg.time_normalization_denominator;
        normalized_fuel * self.percent_cost_for_fuel
            + normalized_time * self.cfg.percent_cost_for_time
    }
}

impl CostModel for MovesCostModel {
    fn cost(&self, from: &Node, to: &Node) -> f64 {
        // Input sanity: edges run strictly forward in time, never backward in
        // distance, at non-negative speeds.  Grid units keep the comparisons
        // exact.
        if to.time_units() <= from.time_units()
            || to.distance_units() < from.distance_units()
            || from.speed_units() < 0
            || to.speed_units() < 0
        {
            debug!(
                %from,
                %to,
                evaluated = self.costs_since_error.get(),
                "cost invoked with invalid nodes"
            );
            self.costs_since_error.set(0);
            return MAX_COST;
        }
        self.costs_since_error.set(self.costs_since_error.get() + 1);

        let dv = to.speed_mps() - from.speed_mps();
        let avg_v = (to.speed_mps() + from.speed_mps()) / 2.0;
        let dt = to.time_s() - from.time_s();
        let accel = dv / dt;

        let vsp = vehicle_specific_power(&self.cfg, accel, avg_v);
        let rate_kj_hr = match operating_mode(vsp, avg_v, accel)
            .and_then(|mode| self.table.energy_rate_kj_hr(mode))
        {
            Some(rate) => rate,
            None => {
                // Outside the decision table's domain (or a mode the table
                // has no row for): substitute the highest known rate as a
                // conservative upper bound.
                debug!(
                    %from,
                    %to,
                    vsp,
                    peak = self.table.peak_energy_kj_hr(),
                    "operating mode outside table domain, using peak rate"
                );
                self.table.peak_energy_kj_hr()
            }
        };

        self.combine(Self::joules_over(rate_kj_hr, dt), dt)
    }

    /// Minimum cost to the goal: fuel burned at the idle rate for the
    /// shortest physically possible travel time, normalized and weighted
    /// exactly like [`MovesCostModel::cost`] so estimates and real costs are
    /// directly comparable.
    fn heuristic(&self, node: &Node, goal: &GoalRegion) -> f64 {
        if self.is_goal(node, goal) {
            return 0.0;
        }

        // Past the acceptance window without satisfying the goal: hopeless.
        let goal_distance = goal.max_distance_m();
        if node.distance_m() > goal_distance {
            return f64::INFINITY;
        }

        let distance_to_goal = goal_distance - node.distance_m();
        let cur_speed = node.speed_mps();

        // Fastest profile: accelerate at the limit to operating speed, then
        // cruise.
        let delta_speed = self.cfg.max_velocity_mps - cur_speed;
        let time_to_oper_speed = delta_speed / self.cfg.max_accel_mps2;
        let dist_to_oper_speed = cur_speed * time_to_oper_speed
            + 0.5 * self.cfg.max_accel_mps2 * time_to_oper_speed * time_to_oper_speed;

        if dist_to_oper_speed > distance_to_goal {
            // Cannot reach operating speed before the goal.
            return f64::INFINITY;
        }
        let cruise_time = (distance_to_goal - dist_to_oper_speed) / self.cfg.max_velocity_mps;
        let min_sec_to_goal = time_to_oper_speed + cruise_time;

        let min_joules = Self::joules_over(self.idle_rate_kj_hr, min_sec_to_goal);
        self.combine(min_joules, min_sec_to_goal) * self.cfg.heuristic_weight
    }

    /// At the goal when at or past the target distance and at operating
    /// speed.  Time is ignored: there is no way to predict how long a signal
    /// will hold the vehicle, so arrival time is minimized through the cost
    /// function instead of gating acceptance.
    fn is_goal(&self, node: &Node, goal: &GoalRegion) -> bool {
        let target = goal.target();
        let result = match goal.tolerances() {
            Some(tol) => {
                node.distance_units() >= target.distance_units() - tol.distance_units()
                    && (node.speed_units() - target.speed_units()).abs() <= tol.speed_units()
            }
            None => {
                node.distance_units() >= target.distance_units()
                    && node.speed_units() >= target.speed_units()
            }
        };
        if result {
            debug!(node = %node, %goal, "node satisfies the goal region");
        }
        result
    }

    /// Past the far edge of the acceptance window with a speed still outside
    /// tolerance — overshot and uncorrectable.
    ///
    /// # Panics
    ///
    /// Panics on a strict (tolerance-free) [`GoalRegion`]: without an
    /// overshoot window the question is meaningless, and answering it
    /// quietly would corrupt the search.
    fn is_unusable(&self, node: &Node, goal: &GoalRegion) -> bool {
        let Some(tol) = goal.tolerances() else {
            panic!("is_unusable requires a goal region with tolerances")
        };
        let target = goal.target();
        node.distance_units() > target.distance_units() + tol.distance_units()
            && (node.speed_units() - target.speed_units()).abs() > tol.speed_units()
    }
}
