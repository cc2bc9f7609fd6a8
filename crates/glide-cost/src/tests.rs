//! Unit tests for glide-cost.
//!
//! All tests run against an in-memory base-rate table via `Cursor`, so no
//! calibration file is needed.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use crate::{BaseRateTable, CostConfig, MovesCostModel};

    /// A complete base-rate table covering every operating mode the decision
    /// table can produce.  Idle (mode 1) carries the lowest energy rate;
    /// rates grow with mode so the peak is unambiguous.
    pub const SAMPLE_CSV: &str = "\
opModeID,meanBaseRate,meanBaseRateCO2,meanBaseRateNOx,energyRateKJperHr,meanBaseRatePM,meanBaseRateCO
0,0.0,0.0,0.0,60000.0,0.0,0.0
1,0.0,0.0,0.0,50000.0,0.0,0.0
11,0.0,0.0,0.0,70000.0,0.0,0.0
12,0.0,0.0,0.0,80000.0,0.0,0.0
13,0.0,0.0,0.0,90000.0,0.0,0.0
14,0.0,0.0,0.0,100000.0,0.0,0.0
15,0.0,0.0,0.0,110000.0,0.0,0.0
16,0.0,0.0,0.0,120000.0,0.0,0.0
21,0.0,0.0,0.0,130000.0,0.0,0.0
22,0.0,0.0,0.0,140000.0,0.0,0.0
23,0.0,0.0,0.0,150000.0,0.0,0.0
24,0.0,0.0,0.0,160000.0,0.0,0.0
25,0.0,0.0,0.0,170000.0,0.0,0.0
27,0.0,0.0,0.0,180000.0,0.0,0.0
28,0.0,0.0,0.0,190000.0,0.0,0.0
29,0.0,0.0,0.0,200000.0,0.0,0.0
30,0.0,0.0,0.0,210000.0,0.0,0.0
33,0.0,0.0,0.0,220000.0,0.0,0.0
35,0.0,0.0,0.0,240000.0,0.0,0.0
37,0.0,0.0,0.0,260000.0,0.0,0.0
38,0.0,0.0,0.0,270000.0,0.0,0.0
39,0.0,0.0,0.0,280000.0,0.0,0.0
40,0.0,0.0,0.0,300000.0,0.0,0.0
";

    pub fn table() -> BaseRateTable {
        BaseRateTable::from_reader(Cursor::new(SAMPLE_CSV)).unwrap()
    }

    pub fn model() -> MovesCostModel {
        MovesCostModel::new(CostConfig::default(), table()).unwrap()
    }

    /// Mirror of the model's normalize-and-combine arithmetic for expected
    /// values, using the default config's constants.
    pub fn expected_cost(rate_kj_hr: f64, dt: f64) -> f64 {
        let joules = 1000.0 * (rate_kj_hr / 3600.0) * dt;
        let cfg = CostConfig::default();
        (joules / cfg.fuel_normalization_denominator) * cfg.percent_cost_for_fuel()
            + (dt / cfg.time_normalization_denominator) * cfg.percent_cost_for_time
    }
}

// ── Base-rate table loading ───────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use std::io::Cursor;

    use crate::{BaseRateTable, CostError};

    #[test]
    fn loads_every_row() {
        let t = super::helpers::table();
        assert_eq!(t.len(), 23);
        assert_eq!(t.energy_rate_kj_hr(1), Some(50_000.0));
        assert_eq!(t.energy_rate_kj_hr(40), Some(300_000.0));
        assert_eq!(t.energy_rate_kj_hr(99), None);
    }

    #[test]
    fn peak_is_the_highest_rate() {
        assert_eq!(super::helpers::table().peak_energy_kj_hr(), 300_000.0);
    }

    #[test]
    fn non_energy_columns_are_retained() {
        let csv = "h1,h2,h3,h4,h5,h6,h7\n1,0.5,0.6,0.7,50000.0,0.8,0.9\n";
        let t = BaseRateTable::from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(t.row(1), Some(&[0.5, 0.6, 0.7, 50_000.0, 0.8, 0.9]));
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let csv = "h1,h2,h3,h4,h5,h6,h7\n1,0,0,0,50000.0,0,0\n2,0,0,50000.0,0,0\n";
        let err = BaseRateTable::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CostError::ColumnCount { line: 3, found: 6 }));
    }

    #[test]
    fn unparseable_number_is_fatal() {
        let csv = "h1,h2,h3,h4,h5,h6,h7\n1,0,0,0,not-a-number,0,0\n";
        let err = BaseRateTable::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CostError::Parse { line: 2, .. }));
    }

    #[test]
    fn empty_table_is_fatal() {
        let csv = "h1,h2,h3,h4,h5,h6,h7\n";
        let err = BaseRateTable::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CostError::Empty));
    }

    #[test]
    fn missing_idle_row_is_fatal() {
        let csv = "h1,h2,h3,h4,h5,h6,h7\n0,0,0,0,60000.0,0,0\n";
        let err = BaseRateTable::from_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, CostError::MissingIdleMode));
    }
}

// ── VSP and the operating-mode decision table ─────────────────────────────────

#[cfg(test)]
mod vsp {
    use crate::{operating_mode, vehicle_specific_power, CostConfig};

    #[test]
    fn zero_at_rest() {
        let cfg = CostConfig::default();
        assert_eq!(vehicle_specific_power(&cfg, 0.0, 0.0), 0.0);
    }

    #[test]
    fn grows_with_speed_and_acceleration() {
        let cfg = CostConfig::default();
        let cruise = vehicle_specific_power(&cfg, 0.0, 10.0);
        let faster = vehicle_specific_power(&cfg, 0.0, 15.0);
        let pushing = vehicle_specific_power(&cfg, 1.5, 10.0);
        assert!(cruise > 0.0);
        assert!(faster > cruise);
        assert!(pushing > cruise);
    }

    #[test]
    fn braking_always_maps_to_mode_0() {
        assert_eq!(operating_mode(5.0, 3.0, -1.0), Some(0));
        assert_eq!(operating_mode(20.0, 25.0, -2.5), Some(0));
    }

    #[test]
    fn near_zero_speed_is_idle() {
        // Below 1 mph (0.447 m/s) in either direction.
        assert_eq!(operating_mode(0.0, 0.0, 0.0), Some(1));
        assert_eq!(operating_mode(3.0, 0.4, 0.0), Some(1));
        assert_eq!(operating_mode(3.0, -0.4, 0.0), Some(1));
    }

    #[test]
    fn low_speed_band_vsp_bins() {
        // 10 m/s is below 25 mph (11.176 m/s).
        assert_eq!(operating_mode(-1.0, 10.0, 0.0), Some(11));
        assert_eq!(operating_mode(1.0, 10.0, 0.0), Some(12));
        assert_eq!(operating_mode(4.0, 10.0, 0.0), Some(13));
        assert_eq!(operating_mode(7.0, 10.0, 0.0), Some(14));
        assert_eq!(operating_mode(10.0, 10.0, 0.0), Some(15));
        assert_eq!(operating_mode(15.0, 10.0, 0.0), Some(16));
    }

    #[test]
    fn mid_speed_band_vsp_bins() {
        // 15 m/s sits between 25 and 50 mph.
        assert_eq!(operating_mode(-1.0, 15.0, 0.0), Some(21));
        assert_eq!(operating_mode(1.0, 15.0, 0.0), Some(22));
        assert_eq!(operating_mode(4.0, 15.0, 0.0), Some(23));
        assert_eq!(operating_mode(7.0, 15.0, 0.0), Some(24));
        assert_eq!(operating_mode(10.0, 15.0, 0.0), Some(25));
        assert_eq!(operating_mode(13.0, 15.0, 0.0), Some(27));
        assert_eq!(operating_mode(20.0, 15.0, 0.0), Some(28));
        assert_eq!(operating_mode(25.0, 15.0, 0.0), Some(29));
        assert_eq!(operating_mode(31.0, 15.0, 0.0), Some(30));
    }

    #[test]
    fn high_speed_band_vsp_bins() {
        // 23 m/s is above 50 mph (22.352 m/s).
        assert_eq!(operating_mode(5.0, 23.0, 0.0), Some(33));
        assert_eq!(operating_mode(7.0, 23.0, 0.0), Some(35));
        assert_eq!(operating_mode(13.0, 23.0, 0.0), Some(37));
        assert_eq!(operating_mode(19.0, 23.0, 0.0), Some(38));
        assert_eq!(operating_mode(25.0, 23.0, 0.0), Some(39));
        assert_eq!(operating_mode(31.0, 23.0, 0.0), Some(40));
    }

    #[test]
    fn reversing_is_outside_the_domain() {
        assert_eq!(operating_mode(0.0, -1.0, 0.0), None);
    }
}

// ── Edge cost ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use std::io::Cursor;

    use glide_core::Node;

    use crate::{BaseRateTable, CostConfig, CostModel, MovesCostModel, MAX_COST};

    #[test]
    fn valid_edge_is_finite_and_non_negative() {
        let m = super::helpers::model();
        // 10 m/s cruise for 2 s: mode 12 (small positive VSP at low speed).
        let cost = m.cost(&Node::new(0.0, 0.0, 10.0), &Node::new(20.0, 2.0, 10.0));
        assert!(cost.is_finite());
        assert!(cost >= 0.0);
        assert!((cost - super::helpers::expected_cost(80_000.0, 2.0)).abs() < 1e-9);
    }

    #[test]
    fn stop_edge_is_valid_and_idles() {
        let m = super::helpers::model();
        // Holding at a stop bar: time advances, distance and speed stay zero.
        let cost = m.cost(&Node::new(100.0, 4.0, 0.0), &Node::new(100.0, 6.0, 0.0));
        assert!((cost - super::helpers::expected_cost(50_000.0, 2.0)).abs() < 1e-9);
    }

    #[test]
    fn non_advancing_time_is_rejected() {
        let m = super::helpers::model();
        let n = Node::new(0.0, 5.0, 10.0);
        assert_eq!(m.cost(&n, &Node::new(10.0, 5.0, 10.0)), MAX_COST);
        assert_eq!(m.cost(&n, &Node::new(10.0, 4.0, 10.0)), MAX_COST);
    }

    #[test]
    fn backward_distance_is_rejected() {
        let m = super::helpers::model();
        let cost = m.cost(&Node::new(50.0, 0.0, 10.0), &Node::new(49.0, 2.0, 10.0));
        assert_eq!(cost, MAX_COST);
    }

    #[test]
    fn negative_speed_is_rejected() {
        let m = super::helpers::model();
        assert_eq!(
            m.cost(&Node::new(0.0, 0.0, -1.0), &Node::new(10.0, 2.0, 10.0)),
            MAX_COST
        );
        assert_eq!(
            m.cost(&Node::new(0.0, 0.0, 10.0), &Node::new(10.0, 2.0, -1.0)),
            MAX_COST
        );
    }

    #[test]
    fn sentinel_is_not_infinity() {
        // The driver distinguishes "edge does not exist" (MAX_COST) from the
        // heuristic's "node cannot reach the goal" (infinity).
        assert!(MAX_COST.is_finite());
    }

    #[test]
    fn missing_mode_row_falls_back_to_peak() {
        // A table with only braking and idle rows: a 10 m/s cruise edge needs
        // mode 12, which is absent, so the peak rate (60000) applies.
        let csv = "h1,h2,h3,h4,h5,h6,h7\n0,0,0,0,60000.0,0,0\n1,0,0,0,50000.0,0,0\n";
        let table = BaseRateTable::from_reader(Cursor::new(csv)).unwrap();
        let m = MovesCostModel::new(CostConfig::default(), table).unwrap();

        let cost = m.cost(&Node::new(0.0, 0.0, 10.0), &Node::new(20.0, 2.0, 10.0));
        assert!((cost - super::helpers::expected_cost(60_000.0, 2.0)).abs() < 1e-9);
    }

    #[test]
    fn bad_config_fails_construction() {
        let cfg = CostConfig { percent_cost_for_time: 1.5, ..CostConfig::default() };
        assert!(MovesCostModel::new(cfg, super::helpers::table()).is_err());

        let cfg = CostConfig { time_normalization_denominator: 0.0, ..CostConfig::default() };
        assert!(MovesCostModel::new(cfg, super::helpers::table()).is_err());
    }
}

// ── Heuristic ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heuristic {
    use glide_core::{GoalRegion, Node};

    use crate::{CostConfig, CostModel, MovesCostModel};

    fn goal_200m() -> GoalRegion {
        GoalRegion::new(Node::new(200.0, 0.0, 10.0), Node::new(5.0, 0.0, 2.0))
    }

    #[test]
    fn zero_at_goal() {
        let m = super::helpers::model();
        let at_goal = Node::new(200.0, 18.0, 10.0);
        assert!(m.is_goal(&at_goal, &goal_200m()));
        assert_eq!(m.heuristic(&at_goal, &goal_200m()), 0.0);
    }

    #[test]
    fn infinite_past_the_acceptance_window() {
        let m = super::helpers::model();
        // 210 m is beyond goal + tolerance (205 m) and the speed is off.
        let overshot = Node::new(210.0, 20.0, 17.0);
        assert_eq!(m.heuristic(&overshot, &goal_200m()), f64::INFINITY);
    }

    #[test]
    fn infinite_when_operating_speed_is_unreachable() {
        let m = super::helpers::model();
        // 15 m to go at 5 m/s: reaching 17.9 m/s at 2 m/s² takes ~74 m.
        let late = Node::new(190.0, 20.0, 5.0);
        assert_eq!(m.heuristic(&late, &goal_200m()), f64::INFINITY);
    }

    #[test]
    fn finite_on_an_open_approach() {
        let m = super::helpers::model();
        let h = m.heuristic(&Node::new(0.0, 0.0, 10.0), &goal_200m());
        assert!(h.is_finite());
        assert!(h > 0.0);
    }

    #[test]
    fn scales_linearly_with_heuristic_weight() {
        let admissible = super::helpers::model();
        let weighted = MovesCostModel::new(
            CostConfig { heuristic_weight: 2.0, ..CostConfig::default() },
            super::helpers::table(),
        )
        .unwrap();

        let n = Node::new(0.0, 0.0, 10.0);
        let h1 = admissible.heuristic(&n, &goal_200m());
        let h2 = weighted.heuristic(&n, &goal_200m());
        assert!((h2 - 2.0 * h1).abs() < 1e-12);
    }

    #[test]
    fn admissible_against_a_known_feasible_path() {
        // Constant 10 m/s, 2 s steps, 0 → 200 m.  The heuristic at every
        // prefix must not exceed the real cost of the remaining suffix.
        // Operating speed equals the corridor speed so the accelerate-then-
        // cruise profile stays reachable at every sampled node.
        let m = MovesCostModel::new(
            CostConfig { max_velocity_mps: 10.0, ..CostConfig::default() },
            super::helpers::table(),
        )
        .unwrap();
        let goal = goal_200m();
        let path: Vec<Node> =
            (0..=10).map(|i| Node::new(20.0 * i as f64, 2.0 * i as f64, 10.0)).collect();
        assert!(m.is_goal(path.last().unwrap(), &goal));

        let mut suffix_cost = 0.0;
        for i in (0..path.len() - 1).rev() {
            suffix_cost += m.cost(&path[i], &path[i + 1]);
            let h = m.heuristic(&path[i], &goal);
            assert!(
                h <= suffix_cost + 1e-9,
                "heuristic {h} exceeds remaining path cost {suffix_cost} at node {i}"
            );
        }
    }
}

// ── Goal classification ───────────────────────────────────────────────────────

#[cfg(test)]
mod goal {
    use glide_core::{GoalRegion, Node};

    use crate::CostModel;

    fn goal() -> GoalRegion {
        GoalRegion::new(Node::new(200.0, 0.0, 10.0), Node::new(5.0, 0.0, 2.0))
    }

    #[test]
    fn accepts_inside_the_region() {
        let m = super::helpers::model();
        assert!(m.is_goal(&Node::new(196.0, 18.0, 11.0), &goal()));
        assert!(m.is_goal(&Node::new(203.0, 18.0, 8.0), &goal()));
    }

    #[test]
    fn rejects_outside_the_region() {
        let m = super::helpers::model();
        // Short of the window.
        assert!(!m.is_goal(&Node::new(194.0, 18.0, 10.0), &goal()));
        // Speed off by more than tolerance.
        assert!(!m.is_goal(&Node::new(200.0, 18.0, 7.0), &goal()));
    }

    #[test]
    fn widening_tolerance_never_revokes_acceptance() {
        let m = super::helpers::model();
        let node = Node::new(196.0, 18.0, 11.5);
        let target = Node::new(200.0, 0.0, 10.0);

        let narrow = GoalRegion::new(target, Node::new(5.0, 0.0, 2.0));
        assert!(m.is_goal(&node, &narrow));

        for (d_tol, v_tol) in [(6.0, 2.0), (5.0, 3.0), (20.0, 10.0)] {
            let wider = GoalRegion::new(target, Node::new(d_tol, 0.0, v_tol));
            assert!(m.is_goal(&node, &wider), "widened ({d_tol}, {v_tol}) revoked acceptance");
        }
    }

    #[test]
    fn strict_goal_requires_at_or_above_target_speed() {
        let m = super::helpers::model();
        let strict = GoalRegion::strict(Node::new(200.0, 0.0, 10.0));
        assert!(m.is_goal(&Node::new(200.0, 18.0, 12.0), &strict));
        assert!(!m.is_goal(&Node::new(200.0, 18.0, 9.0), &strict));
        assert!(!m.is_goal(&Node::new(199.0, 18.0, 12.0), &strict));
    }

    #[test]
    fn unusable_only_when_overshot_and_off_speed() {
        let m = super::helpers::model();
        // Past 205 m with speed far from 10 ± 2: unrecoverable.
        assert!(m.is_unusable(&Node::new(210.0, 20.0, 16.0), &goal()));
        // Past the window but speed within tolerance: that is a goal, not waste.
        assert!(!m.is_unusable(&Node::new(210.0, 20.0, 11.0), &goal()));
        // Still inside the window.
        assert!(!m.is_unusable(&Node::new(198.0, 20.0, 16.0), &goal()));
    }

    #[test]
    #[should_panic(expected = "requires a goal region with tolerances")]
    fn unusable_on_a_strict_goal_fails_loudly() {
        let m = super::helpers::model();
        let strict = GoalRegion::strict(Node::new(200.0, 0.0, 10.0));
        m.is_unusable(&Node::new(210.0, 20.0, 16.0), &strict);
    }
}
