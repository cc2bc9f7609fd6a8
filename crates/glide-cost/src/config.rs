//! Cost-model configuration.

use glide_core::units::mph_to_mps;

/// Calibration and weighting parameters for [`MovesCostModel`][crate::MovesCostModel].
///
/// Constructed once by the embedding application and passed by value into
/// the model constructor — there is no ambient configuration lookup.  The
/// A/B/C/M/f terms come from the EPA MOVES highway vehicle population and
/// activity data for the host vehicle's source type.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostConfig {
    /// Rolling resistance term A, kW·s/m.
    pub rolling_term_a: f64,
    /// Rotating resistance term B, kW·s²/m².
    pub rotating_term_b: f64,
    /// Aerodynamic drag term C, kW·s³/m³.
    pub drag_term_c: f64,
    /// Host vehicle mass, metric tons.
    pub vehicle_mass_tons: f64,
    /// Fixed mass factor, metric tons.
    pub fixed_mass_factor: f64,
    /// Road grade, radians.  The roadway is assumed flat.
    pub road_grade_rad: f64,

    /// Divides the fuel cost in Joules to bring it into a ~0–1 range.
    pub fuel_normalization_denominator: f64,
    /// Divides the elapsed time in seconds to bring it into a ~0–1 range.
    pub time_normalization_denominator: f64,

    /// Multiplier applied to the heuristic.  1.0 keeps A* admissible;
    /// greater than 1.0 trades optimality for faster convergence
    /// (weighted A*).
    pub heuristic_weight: f64,
    /// Share (0–1) of the combined cost carried by travel time; fuel carries
    /// the complement.
    pub percent_cost_for_time: f64,

    /// The maximum velocity the vehicle can travel, m/s.
    pub max_velocity_mps: f64,
    /// The maximum acceleration magnitude the vehicle can sustain, m/s².
    pub max_accel_mps2: f64,
}

impl CostConfig {
    /// Share of the combined cost carried by fuel.
    #[inline]
    pub fn percent_cost_for_fuel(&self) -> f64 {
        1.0 - self.percent_cost_for_time
    }
}

impl Default for CostConfig {
    /// MOVES light-duty calibration with an even fuel/time split and an
    /// admissible heuristic.
    fn default() -> Self {
        Self {
            rolling_term_a: 0.22112,
            rotating_term_b: 0.002838,
            drag_term_c: 0.000698,
            vehicle_mass_tons: 1.86686,
            fixed_mass_factor: 1.86686,
            road_grade_rad: 0.0,
            fuel_normalization_denominator: 400_000.0,
            time_normalization_denominator: 60.0,
            heuristic_weight: 1.0,
            percent_cost_for_time: 0.5,
            max_velocity_mps: mph_to_mps(40.0),
            max_accel_mps2: 2.0,
        }
    }
}
