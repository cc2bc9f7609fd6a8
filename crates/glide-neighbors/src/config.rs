//! Neighbor-generation configuration.

use glide_core::units::mph_to_mps;

/// Tuning for the neighbor generators.
///
/// Constructed once by the embedding application and passed into the
/// generator constructors; per-invocation inputs (intersections, grid
/// increments, the coarse corridor) arrive through
/// [`NeighborGenerator::initialize`][crate::NeighborGenerator::initialize]
/// instead.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborConfig {
    /// Acceleration/deceleration magnitude limit, m/s².
    pub max_accel_mps2: f64,
    /// Speed limit of the approach, m/s.
    pub speed_limit_mps: f64,
    /// Below this the vehicle cannot reliably track a speed command, m/s.
    /// Candidate speeds under it are only generated when stopping at a bar.
    pub crawling_speed_mps: f64,
    /// Maximum distance before the stop bar at which stopping is acceptable, m.
    pub acceptable_stop_distance_m: f64,
    /// Signal-violation look-back/look-ahead window, s.  The fine pass
    /// checks crossings at ±¼ of this, the coarse pass at ±½.
    pub time_buffer_s: f64,
    /// Distance beyond which per-node debug logging turns on, m.
    /// Negative disables it.
    pub debug_threshold_m: f64,
    /// Vehicle dynamic response lag, s.  The fine pass never plans a time
    /// step shorter than this.
    pub response_lag_s: f64,
    /// Half-width of the allowable-speed corridor around the coarse plan, m/s.
    pub allowable_speed_region_mps: f64,
}

impl Default for NeighborConfig {
    fn default() -> Self {
        Self {
            max_accel_mps2: 2.0,
            speed_limit_mps: mph_to_mps(40.0),
            crawling_speed_mps: mph_to_mps(5.0),
            acceptable_stop_distance_m: 6.0,
            time_buffer_s: 4.0,
            debug_threshold_m: -1.0,
            response_lag_s: 1.9,
            allowable_speed_region_mps: 5.0,
        }
    }
}
