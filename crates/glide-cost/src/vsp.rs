//! Vehicle-specific power and the MOVES operating-mode decision table.

use glide_core::units::MPS_PER_MPH;

use crate::CostConfig;

/// Acceleration due to gravity, m/s².
pub const GRAVITY_MPS2: f64 = 9.8;

// The MOVES documentation presents the speed bands in mi/hr; converted here
// once so the hot path never converts.
const ONE_MPH_MPS: f64 = 1.0 * MPS_PER_MPH;
const TWENTY_FIVE_MPH_MPS: f64 = 25.0 * MPS_PER_MPH;
const FIFTY_MPH_MPS: f64 = 50.0 * MPS_PER_MPH;

/// Vehicle-specific power, kW/tonne, for a vehicle at `avg_speed_mps`
/// undergoing `accel_mps2`.
///
/// VSP = (A·v + B·v² + C·v³ + M·v·(a + g·sin θ)) / f
///
/// where A/B/C are the rolling/rotating/drag terms, M the vehicle mass,
/// f the fixed mass factor, and θ the road grade (zero on the assumed-flat
/// roadway).
pub fn vehicle_specific_power(cfg: &CostConfig, accel_mps2: f64, avg_speed_mps: f64) -> f64 {
    let v = avg_speed_mps;
    let v_sqr = v * v;
    let slope = cfg.road_grade_rad.sin();
    (cfg.rolling_term_a * v
        + cfg.rotating_term_b * v_sqr
        + cfg.drag_term_c * v_sqr * v
        + cfg.vehicle_mass_tons * v * (accel_mps2 + GRAVITY_MPS2 * slope))
        / cfg.fixed_mass_factor
}

/// The MOVES operating-mode bin for (VSP, speed, acceleration), or `None`
/// when the combination falls outside the decision table's domain.
///
/// Speed bands split at 1, 25 and 50 mph with VSP bands inside each;
/// an acceleration of −1.0 m/s² or harder is braking and always maps to the
/// deceleration mode 0, regardless of speed.  (The full MOVES criterion also
/// inspects the two previous accelerations; using the instantaneous value
/// alone keeps the cost function a pure function of one edge.)
pub fn operating_mode(vsp: f64, speed_mps: f64, accel_mps2: f64) -> Option<u8> {
    if accel_mps2 <= -1.0 {
        return Some(0);
    }
    if speed_mps >= FIFTY_MPH_MPS {
        Some(if vsp < 6.0 {
            33
        } else if vsp < 12.0 {
            35
        } else if vsp < 18.0 {
            37
        } else if vsp < 24.0 {
            38
        } else if vsp < 30.0 {
            39
        } else {
            40
        })
    } else if (-ONE_MPH_MPS..ONE_MPH_MPS).contains(&speed_mps) {
        Some(1)
    } else if speed_mps >= TWENTY_FIVE_MPH_MPS {
        Some(if vsp < 0.0 {
            21
        } else if vsp < 3.0 {
            22
        } else if vsp < 6.0 {
            23
        } else if vsp < 9.0 {
            24
        } else if vsp < 12.0 {
            25
        } else if vsp < 18.0 {
            27
        } else if vsp < 24.0 {
            28
        } else if vsp < 30.0 {
            29
        } else {
            30
        })
    } else if speed_mps >= 0.0 {
        Some(if vsp < 0.0 {
            11
        } else if vsp < 3.0 {
            12
        } else if vsp < 6.0 {
            13
        } else if vsp < 9.0 {
            14
        } else if vsp < 12.0 {
            15
        } else {
            16
        })
    } else {
        None
    }
}
