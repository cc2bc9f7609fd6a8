//! Unit conversions.
//!
//! The planner works in SI internally (meters, seconds, m/s).  Speed limits
//! and the emissions model's speed bands are specified in mph upstream, so
//! the mph ↔ m/s conversion lives here once.

/// Meters per second in one mile per hour.
pub const MPS_PER_MPH: f64 = 0.44704;

/// Convert miles per hour to meters per second.
#[inline]
pub fn mph_to_mps(mph: f64) -> f64 {
    mph * MPS_PER_MPH
}

/// Convert meters per second to miles per hour.
#[inline]
pub fn mps_to_mph(mps: f64) -> f64 {
    mps / MPS_PER_MPH
}
