//! The planner's state point.
//!
//! # Design
//!
//! A search state is a (distance, time, speed) triple.  The search driver
//! needs exact equality and hashing to merge states that different expansion
//! orders reach independently, so the three fields are stored as integer
//! multiples of a fixed grid resolution rather than as raw `f64`s:
//!
//!   distance → 0.1 m    time → 0.1 s    speed → 0.1 m/s
//!
//! Using integers as the canonical representation means state identity is
//! exact (no floating-point drift in map keys) and comparisons are O(1) —
//! the same reasoning that puts an integer tick at the heart of most
//! discrete-event clocks.  The `f64` constructors round onto the grid; the
//! `f64` accessors convert back for kinematic arithmetic.
//!
//! Nodes are value objects and are never mutated after creation.  Goal
//! acceptance uses a tolerance region ([`crate::GoalRegion`]), never node
//! identity.

use std::fmt;

/// State-space grid resolution for the distance axis, meters.
pub const DISTANCE_RES_M: f64 = 0.1;
/// State-space grid resolution for the time axis, seconds.
pub const TIME_RES_S: f64 = 0.1;
/// State-space grid resolution for the speed axis, m/s.
pub const SPEED_RES_MPS: f64 = 0.1;

/// A single point in the planner's (distance, time, speed) state space.
///
/// `distance` is meters downtrack of the plan origin, `time` is seconds since
/// plan start, `speed` is m/s.  All three are expected to be non-negative on
/// well-formed states; negative values are representable so that invalid
/// inputs can flow through the cost model's sentinel path instead of
/// panicking.
///
/// Along a planned path, a successor's `time` is strictly greater than its
/// predecessor's and its `distance` is greater or equal (a vehicle holding at
/// a stop bar produces zero-length edges).
///
/// The derived `Ord` is lexicographic over (distance, time, speed) and exists
/// for deterministic search bookkeeping, not for any physical meaning.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    distance: i64,
    time: i64,
    speed: i64,
}

impl Node {
    /// Construct from physical units, rounding each axis to the state grid.
    pub fn new(distance_m: f64, time_s: f64, speed_mps: f64) -> Self {
        Self {
            distance: (distance_m / DISTANCE_RES_M).round() as i64,
            time: (time_s / TIME_RES_S).round() as i64,
            speed: (speed_mps / SPEED_RES_MPS).round() as i64,
        }
    }

    /// Construct from raw grid units, exactly.
    pub const fn from_units(distance: i64, time: i64, speed: i64) -> Self {
        Self { distance, time, speed }
    }

    /// Distance downtrack of the plan origin, meters.
    #[inline]
    pub fn distance_m(&self) -> f64 {
        self.distance as f64 * DISTANCE_RES_M
    }

    /// Time since plan start, seconds.
    #[inline]
    pub fn time_s(&self) -> f64 {
        self.time as f64 * TIME_RES_S
    }

    /// Speed, m/s.
    #[inline]
    pub fn speed_mps(&self) -> f64 {
        self.speed as f64 * SPEED_RES_MPS
    }

    // ── Raw grid accessors ────────────────────────────────────────────────
    //
    // Exact integer views for bookkeeping that must not be subject to
    // floating-point rounding (tie-breaks, tolerance window tests).

    #[inline]
    pub fn distance_units(&self) -> i64 {
        self.distance
    }

    #[inline]
    pub fn time_units(&self) -> i64 {
        self.time
    }

    #[inline]
    pub fn speed_units(&self) -> i64 {
        self.speed
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(d={:.1}m, t={:.1}s, v={:.1}m/s)",
            self.distance_m(),
            self.time_s(),
            self.speed_mps()
        )
    }
}
