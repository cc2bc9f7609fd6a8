//! Static per-intersection geometry.

use std::fmt;

/// The planner's view of one signalized intersection: where its stop bar sits
/// along the planned route, and which index to hand the phase oracle.
///
/// Read-only during a search.  The wire-message decoding that produces these
/// values (MAP/SPaT geometry) happens upstream of this workspace.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionData {
    /// Index of this intersection in the oracle's timing data.
    pub index: usize,
    /// Stop-bar position, meters downtrack of the plan origin.
    pub stop_bar_m: f64,
}

impl IntersectionData {
    /// # Panics
    /// Panics in debug builds if `stop_bar_m` is negative or non-finite.
    pub fn new(index: usize, stop_bar_m: f64) -> Self {
        debug_assert!(
            stop_bar_m.is_finite() && stop_bar_m >= 0.0,
            "stop bar must be a finite non-negative distance, got {stop_bar_m}"
        );
        Self { index, stop_bar_m }
    }
}

impl fmt::Display for IntersectionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "intersection {} @ {:.1}m", self.index, self.stop_bar_m)
    }
}
