//! Signal-phase prediction trait and the fixed-timing-plan implementation.

use tracing::warn;

use glide_core::SignalPhase;

// ── PhasePrediction ───────────────────────────────────────────────────────────

/// The oracle's answer for one (intersection, time) query.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhasePrediction {
    pub phase: SignalPhase,
    /// Prediction confidence in `[0.0, 1.0]`.  A fixed timing plan is fully
    /// determined, so [`FixedCycleOracle`] always reports `1.0`; live SPaT
    /// backends report their estimator's confidence.
    pub confidence: f64,
}

// ── SignalOracle trait ────────────────────────────────────────────────────────

/// Pluggable signal-phase prediction.
///
/// `intersection` is the index carried by
/// [`IntersectionData`][crate::IntersectionData]; `time_s` is seconds since
/// plan start (the same clock as [`glide_core::Node::time_s`]).
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: one oracle is typically shared by
/// the planner instances of several vehicles.
pub trait SignalOracle: Send + Sync {
    fn phase_at(&self, intersection: usize, time_s: f64) -> PhasePrediction;
}

// ── Fixed-cycle timing plan ───────────────────────────────────────────────────

/// One intersection's repeating green → yellow → red cycle.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseTiming {
    pub green_s: f64,
    pub yellow_s: f64,
    pub red_s: f64,
    /// How far into the cycle the signal already is at plan start (t = 0).
    pub offset_s: f64,
}

impl PhaseTiming {
    /// Total cycle duration, seconds.
    #[inline]
    pub fn cycle_s(&self) -> f64 {
        self.green_s + self.yellow_s + self.red_s
    }

    /// Phase shown `time_s` seconds after plan start.
    pub fn phase_at(&self, time_s: f64) -> SignalPhase {
        let cycle = self.cycle_s();
        let into = (time_s + self.offset_s).rem_euclid(cycle);
        if into < self.green_s {
            SignalPhase::Green
        } else if into < self.green_s + self.yellow_s {
            SignalPhase::Yellow
        } else {
            SignalPhase::Red
        }
    }
}

/// A [`SignalOracle`] driven by one fixed [`PhaseTiming`] per intersection.
///
/// Suitable for pre-timed signals and for exercising the planner without a
/// live SPaT feed.
pub struct FixedCycleOracle {
    timings: Vec<PhaseTiming>,
}

impl FixedCycleOracle {
    pub fn new(timings: Vec<PhaseTiming>) -> Self {
        Self { timings }
    }
}

impl SignalOracle for FixedCycleOracle {
    fn phase_at(&self, intersection: usize, time_s: f64) -> PhasePrediction {
        match self.timings.get(intersection) {
            Some(timing) => PhasePrediction {
                phase: timing.phase_at(time_s),
                confidence: 1.0,
            },
            None => {
                // Unknown intersection: answer RED so no plan ever crosses a
                // bar we have no timing for.
                warn!(intersection, "phase query for unknown intersection");
                PhasePrediction { phase: SignalPhase::Red, confidence: 0.0 }
            }
        }
    }
}
