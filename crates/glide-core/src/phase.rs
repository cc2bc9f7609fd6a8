//! Signal phase as the planner sees it.

use std::fmt;

/// The predicted phase of a traffic signal at some instant.
///
/// For planning purposes `Green` is the only phase the vehicle may cross the
/// stop bar on; a crossing during `Yellow` cannot be guaranteed to complete
/// before red and is planned around the same way `Red` is rejected by the
/// neighbor generators' red-at-crossing test.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalPhase {
    Green,
    Yellow,
    Red,
}

impl SignalPhase {
    /// `true` only for [`SignalPhase::Green`].
    #[inline]
    pub fn is_green(self) -> bool {
        self == SignalPhase::Green
    }
}

impl fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalPhase::Green => "GREEN",
            SignalPhase::Yellow => "YELLOW",
            SignalPhase::Red => "RED",
        };
        write!(f, "{name}")
    }
}
