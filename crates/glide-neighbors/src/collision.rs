//! Collision checking against tracked road users.

use glide_core::Node;

/// Conflict test between a candidate trajectory edge and other tracked
/// vehicles' predicted paths.
///
/// This is a consumed capability: the checker owns the tracked-obstacle
/// state and the motion prediction that projects it forward — the neighbor
/// generators only ask whether the edge `from → candidate` intersects any
/// predicted occupancy.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; the obstacle track store is
/// typically shared with the perception pipeline.
pub trait CollisionChecker: Send + Sync {
    /// `true` if travelling from `from` to `candidate` would conflict with a
    /// tracked vehicle's predicted path.
    fn conflicts(&self, from: &Node, candidate: &Node) -> bool;
}

/// A [`CollisionChecker`] that never reports a conflict.
///
/// Useful when no obstacle tracking is available and for exercising the
/// generators in isolation.
pub struct NoConflicts;

impl CollisionChecker for NoConflicts {
    fn conflicts(&self, _from: &Node, _candidate: &Node) -> bool {
        false
    }
}
