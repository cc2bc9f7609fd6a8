//! Frontier ordering.

use std::cmp::Ordering;

use glide_core::Node;

/// One frontier entry: a node, its path cost from the start, and its
/// estimated total cost.
///
/// `BinaryHeap` pops the *greatest* entry, so the ordering is inverted:
/// "greater" means "expand sooner" — the lower estimated total wins, and
/// exact ties go to the node farther downtrack (favoring progress; exact
/// because the comparison uses the state grid's integer distance).
#[derive(Copy, Clone, Debug)]
pub(crate) struct OpenEntry {
    /// Estimated total cost through this node: g + heuristic.
    pub f: f64,
    /// Best known path cost from the start when this entry was pushed.
    pub g: f64,
    pub node: Node,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| self.node.distance_units().cmp(&other.node.distance_units()))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}
