//! The `NeighborGenerator` trait — the search driver's expansion seam.

use glide_core::Node;
use glide_signal::IntersectionData;

/// Produces the physically and legally reachable successor states of a node.
///
/// A generator is constructed once (with its configuration, phase oracle and
/// optional collision checker) and reused; `initialize` rebinds it to one
/// planning invocation's intersections and search grid before `neighbors`
/// is called.
pub trait NeighborGenerator {
    /// Bind the generator to this invocation's intersection geometry and
    /// search grid.  Implementations sort `intersections` by stop-bar
    /// distance and reset any per-invocation state (such as an attached
    /// coarse plan).
    fn initialize(
        &mut self,
        intersections: Vec<IntersectionData>,
        time_increment_s: f64,
        speed_increment_mps: f64,
    );

    /// The candidate successors of `node`, in generation order.  An empty
    /// list means this branch of the search is dead.
    fn neighbors(&self, node: &Node) -> Vec<Node>;

    /// Constrain generation to an allowable-speed corridor around a
    /// previously computed coarse path.  Default: ignored (coarse-resolution
    /// generators have no corridor to follow).
    fn set_coarse_plan(&mut self, _path: Vec<Node>) {}
}
