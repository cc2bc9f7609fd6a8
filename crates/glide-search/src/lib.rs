//! `glide-search` — the best-first trajectory search driver.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`astar`]    | `AStarPlanner`, `SearchLimits`                       |
//! | [`frontier`] | Frontier ordering (priority + tie-break)             |
//! | [`plan`]     | `TrajectoryPlan` — the produced trajectory           |
//! | [`error`]    | `SearchError`, `SearchResult<T>`                     |
//!
//! # Design notes
//!
//! One `search` call is one planning invocation: the frontier, g-scores and
//! parent pointers live on the call stack and are dropped on return.  The
//! cost model and neighbor generator are borrowed for the duration — the
//! driver never configures them, it only asks for edge costs, estimates and
//! successors.  A search either finds a goal (`Ok`), proves there is none
//! (`Exhausted`), or gives up at its work budget (`FrontierOverflow`/
//! `TimeBudgetExceeded`) — it never blocks past the control cycle that
//! invoked it.

pub mod astar;
pub mod error;
pub mod plan;

pub(crate) mod frontier;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use astar::{AStarPlanner, SearchLimits};
pub use error::{SearchError, SearchResult};
pub use plan::TrajectoryPlan;
