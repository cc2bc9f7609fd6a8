//! `glide-neighbors` — successor-state generation for the trajectory search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`generator`] | `NeighborGenerator` trait                                 |
//! | [`approach`]  | Shared stop-bar geometry and signal-violation helpers     |
//! | [`coarse`]    | `CoarsePathNeighbors` — wide-grid first pass              |
//! | [`fine`]      | `FinePathNeighbors` — response-lag-aware refinement pass  |
//! | [`collision`] | `CollisionChecker` trait, `NoConflicts`                   |
//! | [`config`]    | `NeighborConfig` value object                             |
//!
//! # Design notes
//!
//! The two generators are independent types behind one small capability
//! trait; the coarse pass establishes a speed corridor on a wide time/speed
//! grid, and the fine pass refines it under the vehicle's dynamic response
//! lag, optionally constrained to stay near the coarse corridor and clear of
//! tracked vehicles.  Everything both passes share — which intersection is
//! next, how far to its stop bar, whether an edge runs a red — is a free
//! function in [`approach`], not inherited state.
//!
//! The signal-phase oracle is consulted in exactly one situation: an edge
//! whose forward projection crosses an upcoming stop bar.  States with no
//! intersection ahead never query it.

pub mod approach;
pub mod coarse;
pub mod collision;
pub mod config;
pub mod fine;
pub mod generator;


/// Below this speed a state counts as stopped.
pub(crate) const SPEED_EPSILON_MPS: f64 = 0.1;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coarse::CoarsePathNeighbors;
pub use collision::{CollisionChecker, NoConflicts};
pub use config::NeighborConfig;
pub use fine::FinePathNeighbors;
pub use generator::NeighborGenerator;
