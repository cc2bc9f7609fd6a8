//! `glide-signal` — intersection geometry and the signal-phase oracle.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`intersection`] | `IntersectionData` — static stop-bar geometry         |
//! | [`oracle`]       | `SignalOracle` trait, `PhasePrediction`, and the      |
//! |                  | fixed-timing-plan `FixedCycleOracle`                  |
//!
//! # Design notes
//!
//! Phase prediction is a consumed capability: in the deployed system it is
//! backed by live SPaT messages, which are decoded well outside this
//! workspace.  The planner only ever asks one question — "what phase will
//! intersection *i* show at time *t*?" — so that question is the whole
//! [`SignalOracle`] trait, and the neighbor generators take any
//! implementation of it.  [`FixedCycleOracle`] answers it from a fixed
//! timing plan so the planner can run in tests and bench rigs without a
//! SPaT feed.

pub mod intersection;
pub mod oracle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use intersection::IntersectionData;
pub use oracle::{FixedCycleOracle, PhasePrediction, PhaseTiming, SignalOracle};
