//! `glide-core` — foundational types for the `glide` EAD trajectory planner.
//!
//! This crate is a dependency of every other `glide-*` crate.  It
//! intentionally has no `glide-*` dependencies and minimal external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`node`]  | `Node` — the (distance, time, speed) state point  |
//! | [`phase`] | `SignalPhase` enum                                |
//! | [`goal`]  | `GoalRegion` — per-invocation goal + tolerances   |
//! | [`units`] | mph ↔ m/s conversion helpers                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod goal;
pub mod node;
pub mod phase;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use goal::GoalRegion;
pub use node::Node;
pub use phase::SignalPhase;
