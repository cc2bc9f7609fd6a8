//! `glide-cost` — the planner's edge-cost and heuristic model.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`table`]  | `BaseRateTable` — operating-mode → energy-rate calibration    |
//! | [`vsp`]    | Vehicle-specific power and the operating-mode decision table  |
//! | [`config`] | `CostConfig` value object                                     |
//! | [`model`]  | `CostModel` trait and the `MovesCostModel` implementation     |
//! | [`error`]  | `CostError`, `CostResult<T>`                                  |
//!
//! # Design notes
//!
//! The cost of an edge between two states is a linear combination of
//! normalized fuel energy and normalized elapsed time.  Fuel energy comes
//! from the MOVES emissions methodology: average speed and acceleration over
//! the edge feed a vehicle-specific-power polynomial, (VSP, speed,
//! acceleration) select a discrete operating mode, and the base-rate table
//! maps that mode to an energy rate in kJ/hr.
//!
//! The table is loaded once, at model construction, and is immutable
//! afterward — a malformed table means no model instance is ever created.
//! Inside a search the model does no I/O and allocates nothing.

pub mod config;
pub mod error;
pub mod model;
pub mod table;
pub mod vsp;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CostConfig;
pub use error::{CostError, CostResult};
pub use model::{CostModel, MovesCostModel, MAX_COST};
pub use table::{BaseRateTable, IDLE_OP_MODE};
pub use vsp::{operating_mode, vehicle_specific_power};
