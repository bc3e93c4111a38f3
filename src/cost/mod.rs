//! Route cost model.
//!
//! Computes round-trip schedule distances, conservative drive-time budget
//! checks, and the detour costs that drive candidate selection.

mod evaluator;
mod params;

pub use evaluator::ScheduleCost;
pub use params::{CostParams, DEFAULT_MAX_DRIVE_TIME, DEFAULT_MIN_DETOUR_COST};
