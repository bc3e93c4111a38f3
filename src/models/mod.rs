//! Domain model types for load dispatch.
//!
//! Provides the core abstractions: points with the fixed depot origin,
//! loads with pickup/dropoff locations and derived distance measures,
//! per-driver schedules, the assignment output, and the transient driver
//! state used by the nearest-pickup strategy.

mod assignment;
mod driver;
mod load;
mod point;
mod schedule;

pub use assignment::Assignment;
pub use driver::Driver;
pub use load::Load;
pub use point::{Point, DEPOT};
pub use schedule::Schedule;
