//! # load-dispatch
//!
//! Greedy driver assignment for pickup/dropoff transport loads. Every
//! driver starts and ends at a fixed depot; each schedule's round trip
//! stays within a drive-time budget, and the engine aims for as few
//! drivers as the heuristics allow.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Schedule, Assignment, Driver)
//! - [`index`] — Ordered index: pickup-distance-keyed binary search tree
//! - [`cost`] — Route cost model, budget checks, and engine parameters
//! - [`constructive`] — Greedy strategies (detour insertion, nearest pickup)
//! - [`io`] — Load-list parsing and schedule output
//! - [`stats`] — Descriptive statistics over a load set

pub mod constructive;
pub mod cost;
pub mod index;
pub mod io;
pub mod models;
pub mod stats;
