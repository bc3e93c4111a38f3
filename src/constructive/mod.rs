//! Greedy schedule-building strategies.
//!
//! - [`detour_insertion`] — Bidirectional detour minimization (primary):
//!   seeds farthest round trip first, grows each schedule at both ends.
//! - [`nearest_pickup`] — Ordered-index consumption (alternate policy):
//!   one driver at a time takes the structurally nearest pickup.
//!
//! Both consume an unordered load slice and produce an [`Assignment`]
//! covering every load exactly once, with each schedule's round trip
//! within the drive-time budget apart from the seed-load exemption.
//!
//! [`Assignment`]: crate::models::Assignment

mod detour_insertion;
mod nearest_pickup;

pub use detour_insertion::detour_insertion;
pub use nearest_pickup::nearest_pickup;
