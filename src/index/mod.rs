//! Ordered index over loads.
//!
//! A binary search tree keyed by depot-to-pickup distance, used by the
//! nearest-pickup strategy for minimum and nearest-match lookups.

mod tree;

pub use tree::LoadIndex;
