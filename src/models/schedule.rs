//! Schedule type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of load ids assigned to one driver.
///
/// The driver starts at the depot, serves the loads in order, and returns
/// to the depot; the depot legs are not stored but are included in
/// `total_distance`. Append-only during construction, a plain value once
/// the driver is finalized.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::Schedule;
///
/// let mut schedule = Schedule::new(0);
/// schedule.push_load("7");
/// schedule.push_load("3");
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.load_ids(), ["7", "3"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    driver_id: usize,
    load_ids: Vec<String>,
    total_distance: f64,
}

impl Schedule {
    /// Creates an empty schedule for the given driver.
    pub fn new(driver_id: usize) -> Self {
        Self {
            driver_id,
            load_ids: Vec::new(),
            total_distance: 0.0,
        }
    }

    /// Appends a load id to the end of this schedule.
    pub fn push_load(&mut self, id: impl Into<String>) {
        self.load_ids.push(id.into());
    }

    /// Driver this schedule belongs to.
    pub fn driver_id(&self) -> usize {
        self.driver_id
    }

    /// Load ids in visit order.
    pub fn load_ids(&self) -> &[String] {
        &self.load_ids
    }

    /// Number of loads in this schedule.
    pub fn len(&self) -> usize {
        self.load_ids.len()
    }

    /// Returns `true` if this schedule has no loads.
    pub fn is_empty(&self) -> bool {
        self.load_ids.is_empty()
    }

    /// Round-trip distance including the depot legs (set by the cost model).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Sets the round-trip distance (used by the cost model).
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }
}
