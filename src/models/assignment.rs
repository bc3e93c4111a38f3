//! Assignment type.

use serde::{Deserialize, Serialize};

use super::Schedule;

/// The engine's output: one schedule per driver, in emission order.
///
/// The load-id sets of the schedules partition the input load set — every
/// load appears in exactly one schedule.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Assignment, Schedule};
///
/// let mut assignment = Assignment::new();
/// assignment.add_schedule(Schedule::new(0));
/// assert_eq!(assignment.num_drivers(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    schedules: Vec<Schedule>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self {
            schedules: Vec::new(),
        }
    }

    /// Adds a finalized schedule.
    pub fn add_schedule(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Schedules in emission order (one per driver).
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.schedules.len()
    }

    /// Total number of loads assigned across all drivers.
    pub fn num_assigned(&self) -> usize {
        self.schedules.iter().map(|s| s.len()).sum()
    }

    /// Total drive distance across all schedules.
    pub fn total_distance(&self) -> f64 {
        self.schedules.iter().map(|s| s.total_distance()).sum()
    }
}

impl Default for Assignment {
    fn default() -> Self {
        Self::new()
    }
}
