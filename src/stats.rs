//! Descriptive statistics over a load set.

use std::fmt;

use crate::models::Load;

/// Minimum, maximum, and average of one per-load distance measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine {
    /// Smallest observed value.
    pub min: f64,
    /// Largest observed value.
    pub max: f64,
    /// Arithmetic mean.
    pub avg: f64,
}

/// Summary statistics over a load set's distance measures.
///
/// Covers the four measures the heuristics care about: pickup→dropoff,
/// depot→pickup, dropoff→depot, and the solo round trip.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
/// use load_dispatch::stats::LoadStats;
///
/// let loads = vec![Load::new("1", Point::new(3.0, 4.0), Point::new(3.0, 0.0))];
/// let stats = LoadStats::compute(&loads).expect("non-empty");
/// assert_eq!(stats.count(), 1);
/// assert!((stats.round_trip().avg - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LoadStats {
    count: usize,
    pickup_to_dropoff: StatLine,
    depot_to_pickup: StatLine,
    dropoff_to_depot: StatLine,
    round_trip: StatLine,
}

impl LoadStats {
    /// Computes statistics over the given loads.
    ///
    /// Returns `None` for an empty set.
    pub fn compute(loads: &[Load]) -> Option<Self> {
        if loads.is_empty() {
            return None;
        }
        Some(Self {
            count: loads.len(),
            pickup_to_dropoff: summarize(loads, Load::pickup_to_dropoff),
            depot_to_pickup: summarize(loads, Load::distance_to_pickup),
            dropoff_to_depot: summarize(loads, Load::dropoff_to_depot),
            round_trip: summarize(loads, Load::round_trip),
        })
    }

    /// Number of loads summarized.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Pickup → dropoff distances.
    pub fn pickup_to_dropoff(&self) -> StatLine {
        self.pickup_to_dropoff
    }

    /// Depot → pickup distances.
    pub fn depot_to_pickup(&self) -> StatLine {
        self.depot_to_pickup
    }

    /// Dropoff → depot distances.
    pub fn dropoff_to_depot(&self) -> StatLine {
        self.dropoff_to_depot
    }

    /// Solo round-trip distances.
    pub fn round_trip(&self) -> StatLine {
        self.round_trip
    }
}

fn summarize(loads: &[Load], measure: impl Fn(&Load) -> f64) -> StatLine {
    let mut min = f64::MAX;
    let mut max = 0.0f64;
    let mut sum = 0.0;

    for load in loads {
        let value = measure(load);
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    StatLine {
        min,
        max,
        avg: sum / loads.len() as f64,
    }
}

impl fmt::Display for LoadStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of loads: {}", self.count)?;
        report(f, "of pickup to dropoff", &self.pickup_to_dropoff)?;
        report(f, "of pickup from home", &self.depot_to_pickup)?;
        report(f, "of dropoff to home", &self.dropoff_to_depot)?;
        report(f, "to home", &self.round_trip)
    }
}

fn report(f: &mut fmt::Formatter<'_>, label: &str, line: &StatLine) -> fmt::Result {
    writeln!(f, "Average distance {label}: {:.6}", line.avg)?;
    writeln!(f, "Minimum distance {label}: {:.6}", line.min)?;
    writeln!(f, "Maximum distance {label}: {:.6}", line.max)
}
