//! Driver construction state for the nearest-pickup strategy.

use super::{Load, Point, Schedule, DEPOT};

/// Transient state for one driver while its schedule is being built.
///
/// A driver starts at the depot with zero accumulated distance, moves to
/// each completed load's dropoff, and is consumed by [`finalize`], which
/// adds the return-to-depot leg.
///
/// [`finalize`]: Driver::finalize
#[derive(Debug, Clone)]
pub struct Driver {
    position: Point,
    elapsed: f64,
    load_ids: Vec<String>,
}

impl Driver {
    /// Creates a fresh driver at the depot.
    pub fn new() -> Self {
        Self {
            position: DEPOT,
            elapsed: 0.0,
            load_ids: Vec::new(),
        }
    }

    /// Current position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Distance driven so far (no return leg).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of loads completed so far.
    pub fn len(&self) -> usize {
        self.load_ids.len()
    }

    /// Returns `true` if this driver has not completed any load.
    pub fn is_empty(&self) -> bool {
        self.load_ids.is_empty()
    }

    /// Marginal distance to complete the load from the current position and
    /// then return to the depot: position → pickup → dropoff → depot.
    pub fn completion_cost(&self, load: &Load) -> f64 {
        self.position.distance_to(&load.pickup())
            + load.pickup_to_dropoff()
            + load.dropoff_to_depot()
    }

    /// Completes a load: drives to its pickup, then to its dropoff.
    pub fn complete(&mut self, load: &Load) {
        self.elapsed += self.position.distance_to(&load.pickup()) + load.pickup_to_dropoff();
        self.position = load.dropoff();
        self.load_ids.push(load.id().to_string());
    }

    /// Consumes the driver, appending the depot return leg, and produces
    /// its finished schedule.
    pub fn finalize(self, driver_id: usize) -> Schedule {
        let total = self.elapsed + self.position.distance_to(&DEPOT);
        let mut schedule = Schedule::new(driver_id);
        for id in self.load_ids {
            schedule.push_load(id);
        }
        schedule.set_total_distance(total);
        schedule
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
