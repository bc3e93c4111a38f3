//! Schedule cost evaluation and budget checks.

use crate::models::{Load, Schedule, DEPOT};

use super::CostParams;

/// Computes schedule distances, budget feasibility, and detour costs over
/// a borrowed load slice.
///
/// Schedules are handled as index sequences into the load slice; the
/// evaluator materializes a [`Schedule`] value only when one is finished.
///
/// # Examples
///
/// ```
/// use load_dispatch::cost::{CostParams, ScheduleCost};
/// use load_dispatch::models::{Load, Point};
///
/// let loads = vec![Load::new("1", Point::new(3.0, 4.0), Point::new(3.0, 0.0))];
/// let params = CostParams::default();
/// let cost = ScheduleCost::new(&loads, &params);
/// assert!((cost.total_distance(&[0]) - 12.0).abs() < 1e-10);
/// ```
pub struct ScheduleCost<'a> {
    loads: &'a [Load],
    params: &'a CostParams,
}

impl<'a> ScheduleCost<'a> {
    /// Creates an evaluator over the given loads and parameters.
    pub fn new(loads: &'a [Load], params: &'a CostParams) -> Self {
        Self { loads, params }
    }

    /// Round-trip distance of a schedule: depot → first pickup, each load's
    /// pickup → dropoff, dropoff → next pickup between loads, and the last
    /// dropoff → depot. Zero for an empty sequence.
    pub fn total_distance(&self, sequence: &[usize]) -> f64 {
        if sequence.is_empty() {
            return 0.0;
        }

        let mut current = DEPOT;
        let mut total = 0.0;

        for &idx in sequence {
            let load = &self.loads[idx];
            total += current.distance_to(&load.pickup());
            total += load.pickup_to_dropoff();
            current = load.dropoff();
        }

        total + current.distance_to(&DEPOT)
    }

    /// Returns `true` if prepending the candidate keeps the full round trip
    /// within the drive-time budget.
    ///
    /// Always re-evaluates the complete hypothetical schedule rather than an
    /// incremental delta, so accumulation drift cannot admit an over-budget
    /// insertion.
    pub fn fits_budget_with_head(&self, sequence: &[usize], candidate: usize) -> bool {
        let mut trial = Vec::with_capacity(sequence.len() + 1);
        trial.push(candidate);
        trial.extend_from_slice(sequence);
        self.total_distance(&trial) <= self.params.max_drive_time()
    }

    /// Returns `true` if appending the candidate keeps the full round trip
    /// within the drive-time budget.
    pub fn fits_budget_with_tail(&self, sequence: &[usize], candidate: usize) -> bool {
        let mut trial = Vec::with_capacity(sequence.len() + 1);
        trial.extend_from_slice(sequence);
        trial.push(candidate);
        self.total_distance(&trial) <= self.params.max_drive_time()
    }

    /// Marginal cost of visiting the candidate before the schedule instead
    /// of driving straight to the reference load:
    /// depot → candidate pickup → candidate dropoff, plus candidate dropoff
    /// → reference pickup, minus the depot → reference pickup leg replaced.
    ///
    /// The reference is the schedule's last element, matching the tail
    /// formula's reference point.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn head_detour(&self, candidate: usize, sequence: &[usize]) -> f64 {
        let cand = &self.loads[candidate];
        let last = &self.loads[sequence[sequence.len() - 1]];
        cand.depot_to_dropoff() + cand.dropoff().distance_to(&last.pickup())
            - last.distance_to_pickup()
    }

    /// Marginal cost of visiting the candidate after the schedule instead
    /// of driving straight home:
    /// candidate pickup → dropoff → depot, plus last dropoff → candidate
    /// pickup, minus the last dropoff → depot leg replaced.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn tail_detour(&self, candidate: usize, sequence: &[usize]) -> f64 {
        let cand = &self.loads[candidate];
        let last = &self.loads[sequence[sequence.len() - 1]];
        cand.pickup_to_depot() + last.dropoff().distance_to(&cand.pickup())
            - last.dropoff_to_depot()
    }

    /// Materializes a finished schedule: load ids in sequence order plus
    /// the computed round-trip distance.
    pub fn build_schedule(&self, driver_id: usize, sequence: &[usize]) -> Schedule {
        let mut schedule = Schedule::new(driver_id);
        for &idx in sequence {
            schedule.push_load(self.loads[idx].id());
        }
        schedule.set_total_distance(self.total_distance(sequence));
        schedule
    }
}
