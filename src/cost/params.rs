//! Engine configuration parameters.

/// Default round-trip distance budget per driver (12 hours in minutes,
/// with speed 1 distance-unit per minute).
pub const DEFAULT_MAX_DRIVE_TIME: f64 = 720.0;

/// Default early-acceptance threshold for detour insertion. Needs tuning
/// per load distribution.
pub const DEFAULT_MIN_DETOUR_COST: f64 = 123.0;

/// Configuration the assignment engine depends on.
///
/// Fixed for the duration of a run; exposed as a value for testability.
///
/// # Examples
///
/// ```
/// use load_dispatch::cost::CostParams;
///
/// let params = CostParams::default().with_max_drive_time(20.0);
/// assert_eq!(params.max_drive_time(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostParams {
    max_drive_time: f64,
    min_detour_cost: f64,
}

impl CostParams {
    /// Maximum allowed round-trip distance per driver schedule.
    pub fn max_drive_time(&self) -> f64 {
        self.max_drive_time
    }

    /// Detour cost below which a candidate is accepted without scanning
    /// the remaining loads.
    pub fn min_detour_cost(&self) -> f64 {
        self.min_detour_cost
    }

    /// Sets the drive-time budget.
    pub fn with_max_drive_time(mut self, budget: f64) -> Self {
        self.max_drive_time = budget;
        self
    }

    /// Sets the early-acceptance threshold.
    pub fn with_min_detour_cost(mut self, threshold: f64) -> Self {
        self.min_detour_cost = threshold;
        self
    }
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            max_drive_time: DEFAULT_MAX_DRIVE_TIME,
            min_detour_cost: DEFAULT_MIN_DETOUR_COST,
        }
    }
}
