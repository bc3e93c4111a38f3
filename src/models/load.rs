//! Load type and its derived distance measures.

use serde::{Deserialize, Serialize};

use super::{Point, DEPOT};

/// A transport job: pick up at one point, drop off at another.
///
/// Loads are immutable once constructed and identified by a unique string
/// id. The ordered index keys loads by [`distance_to_pickup`]; the detour
/// heuristic seeds drivers by [`round_trip`], farthest first.
///
/// [`distance_to_pickup`]: Load::distance_to_pickup
/// [`round_trip`]: Load::round_trip
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
///
/// let load = Load::new("1", Point::new(3.0, 4.0), Point::new(3.0, 0.0));
/// assert_eq!(load.id(), "1");
/// assert!((load.distance_to_pickup() - 5.0).abs() < 1e-10);
/// assert!((load.round_trip() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: String,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a new load.
    pub fn new(id: impl Into<String>, pickup: Point, dropoff: Point) -> Self {
        Self {
            id: id.into(),
            pickup,
            dropoff,
        }
    }

    /// Load id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pickup location.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Distance from the depot to the pickup point (the index key).
    pub fn distance_to_pickup(&self) -> f64 {
        DEPOT.distance_to(&self.pickup)
    }

    /// Distance from the pickup point to the dropoff point.
    pub fn pickup_to_dropoff(&self) -> f64 {
        self.pickup.distance_to(&self.dropoff)
    }

    /// Distance from the dropoff point back to the depot.
    pub fn dropoff_to_depot(&self) -> f64 {
        self.dropoff.distance_to(&DEPOT)
    }

    /// Full round trip if this load were served alone:
    /// depot → pickup → dropoff → depot.
    pub fn round_trip(&self) -> f64 {
        self.distance_to_pickup() + self.pickup_to_dropoff() + self.dropoff_to_depot()
    }

    /// Depot → pickup → dropoff (the head-detour term).
    pub fn depot_to_dropoff(&self) -> f64 {
        self.distance_to_pickup() + self.pickup_to_dropoff()
    }

    /// Pickup → dropoff → depot (the tail-detour term).
    pub fn pickup_to_depot(&self) -> f64 {
        self.pickup_to_dropoff() + self.dropoff_to_depot()
    }
}
