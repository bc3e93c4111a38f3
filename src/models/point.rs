//! Point and depot types.

use serde::{Deserialize, Serialize};

/// The fixed origin every driver starts from and returns to.
pub const DEPOT: Point = Point { x: 0.0, y: 0.0 };

/// An immutable 2-D coordinate.
///
/// Distances are Euclidean. Non-finite coordinates propagate NaN through
/// distance computations; downstream behavior is undefined in that case.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Point, DEPOT};
///
/// let p = Point::new(3.0, 4.0);
/// assert!((DEPOT.distance_to(&p) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
