//! Plain 2-D coordinates and distance helpers.
//!
//! Station positions are plain `(x, y)` values, not geodetic coordinates —
//! the input format calls them latitude/longitude but the simulation treats
//! them as a flat plane, so distance is Euclidean, not great-circle.

/// A station position on the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Used for movement time over interchange links, whose stored weight of
    /// 0 carries no intrinsic travel cost.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// The point offset by `radius` along both axes — where a user stands
    /// before walking onto the network.
    #[inline]
    pub fn offset(self, radius: f64) -> Point {
        Point::new(self.x + radius, self.y + radius)
    }
}

/// Length of the diagonal walk from the offset start position back to the
/// station: `sqrt(2) * radius`.
#[inline]
pub fn offset_walk_distance(radius: f64) -> f64 {
    radius.hypot(radius)
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
