use approx::AbsDiffEq;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::tolerance::{equal, EPSILON};

/// A point on the viewer's 2d plane.
///
/// Depending on where it sits in the pipeline the coordinates hold geodetic
/// degrees (as read from a file) or meters in the local tangent plane (after
/// conversion). A default-constructed point is unset until coordinates are
/// assigned; equality is tolerance based and ignores the set flag.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
pub struct PlanePoint {
    x: f64,
    y: f64,
    is_set: bool,
}

impl PlanePoint {
    /// Creates a set point with the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, is_set: true }
    }

    /// X coordinate (longitude degrees or planar meters).
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate (latitude degrees or planar meters).
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Whether coordinates have been assigned to this point.
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Updates the x coordinate, marking the point as set.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
        self.is_set = true;
    }

    /// Updates the y coordinate, marking the point as set.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
        self.is_set = true;
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Converts into an nalgebra point, dropping the set flag.
    pub fn to_point2(self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }
}

impl From<Point2<f64>> for PlanePoint {
    fn from(point: Point2<f64>) -> Self {
        Self::new(point.x, point.y)
    }
}

impl PartialEq for PlanePoint {
    fn eq(&self, other: &Self) -> bool {
        equal(self.x, other.x) && equal(self.y, other.y)
    }
}

impl AbsDiffEq for PlanePoint {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_point_is_unset() {
        let point = PlanePoint::default();
        assert!(!point.is_set());
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn setters_mark_the_point_set() {
        let mut point = PlanePoint::default();
        point.set_x(3.0);
        assert!(point.is_set());
        assert!(PlanePoint::new(0.0, 0.0).is_set());
    }

    #[test]
    fn equality_is_tolerance_based_and_ignores_the_flag() {
        assert_eq!(PlanePoint::new(1.0, 2.0), PlanePoint::new(1.0005, 2.0));
        assert_ne!(PlanePoint::new(1.0, 2.0), PlanePoint::new(1.002, 2.0));
        assert_eq!(PlanePoint::default(), PlanePoint::new(0.0, 0.0));
    }

    #[test]
    fn distance() {
        let a = PlanePoint::new(0.0, 0.0);
        let b = PlanePoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
