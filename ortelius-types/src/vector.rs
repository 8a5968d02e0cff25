use serde::{Deserialize, Serialize};

use crate::angle::{heading_from_polar, polar_angle_of};
use crate::point::PlanePoint;
use crate::tolerance::equal;

/// A free 2d vector stored as its tip point, the tail sitting at the origin.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneVector {
    tip: PlanePoint,
}

impl PlaneVector {
    /// Creates a unit vector pointing towards `(x, y)`.
    ///
    /// The null vector cannot be rescaled and is stored as is.
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_normalization(x, y, true)
    }

    /// Creates a vector, optionally rescaled to unit length.
    pub fn with_normalization(x: f64, y: f64, normalize: bool) -> Self {
        let mut vector = Self {
            tip: PlanePoint::new(x, y),
        };
        if normalize {
            vector.normalize();
        }
        vector
    }

    /// Creates the vector leading from one point to another.
    pub fn between(from: &PlanePoint, to: &PlanePoint, normalize: bool) -> Self {
        Self::with_normalization(to.x() - from.x(), to.y() - from.y(), normalize)
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.tip.x()
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.tip.y()
    }

    /// Vector length.
    pub fn length(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Rescales the vector to unit length. The null vector is left unchanged.
    pub fn normalize(&mut self) {
        if equal(self.x(), 0.0) && equal(self.y(), 0.0) {
            return;
        }
        let length = self.length();
        self.tip = PlanePoint::new(self.x() / length, self.y() / length);
    }

    /// The vector rotated a quarter turn counterclockwise, not rescaled.
    pub fn perpendicular(&self) -> Self {
        Self::with_normalization(-self.y(), self.x(), false)
    }

    /// Polar angle of the vector in degrees (0° = east, may be negative).
    pub fn polar_angle(&self) -> f64 {
        polar_angle_of(self.x(), self.y())
    }

    /// Compass heading of the vector in degrees (0° = north, clockwise).
    pub fn heading_angle(&self) -> f64 {
        heading_from_polar(self.polar_angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constructors_normalize_to_unit_length() {
        for (x, y) in [(3.0, 4.0), (-2.0, 0.5), (0.0, -7.0), (1e6, 1e6)] {
            let v = PlaneVector::new(x, y);
            assert_abs_diff_eq!(v.x() * v.x() + v.y() * v.y(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn null_vector_survives_normalization() {
        let v = PlaneVector::new(0.0, 0.0);
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
    }

    #[test]
    fn normalization_can_be_skipped() {
        let v = PlaneVector::with_normalization(3.0, 4.0, false);
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn perpendicular_rotates_counterclockwise() {
        let v = PlaneVector::with_normalization(1.0, 0.0, false).perpendicular();
        assert_abs_diff_eq!(v.x(), 0.0);
        assert_abs_diff_eq!(v.y(), 1.0);
    }

    #[test]
    fn heading_follows_the_compass_convention() {
        assert_abs_diff_eq!(PlaneVector::new(0.0, 1.0).heading_angle(), 0.0);
        assert_abs_diff_eq!(PlaneVector::new(1.0, 0.0).heading_angle(), 90.0);
        assert_abs_diff_eq!(PlaneVector::new(1.0, 1.0).heading_angle(), 45.0);
    }

    #[test]
    fn between_points() {
        let v = PlaneVector::between(
            &PlanePoint::new(1.0, 1.0),
            &PlanePoint::new(1.0, 6.0),
            false,
        );
        assert_abs_diff_eq!(v.length(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.heading_angle(), 0.0);
    }
}
