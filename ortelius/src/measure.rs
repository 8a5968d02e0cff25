//! Distance and heading between two picked map points.

use ortelius_types::{PlanePoint, PlaneVector};
use serde::{Deserialize, Serialize};

/// A straight measurement segment between two points in display
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    start: PlanePoint,
    end: PlanePoint,
}

impl Trajectory {
    /// Creates the trajectory from a start to an end point.
    pub fn new(start: PlanePoint, end: PlanePoint) -> Self {
        Self { start, end }
    }

    /// Start point.
    pub fn start(&self) -> PlanePoint {
        self.start
    }

    /// End point.
    pub fn end(&self) -> PlanePoint {
        self.end
    }

    /// Length in display units (meters in the local frame).
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Compass heading from start to end, in degrees.
    pub fn heading(&self) -> f64 {
        PlaneVector::between(&self.start, &self.end, false).heading_angle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_and_heading_of_a_northbound_leg() {
        let leg = Trajectory::new(PlanePoint::new(0.0, 0.0), PlanePoint::new(0.0, 250.0));
        assert_abs_diff_eq!(leg.length(), 250.0, epsilon = 1e-12);
        assert_abs_diff_eq!(leg.heading(), 0.0);
    }

    #[test]
    fn heading_follows_the_compass() {
        let origin = PlanePoint::new(0.0, 0.0);
        assert_abs_diff_eq!(
            Trajectory::new(origin, PlanePoint::new(100.0, 0.0)).heading(),
            90.0
        );
        assert_abs_diff_eq!(
            Trajectory::new(origin, PlanePoint::new(0.0, -100.0)).heading(),
            180.0
        );
        assert_abs_diff_eq!(
            Trajectory::new(origin, PlanePoint::new(-100.0, 100.0)).heading(),
            315.0
        );
    }
}
