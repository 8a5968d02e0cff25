use nalgebra::{Point2, Scalar};
use num_traits::Num;
use serde::{Deserialize, Serialize};

use crate::point::PlanePoint;

/// Axis-aligned rectangle, also serving as the bounding box of a feature
/// collection.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect<N = f64> {
    /// Left edge.
    pub x_min: N,
    /// Bottom edge.
    pub y_min: N,
    /// Right edge.
    pub x_max: N,
    /// Top edge.
    pub y_max: N,
}

impl<N: Num + Copy + PartialOrd + Scalar> Rect<N> {
    /// Creates a new rectangle from its edges.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> N {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> N {
        self.y_max - self.y_min
    }

    /// The smallest rectangle containing both operands.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: if self.x_min < other.x_min {
                self.x_min
            } else {
                other.x_min
            },
            y_min: if self.y_min < other.y_min {
                self.y_min
            } else {
                other.y_min
            },
            x_max: if self.x_max > other.x_max {
                self.x_max
            } else {
                other.x_max
            },
            y_max: if self.y_max > other.y_max {
                self.y_max
            } else {
                other.y_max
            },
        }
    }

    /// Returns true if `(x, y)` lies inside or on the boundary.
    pub fn contains(&self, x: N, y: N) -> bool {
        self.x_min <= x && self.x_max >= x && self.y_min <= y && self.y_max >= y
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Point2<N> {
        let two = N::one() + N::one();
        Point2::new(
            (self.x_min + self.x_max) / two,
            (self.y_min + self.y_max) / two,
        )
    }

    /// Corner points, counterclockwise from the bottom-left.
    pub fn into_quadrangle(self) -> [Point2<N>; 4] {
        [
            Point2::new(self.x_min, self.y_min),
            Point2::new(self.x_max, self.y_min),
            Point2::new(self.x_max, self.y_max),
            Point2::new(self.x_min, self.y_max),
        ]
    }
}

impl Rect<f64> {
    /// The smallest rectangle enclosing all the given points, or `None` for
    /// an empty iterator.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a PlanePoint>) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::new(first.x(), first.y(), first.x(), first.y());

        for point in points {
            if rect.x_min > point.x() {
                rect.x_min = point.x();
            }
            if rect.y_min > point.y() {
                rect.y_min = point.y();
            }
            if rect.x_max < point.x() {
                rect.x_max = point.x();
            }
            if rect.y_max < point.y() {
                rect.y_max = point.y();
            }
        }

        Some(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_of_empty_iterator_is_none() {
        assert_eq!(Rect::from_points(std::iter::empty()), None);
    }

    #[test]
    fn from_points_encloses_everything() {
        let points = [
            PlanePoint::new(3.0, -1.0),
            PlanePoint::new(-2.0, 4.0),
            PlanePoint::new(0.0, 0.0),
        ];
        let rect = Rect::from_points(points.iter()).unwrap();
        assert_eq!(rect, Rect::new(-2.0, -1.0, 3.0, 4.0));
        for point in &points {
            assert!(rect.contains(point.x(), point.y()));
        }
    }

    #[test]
    fn merge_takes_the_union() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, -1.0, 3.0, 1.0);
        assert_eq!(a.merge(b), Rect::new(0.0, -1.0, 3.0, 2.0));
    }

    #[test]
    fn dimensions_and_center() {
        let rect = Rect::new(1.0, 2.0, 5.0, 10.0);
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 8.0);
        assert_eq!(rect.center(), Point2::new(3.0, 6.0));
    }
}
