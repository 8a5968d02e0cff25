use nalgebra::Vector3;

use crate::frame::GeocentricFrame;
use crate::point::PlanePoint;

/// Converts feature points between their storage space and the display
/// plane.
///
/// Implementations are stateless from the caller's perspective: whatever
/// reference data a conversion needs is fixed when the converter is built.
/// `None` is returned when a point has no finite image.
pub trait CoordinateConverter {
    /// Converts a point into the display plane.
    fn transform(&self, point: &PlanePoint) -> Option<PlanePoint>;

    /// Converts a display-plane point back into the storage space.
    fn transform_back(&self, point: &PlanePoint) -> Option<PlanePoint>;
}

/// Converter between geodetic degrees and the local tangent plane of a map
/// center.
///
/// Input points carry longitude in `x` and latitude in `y`, in degrees;
/// output points are meters east and north of the center. Altitude is pinned
/// to the ellipsoid surface in both directions.
#[derive(Debug, Clone, Copy)]
pub struct GeocentricConverter {
    frame: GeocentricFrame,
}

impl GeocentricConverter {
    /// Creates the converter for a map center given in degrees.
    pub fn new(center_lon: f64, center_lat: f64) -> Self {
        Self {
            frame: GeocentricFrame::new(center_lon.to_radians(), center_lat.to_radians(), 0.0),
        }
    }

    /// The frame the converter projects through.
    pub fn frame(&self) -> &GeocentricFrame {
        &self.frame
    }
}

impl CoordinateConverter for GeocentricConverter {
    fn transform(&self, point: &PlanePoint) -> Option<PlanePoint> {
        let local =
            self.frame
                .geodetic_to_local(point.x().to_radians(), point.y().to_radians(), 0.0);
        if local.x.is_finite() && local.y.is_finite() {
            Some(PlanePoint::new(local.x, local.y))
        } else {
            None
        }
    }

    fn transform_back(&self, point: &PlanePoint) -> Option<PlanePoint> {
        let position = self
            .frame
            .local_to_geodetic(Vector3::new(point.x(), point.y(), 0.0));
        let lon = position.lon.to_degrees();
        let lat = position.lat.to_degrees();
        if lon.is_finite() && lat.is_finite() {
            Some(PlanePoint::new(lon, lat))
        } else {
            None
        }
    }
}

/// Converter that returns every point unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityConverter;

impl CoordinateConverter for IdentityConverter {
    fn transform(&self, point: &PlanePoint) -> Option<PlanePoint> {
        Some(*point)
    }

    fn transform_back(&self, point: &PlanePoint) -> Option<PlanePoint> {
        Some(*point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn round_trip_through_the_local_plane() {
        let converter = GeocentricConverter::new(27.0, 51.0);
        let point = PlanePoint::new(27.01, 51.01);

        let projected = converter.transform(&point).unwrap();
        assert!(projected.x() > 0.0 && projected.y() > 0.0);

        let back = converter.transform_back(&projected).unwrap();
        assert_abs_diff_eq!(back.x(), point.x(), epsilon = 1e-3);
        assert_abs_diff_eq!(back.y(), point.y(), epsilon = 1e-3);
    }

    #[test]
    fn center_projects_to_the_plane_origin() {
        let converter = GeocentricConverter::new(27.0, 51.0);
        let projected = converter.transform(&PlanePoint::new(27.0, 51.0)).unwrap();
        assert_abs_diff_eq!(projected.x(), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(projected.y(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let converter = GeocentricConverter::new(27.0, 51.0);
        assert!(converter.transform(&PlanePoint::new(f64::NAN, 51.0)).is_none());
    }

    #[test]
    fn identity_converter_is_transparent() {
        let point = PlanePoint::new(12.5, -3.25);
        assert_eq!(IdentityConverter.transform(&point), Some(point));
        assert_eq!(IdentityConverter.transform_back(&point), Some(point));
    }
}
