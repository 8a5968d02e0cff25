use nalgebra::{Matrix3, Vector3};

use crate::ellipsoid::Ellipsoid;

/// Division floor for the latitude correction; the denominator only
/// approaches zero far outside the frame's working range.
const DENOM_FLOOR: f64 = 1e-7;

/// Geodetic coordinates recovered from a local frame position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPosition {
    /// Longitude in radians.
    pub lon: f64,
    /// Latitude in radians.
    pub lat: f64,
    /// Height above the ellipsoid in meters.
    pub alt: f64,
    /// Geocentric earth radius at the position's latitude, in meters.
    pub earth_radius: f64,
}

/// Local tangent frame anchored at a reference point above the ellipsoid.
///
/// The frame axes are x = east, y = north, z = up. Positions are exchanged
/// with the geocentric cartesian system through a rotation matrix and a
/// translation vector, both computed once at construction; moving the map
/// center means building a new frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricFrame {
    ellipsoid: Ellipsoid,
    rotation: Matrix3<f64>,
    translation: Vector3<f64>,
}

impl GeocentricFrame {
    /// Builds the frame for a reference point given in radians and meters.
    pub fn new(ref_lon: f64, ref_lat: f64, ref_alt: f64) -> Self {
        Self::with_ellipsoid(Ellipsoid::WGS72, ref_lon, ref_lat, ref_alt)
    }

    /// Builds the frame over a specific ellipsoid.
    pub fn with_ellipsoid(ellipsoid: Ellipsoid, ref_lon: f64, ref_lat: f64, ref_alt: f64) -> Self {
        let lat_c = ellipsoid.geocentric_latitude(ref_lat);
        let (sin_lat, cos_lat) = lat_c.sin_cos();
        let (sin_lon, cos_lon) = ref_lon.sin_cos();

        let radius = ellipsoid.geocentric_radius(sin_lat * sin_lat) + ref_alt;

        let east = Vector3::new(-sin_lon, cos_lon, 0.0);
        let north = Vector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
        let up = Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);

        Self {
            ellipsoid,
            rotation: Matrix3::from_rows(&[east.transpose(), north.transpose(), up.transpose()]),
            translation: up * radius,
        }
    }

    /// The ellipsoid this frame is built over.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Projects a geodetic position (radians, meters) into frame
    /// coordinates.
    pub fn geodetic_to_local(&self, lon: f64, lat: f64, alt: f64) -> Vector3<f64> {
        let lat_c = self.ellipsoid.geocentric_latitude(lat);
        let (sin_lat, cos_lat) = lat_c.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let radius = self.ellipsoid.geocentric_radius(sin_lat * sin_lat) + alt;
        let geocentric = Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat) * radius;

        self.rotation * (geocentric - self.translation)
    }

    /// Recovers geodetic coordinates from a frame position.
    ///
    /// Geocentric to geodetic latitude has no closed form over this
    /// parameterization; the latitude is recovered with a single correction
    /// step applied to the geocentric latitude, which keeps the residual of
    /// a round trip through [`geodetic_to_local`](Self::geodetic_to_local)
    /// below a thousandth of a degree.
    pub fn local_to_geodetic(&self, local: Vector3<f64>) -> GeodeticPosition {
        let geocentric = self.rotation.transpose() * local + self.translation;

        let r_sq = geocentric.norm_squared();
        let r = r_sq.sqrt();
        let sin_sq_lat = geocentric.z * geocentric.z / r_sq;

        let earth_radius = self.ellipsoid.geocentric_radius(sin_sq_lat);

        let e_sq = self.ellipsoid.e_sq();
        let zeta = sin_sq_lat.sqrt().asin();
        let coef = 0.5 * e_sq * self.ellipsoid.semimajor() / r;
        let angle = (coef * (2.0 * zeta).sin() / (1.0 - e_sq * sin_sq_lat).sqrt()).asin();
        let denom = 1.0 - 2.0 * coef * (2.0 * zeta).cos() + 2.0 * coef * coef * sin_sq_lat;
        let correction = if denom.abs() > DENOM_FLOOR {
            angle / denom
        } else {
            angle / DENOM_FLOOR
        };

        GeodeticPosition {
            lon: geocentric.y.atan2(geocentric.x),
            lat: zeta + correction,
            alt: r - earth_radius,
            earth_radius,
        }
    }
}
