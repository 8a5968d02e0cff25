use serde::{Deserialize, Serialize};

/// Reference ellipsoid parameters for the local frame math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    semimajor: f64,
    e_sq: f64,
    e_prime_sq: f64,
}

impl Ellipsoid {
    /// Ellipsoid the viewer's frame math is calibrated against.
    ///
    /// The semimajor axis is the WGS 72 value. The two eccentricity
    /// constants come from different published tables and are not derived
    /// from one another; both are kept as given because the transform's
    /// numeric output depends on the exact values.
    pub const WGS72: Self = Ellipsoid {
        semimajor: 6_378_135.0,
        e_sq: 0.006694379990130,
        e_prime_sq: 0.0067394,
    };

    /// Equatorial radius in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// First eccentricity squared, used when recovering geodetic latitude.
    pub fn e_sq(&self) -> f64 {
        self.e_sq
    }

    /// Second eccentricity squared, used for the geocentric radius.
    pub fn e_prime_sq(&self) -> f64 {
        self.e_prime_sq
    }

    /// Geocentric latitude for a geodetic latitude, both in radians.
    pub fn geocentric_latitude(&self, geodetic_lat: f64) -> f64 {
        (geodetic_lat.tan() / (1.0 + self.e_prime_sq)).atan()
    }

    /// Distance from the earth center to the ellipsoid surface, in meters,
    /// for a squared sine of the geocentric latitude.
    pub fn geocentric_radius(&self, sin_sq_lat: f64) -> f64 {
        self.semimajor / (1.0 + self.e_prime_sq * sin_sq_lat).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS72
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn geocentric_latitude_is_pulled_towards_the_equator() {
        let ellipsoid = Ellipsoid::WGS72;
        let geodetic = 51.0_f64.to_radians();
        let geocentric = ellipsoid.geocentric_latitude(geodetic);
        assert!(geocentric < geodetic);
        assert!(geodetic - geocentric < 0.01);
        assert_abs_diff_eq!(ellipsoid.geocentric_latitude(0.0), 0.0);
    }

    #[test]
    fn geocentric_radius_shrinks_towards_the_poles() {
        let ellipsoid = Ellipsoid::WGS72;
        assert_abs_diff_eq!(ellipsoid.geocentric_radius(0.0), 6_378_135.0);
        assert!(ellipsoid.geocentric_radius(1.0) < ellipsoid.geocentric_radius(0.0));
    }
}
