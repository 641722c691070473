use crate::{
    ellipsoid::{Ellipsoid, WGS84},
    geodetic::GeodeticPoint,
};
use nalgebra::Vector3;
use uom::si::{
    angle::radian,
    f64::{Angle, Length},
    length::meter,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance from the polar axis below which a point is treated as lying on it.
const POLAR_AXIS_TOLERANCE_M: f64 = 1e-9;

/// An Earth-Centered-Earth-Fixed position.
///
/// The origin is the earth's center, +Z passes through the north pole and +X
/// through the prime meridian on the equator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcefPoint {
    x: Length,
    y: Length,
    z: Length,
}

impl EcefPoint {
    pub fn new(x: Length, y: Length, z: Length) -> Self {
        Self { x, y, z }
    }

    /// Creates an `EcefPoint` from components in meters.
    pub fn from_meters(x: f64, y: f64, z: f64) -> Self {
        Self::new(
            Length::new::<meter>(x),
            Length::new::<meter>(y),
            Length::new::<meter>(z),
        )
    }

    pub fn x(&self) -> Length {
        self.x
    }

    pub fn y(&self) -> Length {
        self.y
    }

    pub fn z(&self) -> Length {
        self.z
    }

    /// Returns the position as a vector in meters.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(
            self.x.get::<meter>(),
            self.y.get::<meter>(),
            self.z.get::<meter>(),
        )
    }
}

impl From<Vector3<f64>> for EcefPoint {
    fn from(meters: Vector3<f64>) -> Self {
        Self::from_meters(meters.x, meters.y, meters.z)
    }
}

impl Ellipsoid {
    /// Converts a geodetic `point` on this ellipsoid to ECEF.
    pub fn geodetic_to_ecef(&self, point: GeodeticPoint) -> EcefPoint {
        EcefPoint::from(self.geodetic_to_ecef_raw(point))
    }

    pub(crate) fn geodetic_to_ecef_raw(&self, point: GeodeticPoint) -> Vector3<f64> {
        let (lat, lon, height) = point.to_raw();
        let n = self.prime_vertical_radius_rad(lat);
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        Vector3::new(
            (height + n) * cos_lat * cos_lon,
            (height + n) * cos_lat * sin_lon,
            (height + (1.0 - self.eccentricity_squared()) * n) * sin_lat,
        )
    }

    /// Converts an ECEF `point` to a geodetic position on this ellipsoid.
    ///
    /// Uses Bowring's closed-form solution without iteration. Points on the
    /// polar axis have no defined longitude; they are reported at longitude 0
    /// and latitude +90 (or -90 when `z` is negative).
    pub fn ecef_to_geodetic(&self, point: EcefPoint) -> GeodeticPoint {
        self.ecef_to_geodetic_raw(point.to_vector())
    }

    pub(crate) fn ecef_to_geodetic_raw(&self, ecef: Vector3<f64>) -> GeodeticPoint {
        let (x, y, z) = (ecef.x, ecef.y, ecef.z);
        let a = self.semimajor_axis();
        let b = self.semiminor_axis();
        let e_sq = self.eccentricity_squared();
        let p = x.hypot(y);

        if p <= POLAR_AXIS_TOLERANCE_M {
            tracing::trace!(x, y, z, "ecef point lies on the polar axis");
            let lat = if z < 0.0 {
                -std::f64::consts::FRAC_PI_2
            } else {
                std::f64::consts::FRAC_PI_2
            };

            return GeodeticPoint::new(
                Angle::new::<radian>(lat),
                Angle::new::<radian>(0.0),
                Length::new::<meter>(z.abs() - b),
            );
        }

        // Parametric latitude.
        let (sin_q, cos_q) = (z * a).atan2(p * b).sin_cos();
        let lat = (z + self.second_eccentricity_squared() * b * sin_q.powi(3))
            .atan2(p - e_sq * a * cos_q.powi(3));
        let mut lon = y.atan2(x);
        // A negative zero y yields -PI; keep longitude on (-PI, PI].
        if lon <= -std::f64::consts::PI {
            lon = std::f64::consts::PI;
        }

        let v = self.prime_vertical_radius_rad(lat);
        let (sin_lat, cos_lat) = lat.sin_cos();
        // Divide by whichever of cos/sin is larger so the height stays accurate near the poles.
        let height = if cos_lat.abs() >= sin_lat.abs() {
            p / cos_lat - v
        } else {
            z / sin_lat - v * (1.0 - e_sq)
        };

        GeodeticPoint::new(
            Angle::new::<radian>(lat),
            Angle::new::<radian>(lon),
            Length::new::<meter>(height),
        )
    }
}

/// Converts a WGS-84 geodetic `point` to ECEF.
pub fn geodetic_to_ecef(point: GeodeticPoint) -> EcefPoint {
    WGS84.geodetic_to_ecef(point)
}

/// Converts an ECEF `point` to a WGS-84 geodetic position.
pub fn ecef_to_geodetic(point: EcefPoint) -> GeodeticPoint {
    WGS84.ecef_to_geodetic(point)
}
