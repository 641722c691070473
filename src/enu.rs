use crate::{
    ecef::EcefPoint,
    ellipsoid::{Ellipsoid, WGS84},
    geodetic::GeodeticPoint,
};
use nalgebra::{Matrix3, Vector3};
use uom::si::{f64::Length, length::meter};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in a local East-North-Up tangent plane.
///
/// An `EnuPoint` is only meaningful relative to the origin it was computed
/// against. There is no global ENU frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnuPoint {
    east: Length,
    north: Length,
    up: Length,
}

impl EnuPoint {
    pub fn new(east: Length, north: Length, up: Length) -> Self {
        Self { east, north, up }
    }

    /// Creates an `EnuPoint` from components in meters.
    pub fn from_meters(east: f64, north: f64, up: f64) -> Self {
        Self::new(
            Length::new::<meter>(east),
            Length::new::<meter>(north),
            Length::new::<meter>(up),
        )
    }

    pub fn east(&self) -> Length {
        self.east
    }

    pub fn north(&self) -> Length {
        self.north
    }

    pub fn up(&self) -> Length {
        self.up
    }

    /// Returns the position as an (east, north, up) vector in meters.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(
            self.east.get::<meter>(),
            self.north.get::<meter>(),
            self.up.get::<meter>(),
        )
    }
}

impl From<Vector3<f64>> for EnuPoint {
    fn from(meters: Vector3<f64>) -> Self {
        Self::from_meters(meters.x, meters.y, meters.z)
    }
}

/// The East-North-Up tangent plane anchored at a geodetic origin.
///
/// Holds the origin's ECEF position and the ECEF to ENU rotation so that many
/// points can be converted against the same origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnuFrame {
    ellipsoid: Ellipsoid,
    origin: GeodeticPoint,
    origin_ecef: Vector3<f64>,

    /// Rows are the east, north and up unit vectors expressed in ECEF.
    enu_from_ecef: Matrix3<f64>,
}

impl EnuFrame {
    /// Creates the ENU frame at `origin` on the WGS-84 ellipsoid.
    pub fn at(origin: GeodeticPoint) -> Self {
        Self::with_ellipsoid(origin, WGS84)
    }

    /// Creates the ENU frame at `origin` on `ellipsoid`.
    pub fn with_ellipsoid(origin: GeodeticPoint, ellipsoid: Ellipsoid) -> Self {
        let (lat, lon, _) = origin.to_raw();
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        // East only depends on longitude. Up uses latitude for its vertical tilt.
        #[rustfmt::skip]
        let enu_from_ecef = Matrix3::new(
            -sin_lon,            cos_lon,            0.0,
            -sin_lat * cos_lon, -sin_lat * sin_lon,  cos_lat,
             cos_lat * cos_lon,  cos_lat * sin_lon,  sin_lat,
        );

        Self {
            ellipsoid,
            origin,
            origin_ecef: ellipsoid.geodetic_to_ecef_raw(origin),
            enu_from_ecef,
        }
    }

    pub fn origin(&self) -> GeodeticPoint {
        self.origin
    }

    pub fn origin_ecef(&self) -> EcefPoint {
        EcefPoint::from(self.origin_ecef)
    }

    /// Expresses an ECEF position in this frame.
    pub fn to_enu(&self, ecef: EcefPoint) -> EnuPoint {
        EnuPoint::from(self.enu_from_ecef_vector(ecef.to_vector()))
    }

    /// Expresses a position in this frame as ECEF.
    pub fn to_ecef(&self, enu: EnuPoint) -> EcefPoint {
        EcefPoint::from(self.ecef_from_enu_vector(enu.to_vector()))
    }

    /// Expresses a geodetic `target` in this frame.
    pub fn geodetic_to_enu(&self, target: GeodeticPoint) -> EnuPoint {
        EnuPoint::from(self.enu_vector_of(target))
    }

    /// Converts a position in this frame back to geodetic coordinates.
    pub fn enu_to_geodetic(&self, enu: EnuPoint) -> GeodeticPoint {
        self.ellipsoid
            .ecef_to_geodetic_raw(self.ecef_from_enu_vector(enu.to_vector()))
    }

    /// Returns the (east, north, up) vector from the origin to `target` in meters.
    pub(crate) fn enu_vector_of(&self, target: GeodeticPoint) -> Vector3<f64> {
        self.enu_from_ecef_vector(self.ellipsoid.geodetic_to_ecef_raw(target))
    }

    fn enu_from_ecef_vector(&self, ecef: Vector3<f64>) -> Vector3<f64> {
        self.enu_from_ecef * (ecef - self.origin_ecef)
    }

    fn ecef_from_enu_vector(&self, enu: Vector3<f64>) -> Vector3<f64> {
        // The rotation is orthonormal so its transpose is its inverse.
        self.enu_from_ecef.transpose() * enu + self.origin_ecef
    }
}

/// Converts an ECEF position to ENU relative to `origin`.
pub fn ecef_to_enu(ecef: EcefPoint, origin: GeodeticPoint) -> EnuPoint {
    EnuFrame::at(origin).to_enu(ecef)
}

/// Converts an ENU position relative to `origin` to ECEF.
pub fn enu_to_ecef(enu: EnuPoint, origin: GeodeticPoint) -> EcefPoint {
    EnuFrame::at(origin).to_ecef(enu)
}

/// Converts a geodetic `target` to ENU relative to a geodetic `origin`.
pub fn geodetic_to_enu(target: GeodeticPoint, origin: GeodeticPoint) -> EnuPoint {
    EnuFrame::at(origin).geodetic_to_enu(target)
}

/// Converts an ENU position relative to `origin` to geodetic coordinates.
pub fn enu_to_geodetic(enu: EnuPoint, origin: GeodeticPoint) -> GeodeticPoint {
    EnuFrame::at(origin).enu_to_geodetic(enu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecef::geodetic_to_ecef;
    use approx::assert_abs_diff_eq;
    use quickcheck::quickcheck;
    use rstest::rstest;
    use uom::si::angle::degree;

    fn la() -> GeodeticPoint {
        GeodeticPoint::from_degrees(34.00000048, -117.3335693, 251.702)
    }

    fn enu_la(dx: f64, dy: f64, dz: f64) -> Vector3<f64> {
        let ecef = geodetic_to_ecef(la()).to_vector() + Vector3::new(dx, dy, dz);
        ecef_to_enu(EcefPoint::from(ecef), la()).to_vector()
    }

    fn enu(target: (f64, f64, f64), origin: (f64, f64, f64)) -> Vector3<f64> {
        geodetic_to_enu(
            GeodeticPoint::from_degrees(target.0, target.1, target.2),
            GeodeticPoint::from_degrees(origin.0, origin.1, origin.2),
        )
        .to_vector()
    }

    #[rstest]
    #[case((0.0, 0.0, 0.0), (0.0, 0.0, 0.0))]
    #[case((1.0, 0.0, 0.0), (0.88834836, 0.25676467, -0.38066927))]
    #[case((0.0, 1.0, 0.0), (-0.45917011, 0.49675810, -0.73647416))]
    #[case((0.0, 0.0, 1.0), (0.00000000, 0.82903757, 0.55919291))]
    fn los_angeles_displacement(
        #[case] displacement: (f64, f64, f64),
        #[case] expected: (f64, f64, f64),
    ) {
        let result = enu_la(displacement.0, displacement.1, displacement.2);
        assert_abs_diff_eq!(result, Vector3::new(expected.0, expected.1, expected.2), epsilon = 1e-6);
    }

    #[test]
    fn los_angeles_full_loop() {
        let ecef = geodetic_to_ecef(la());
        let enu = ecef_to_enu(ecef, la());
        let result = crate::ecef::ecef_to_geodetic(enu_to_ecef(enu, la()));

        assert_abs_diff_eq!(
            result.latitude().get::<degree>(),
            la().latitude().get::<degree>(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            result.longitude().get::<degree>(),
            la().longitude().get::<degree>(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            result.height().get::<meter>(),
            la().height().get::<meter>(),
            epsilon = 1e-6
        );
    }

    #[rstest]
    #[case((0.0, 0.0, 0.0), (0.0, 0.0, 0.0), 0.0)]
    #[case((0.0, 0.0, 0.0), (0.0, 0.0, 10.0), -10.0)]
    #[case((0.0, 0.0, 0.0), (0.0, 0.0, -10.0), 10.0)]
    #[case((0.0, 0.0, 10.0), (0.0, 0.0, 0.0), 10.0)]
    #[case((0.0, 0.0, -10.0), (0.0, 0.0, 0.0), -10.0)]
    #[case((34.0, -117.0, 42.5), (34.0, -117.0, 0.0), 42.5)]
    #[case((-60.0, 150.0, 0.0), (-60.0, 150.0, 3000.0), -3000.0)]
    fn height_only_moves_up(
        #[case] target: (f64, f64, f64),
        #[case] origin: (f64, f64, f64),
        #[case] up: f64,
    ) {
        assert_abs_diff_eq!(enu(target, origin), Vector3::new(0.0, 0.0, up), epsilon = 1e-6);
    }

    #[test]
    fn north_pole_from_equator() {
        let result = enu((90.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_abs_diff_eq!(result.x, 0.0, epsilon = 1e-6);
        assert!(result.y > 0.0 && result.z < 0.0);
    }

    #[test]
    fn south_pole_from_equator() {
        let result = enu((-90.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_abs_diff_eq!(result.x, 0.0, epsilon = 1e-6);
        assert!(result.y < 0.0 && result.z < 0.0);
    }

    #[rstest]
    #[case(90.0, 1.0)]
    #[case(-90.0, -1.0)]
    fn quarter_turn_in_longitude(#[case] lon: f64, #[case] east_sign: f64) {
        let result = enu((0.0, lon, 0.0), (0.0, 0.0, 0.0));
        assert_abs_diff_eq!(result.x, east_sign * WGS84.semimajor_axis(), epsilon = 1e-6);
        assert_abs_diff_eq!(result.y, 0.0, epsilon = 1e-6);
        assert!(result.z < 0.0);
    }

    #[test]
    fn latitude_past_the_pole() {
        let result = enu((180.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        assert_abs_diff_eq!(result.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(result.y, 0.0, epsilon = 1e-6);
        assert!(result.z < 0.0);
    }

    #[rstest]
    #[case(90.0, 90.0, 1.0, 1.0)]
    #[case(-90.0, 90.0, 1.0, -1.0)]
    #[case(-90.0, -90.0, -1.0, -1.0)]
    #[case(90.0, -90.0, -1.0, 1.0)]
    fn quadrants(
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] east_sign: f64,
        #[case] north_sign: f64,
    ) {
        let result = enu((lat, lon, 0.0), (0.0, 0.0, 0.0));
        assert_eq!(result.x.signum(), east_sign);
        assert_eq!(result.y.signum(), north_sign);
        assert!(result.z < 0.0);
    }

    #[test]
    fn frame_origin_is_zero() {
        let frame = EnuFrame::at(la());
        assert_abs_diff_eq!(
            frame.to_enu(frame.origin_ecef()).to_vector(),
            Vector3::zeros(),
            epsilon = 1e-9
        );
        assert_eq!(frame.origin(), la());
    }

    #[test]
    fn enu_to_geodetic_inverts_geodetic_to_enu() {
        let target = GeodeticPoint::from_degrees(34.001, -117.334, 300.0);
        let result = enu_to_geodetic(geodetic_to_enu(target, la()), la());

        assert_abs_diff_eq!(
            result.latitude().get::<degree>(),
            target.latitude().get::<degree>(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            result.longitude().get::<degree>(),
            target.longitude().get::<degree>(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(result.height().get::<meter>(), 300.0, epsilon = 1e-6);
    }

    quickcheck! {
        fn ecef_enu_roundtrip(
            x_seed: i16,
            y_seed: i16,
            z_seed: i16,
            lat_seed: i8,
            lon_seed: i8
        ) -> bool {
            // Points within 10000 km of the earth's center seen from origins anywhere on the globe.
            let scale = 1.0e7 / i16::MAX as f64;
            let point = EcefPoint::from_meters(
                x_seed as f64 * scale,
                y_seed as f64 * scale,
                z_seed as f64 * scale,
            );
            let origin = GeodeticPoint::from_degrees(
                lat_seed as f64 * 90. / 128.,
                lon_seed as f64 * 180. / 128.,
                0.0,
            );

            let result = enu_to_ecef(ecef_to_enu(point, origin), origin);
            (result.to_vector() - point.to_vector()).norm() < 1e-6
        }
    }
}
