use crate::error::GeoError;
use nalgebra::Vector3;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::meter,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spherical decomposition of a cartesian vector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spherical {
    /// Angle from +X towards +Y, on (-180, 180].
    azimuth: Angle,

    /// Angle from the XY plane towards +Z, on [-90, 90].
    elevation: Angle,

    range: Length,
}

impl Spherical {
    pub fn new(azimuth: Angle, elevation: Angle, range: Length) -> Self {
        Self {
            azimuth,
            elevation,
            range,
        }
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn elevation(&self) -> Angle {
        self.elevation
    }

    pub fn range(&self) -> Length {
        self.range
    }
}

/// Pointing angles of a pan/tilt device.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanTilt {
    /// Rotation about the body's +Z axis, on (-180, 180].
    pan: Angle,

    /// Angle above the body's XY plane, on [-90, 90].
    tilt: Angle,
}

impl PanTilt {
    pub fn new(pan: Angle, tilt: Angle) -> Self {
        Self { pan, tilt }
    }

    pub fn pan(&self) -> Angle {
        self.pan
    }

    pub fn tilt(&self) -> Angle {
        self.tilt
    }

    /// Returns `(pan, tilt)` in degrees.
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.pan.get::<degree>(), self.tilt.get::<degree>())
    }
}

impl From<Spherical> for PanTilt {
    fn from(spherical: Spherical) -> Self {
        Self::new(spherical.azimuth, spherical.elevation)
    }
}

/// Decomposes `v` into azimuth, elevation and range.
///
/// Returns an error for the zero vector, whose azimuth is undefined, and for
/// vectors with non-finite components.
pub fn cartesian_to_spherical(v: Vector3<f64>) -> Result<Spherical, GeoError> {
    let (x, y, z) = (v.x, v.y, v.z);
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(GeoError::NonFiniteVector { x, y, z });
    }

    if x == 0.0 && y == 0.0 && z == 0.0 {
        tracing::debug!("refusing to decompose the zero vector");
        return Err(GeoError::ZeroVector);
    }

    let mut azimuth = y.atan2(x);
    // atan2 yields -PI for a negative zero y; keep azimuth on (-PI, PI].
    if azimuth <= -std::f64::consts::PI {
        azimuth = std::f64::consts::PI;
    }
    let horizontal = x.hypot(y);
    let elevation = z.atan2(horizontal);
    let range = horizontal.hypot(z);

    Ok(Spherical::new(
        Angle::new::<radian>(azimuth),
        Angle::new::<radian>(elevation),
        Length::new::<meter>(range),
    ))
}

/// Builds the cartesian vector for `spherical`, inverting [`cartesian_to_spherical`].
pub fn spherical_to_cartesian(spherical: &Spherical) -> Vector3<f64> {
    let (sin_az, cos_az) = spherical.azimuth.get::<radian>().sin_cos();
    let (sin_el, cos_el) = spherical.elevation.get::<radian>().sin_cos();
    let r = spherical.range.get::<meter>();

    Vector3::new(r * cos_el * cos_az, r * cos_el * sin_az, r * sin_el)
}

/// Decomposes `v` into pan and tilt, discarding the range.
pub fn xyz_to_pan_tilt(v: Vector3<f64>) -> Result<PanTilt, GeoError> {
    cartesian_to_spherical(v).map(PanTilt::from)
}
