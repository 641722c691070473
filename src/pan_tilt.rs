use crate::{
    enu::{EnuFrame, geodetic_to_enu},
    error::GeoError,
    geodetic::GeodeticPoint,
    rotation::{OrientationOffsets, offset_north_pitch_roll},
    spherical::{PanTilt, Spherical, cartesian_to_spherical, xyz_to_pan_tilt},
};
use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;
use uom::{
    ConstZero,
    si::f64::{Angle, Length},
};

/// Computes the pan and tilt that point a device at `origin` towards `target`.
///
/// The device's orientation is given as offsets from the local ENU frame,
/// applied heading first, then pitch, then roll.
///
/// Returns [`GeoError::ZeroVector`] if `target` coincides with `origin`.
pub fn geodetic_to_pan_tilt_with_offsets(
    target: GeodeticPoint,
    origin: GeodeticPoint,
    heading: Angle,
    pitch: Angle,
    roll: Angle,
) -> Result<PanTilt, GeoError> {
    let enu = geodetic_to_enu(target, origin);
    let body = offset_north_pitch_roll(enu.to_vector(), heading, pitch, roll);
    xyz_to_pan_tilt(body)
}

/// Computes the pan and tilt from a level device at `origin` towards `target`.
pub fn geodetic_to_pan_tilt(
    target: GeodeticPoint,
    origin: GeodeticPoint,
    heading: Angle,
) -> Result<PanTilt, GeoError> {
    geodetic_to_pan_tilt_with_offsets(target, origin, heading, Angle::ZERO, Angle::ZERO)
}

/// Recovers the geodetic target seen at `pan` and `tilt`.
///
/// The target would be where the pointing ray first meets the earth's
/// surface, a dome of radius `max_view_distance` around the device, or the
/// given distance `dist`. This reverse mapping does not exist yet and the
/// function always reports [`GeoError::Unimplemented`].
pub fn pan_tilt_to_target_geodetic(
    pan: Angle,
    tilt: Angle,
    dist: Option<Length>,
    max_view_distance: Length,
) -> Result<GeodeticPoint, GeoError> {
    tracing::debug!(?pan, ?tilt, ?dist, ?max_view_distance, "reverse pan/tilt requested");
    Err(GeoError::Unimplemented {
        operation: "pan_tilt_to_target_geodetic",
    })
}

/// A pan/tilt device mounted at a fixed geodetic position.
///
/// The ENU frame of the mount and the fused body rotation are computed once
/// so that aiming at many targets only costs a matrix product per target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mount {
    frame: EnuFrame,
    offsets: OrientationOffsets,
    body_from_enu: Matrix3<f64>,
}

impl Mount {
    pub fn new(origin: GeodeticPoint, offsets: OrientationOffsets) -> Self {
        Self {
            frame: EnuFrame::at(origin),
            offsets,
            body_from_enu: offsets.body_from_enu(),
        }
    }

    pub fn origin(&self) -> GeodeticPoint {
        self.frame.origin()
    }

    pub fn offsets(&self) -> OrientationOffsets {
        self.offsets
    }

    pub fn frame(&self) -> &EnuFrame {
        &self.frame
    }

    /// Returns the vector from the mount to `target` in the body frame, in meters.
    pub fn body_vector_of(&self, target: GeodeticPoint) -> Vector3<f64> {
        self.body_from_enu * self.frame.enu_vector_of(target)
    }

    /// Returns azimuth, elevation and range of `target` in the body frame.
    pub fn spherical_to(&self, target: GeodeticPoint) -> Result<Spherical, GeoError> {
        cartesian_to_spherical(self.body_vector_of(target))
    }

    /// Returns the pan and tilt that point the mount at `target`.
    pub fn pan_tilt_to(&self, target: GeodeticPoint) -> Result<PanTilt, GeoError> {
        xyz_to_pan_tilt(self.body_vector_of(target))
    }

    /// Computes pan and tilt for every target in parallel.
    /// Results are returned in the order of `targets`.
    pub fn par_pan_tilt(&self, targets: &[GeodeticPoint]) -> Vec<Result<PanTilt, GeoError>> {
        tracing::debug!(targets = targets.len(), "aiming at targets");
        targets
            .par_iter()
            .map(|target| self.pan_tilt_to(*target))
            .collect()
    }
}
