//! Frame rotations that re-express ENU vectors in a device's body frame.
//!
//! All elementary rotations follow the passive convention: they rotate the
//! coordinate frame by the given angle, so a vector keeps its direction in
//! space and only its components change.

use nalgebra::{Matrix3, Vector3};
use uom::si::{
    angle::{degree, radian},
    f64::Angle,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bias applied to the heading so ENU north lines up with the body's forward +X axis.
const NORTH_TO_FORWARD_DEG: f64 = 90.0;

/// Frame rotation by `angle` about the X axis.
pub fn rx(angle: Angle) -> Matrix3<f64> {
    let (s, c) = angle.get::<radian>().sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0,   c,   s,
        0.0,  -s,   c,
    );
    m
}

/// Frame rotation by `angle` about the Y axis.
pub fn ry(angle: Angle) -> Matrix3<f64> {
    let (s, c) = angle.get::<radian>().sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
          c, 0.0,  -s,
        0.0, 1.0, 0.0,
          s, 0.0,   c,
    );
    m
}

/// Frame rotation by `angle` about the Z axis.
pub fn rz(angle: Angle) -> Matrix3<f64> {
    let (s, c) = angle.get::<radian>().sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
          c,   s, 0.0,
         -s,   c, 0.0,
        0.0, 0.0, 1.0,
    );
    m
}

/// Returns `Rx(x_offset) * Ry(y_offset) * Rz(z_offset + 90°)`.
///
/// Applied to a column vector the Z rotation acts first, then Y, then X.
pub fn frame_zyx(z_offset: Angle, y_offset: Angle, x_offset: Angle) -> Matrix3<f64> {
    let z = rz(z_offset + Angle::new::<degree>(NORTH_TO_FORWARD_DEG));
    let y = ry(y_offset);
    let x = rx(x_offset);
    x * y * z
}

/// Rotates the frame about Z, then Y, then X and returns `v` expressed in the rotated frame.
///
/// The Z rotation carries a fixed +90° bias on top of `z_offset`.
pub fn rotate_frame_zyx(
    v: Vector3<f64>,
    z_offset: Angle,
    y_offset: Angle,
    x_offset: Angle,
) -> Vector3<f64> {
    frame_zyx(z_offset, y_offset, x_offset) * v
}

/// Applies heading, then pitch, then roll offsets to an ENU vector.
pub fn offset_north_pitch_roll(
    v: Vector3<f64>,
    heading: Angle,
    pitch: Angle,
    roll: Angle,
) -> Vector3<f64> {
    rotate_frame_zyx(v, heading, pitch, roll)
}

/// Orientation of a mounted device relative to its local ENU frame.
///
/// Offsets are always applied heading first, then pitch, then roll.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationOffsets {
    /// Rotation about up, relative to north.
    heading: Angle,
    pitch: Angle,
    roll: Angle,
}

impl OrientationOffsets {
    pub fn new(heading: Angle, pitch: Angle, roll: Angle) -> Self {
        Self {
            heading,
            pitch,
            roll,
        }
    }

    /// Creates `OrientationOffsets` from angles in degrees.
    pub fn from_degrees(heading: f64, pitch: f64, roll: f64) -> Self {
        Self::new(
            Angle::new::<degree>(heading),
            Angle::new::<degree>(pitch),
            Angle::new::<degree>(roll),
        )
    }

    /// Offsets with only a heading, as for a level device.
    pub fn heading_only(heading: Angle) -> Self {
        Self::new(heading, Angle::new::<degree>(0.0), Angle::new::<degree>(0.0))
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn pitch(&self) -> Angle {
        self.pitch
    }

    pub fn roll(&self) -> Angle {
        self.roll
    }

    /// The fused rotation taking ENU components to body components.
    pub fn body_from_enu(&self) -> Matrix3<f64> {
        frame_zyx(self.heading, self.pitch, self.roll)
    }

    /// Expresses the ENU vector `enu` in the body frame.
    pub fn apply(&self, enu: Vector3<f64>) -> Vector3<f64> {
        offset_north_pitch_roll(enu, self.heading, self.pitch, self.roll)
    }
}

impl Default for OrientationOffsets {
    fn default() -> Self {
        Self::from_degrees(0.0, 0.0, 0.0)
    }
}
