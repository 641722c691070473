// #![warn(missing_docs)]

//! Pointing utilities for devices mounted at a known geodetic position.
//!
//! Converts WGS-84 positions to Earth-Centered-Earth-Fixed (ECEF) and local
//! East-North-Up (ENU) coordinates, applies a device's heading, pitch and roll
//! offsets and decomposes the result into pan and tilt angles.
//!
//! ```
//! use geopoint::{GeodeticPoint, geodetic_to_pan_tilt};
//! use uom::si::{angle::degree, f64::Angle};
//!
//! let origin = GeodeticPoint::from_degrees(0.0, 0.0, 0.0);
//! let target = GeodeticPoint::from_degrees(1e-4, 0.0, 10.0);
//!
//! let pan_tilt = geodetic_to_pan_tilt(target, origin, Angle::new::<degree>(0.0))
//!     .expect("target differs from origin");
//! assert!(pan_tilt.pan().get::<degree>().abs() < 1e-9);
//! ```

#[cfg(feature = "serde")]
pub mod config;
pub mod ecef;
pub mod ellipsoid;
pub mod enu;
#[allow(missing_docs)]
pub mod error;
pub mod geodetic;
pub mod pan_tilt;
pub mod rotation;
pub mod spherical;

pub use ecef::{EcefPoint, ecef_to_geodetic, geodetic_to_ecef};
pub use ellipsoid::{Ellipsoid, WGS84};
pub use enu::{EnuFrame, EnuPoint, ecef_to_enu, enu_to_ecef, enu_to_geodetic, geodetic_to_enu};
pub use error::GeoError;
pub use geodetic::GeodeticPoint;
pub use pan_tilt::{
    Mount, geodetic_to_pan_tilt, geodetic_to_pan_tilt_with_offsets, pan_tilt_to_target_geodetic,
};
pub use rotation::{OrientationOffsets, offset_north_pitch_roll, rotate_frame_zyx};
pub use spherical::{
    PanTilt, Spherical, cartesian_to_spherical, spherical_to_cartesian, xyz_to_pan_tilt,
};
