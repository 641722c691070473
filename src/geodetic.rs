use sguaba::systems::Wgs84;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length},
    length::meter,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the WGS-84 ellipsoid.
///
/// Latitude is expected on [-90, 90] and longitude on (-180, 180] but neither
/// is checked. Values outside these ranges are interpreted through the usual
/// trigonometric identities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPoint {
    latitude: Angle,
    longitude: Angle,

    /// Height above the ellipsoid.
    height: Length,
}

impl GeodeticPoint {
    pub fn new(latitude: Angle, longitude: Angle, height: Length) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Creates a `GeodeticPoint` from a latitude and longitude in degrees and a height in meters.
    pub fn from_degrees(latitude: f64, longitude: f64, height: f64) -> Self {
        Self::new(
            Angle::new::<degree>(latitude),
            Angle::new::<degree>(longitude),
            Length::new::<meter>(height),
        )
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn height(&self) -> Length {
        self.height
    }

    /// Returns latitude and longitude in radians and height in meters.
    pub(crate) fn to_raw(self) -> (f64, f64, f64) {
        (
            self.latitude.get::<radian>(),
            self.longitude.get::<radian>(),
            self.height.get::<meter>(),
        )
    }
}

impl From<&Wgs84> for GeodeticPoint {
    fn from(position: &Wgs84) -> Self {
        Self::new(position.latitude(), position.longitude(), position.altitude())
    }
}

impl From<Wgs84> for GeodeticPoint {
    fn from(position: Wgs84) -> Self {
        Self::from(&position)
    }
}
