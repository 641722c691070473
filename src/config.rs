use crate::{geodetic::GeodeticPoint, pan_tilt::Mount, rotation::OrientationOffsets};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read mount config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse mount config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Geodetic position in degrees and meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OriginConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub height: f64,
}

/// Describes where a pan/tilt device is mounted and how it is oriented.
///
/// All angles are in degrees. Pitch and roll default to zero.
///
/// ```json
/// {
///     "origin": { "latitude": 34.0, "longitude": -117.33, "height": 251.7 },
///     "heading": 90.0,
///     "pitch": 10.0,
///     "roll": 0.0
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MountConfig {
    pub origin: OriginConfig,
    pub heading: f64,
    #[serde(default)]
    pub pitch: f64,
    #[serde(default)]
    pub roll: f64,
}

impl MountConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn origin(&self) -> GeodeticPoint {
        GeodeticPoint::from_degrees(
            self.origin.latitude,
            self.origin.longitude,
            self.origin.height,
        )
    }

    pub fn offsets(&self) -> OrientationOffsets {
        OrientationOffsets::from_degrees(self.heading, self.pitch, self.roll)
    }
}

impl From<MountConfig> for Mount {
    fn from(config: MountConfig) -> Self {
        Mount::new(config.origin(), config.offsets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use uom::si::{angle::degree, length::meter};

    #[test]
    fn parse_full_config() {
        let config = MountConfig::from_json_str(
            r#"{
                "origin": { "latitude": 34.0, "longitude": -117.33, "height": 251.7 },
                "heading": 90.0,
                "pitch": 10.0,
                "roll": -2.5
            }"#,
        )
        .unwrap();

        let mount = Mount::from(config);
        assert_relative_eq!(mount.origin().latitude().get::<degree>(), 34.0, epsilon = 1e-12);
        assert_relative_eq!(mount.origin().height().get::<meter>(), 251.7, epsilon = 1e-12);
        assert_relative_eq!(mount.offsets().heading().get::<degree>(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(mount.offsets().pitch().get::<degree>(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(mount.offsets().roll().get::<degree>(), -2.5, epsilon = 1e-12);
    }

    #[test]
    fn pitch_roll_and_height_default_to_zero() {
        let config = MountConfig::from_json_str(
            r#"{ "origin": { "latitude": 0.0, "longitude": 0.0 }, "heading": 45.0 }"#,
        )
        .unwrap();

        assert_eq!(config.origin.height, 0.0);
        assert_eq!(config.pitch, 0.0);
        assert_eq!(config.roll, 0.0);
    }

    #[test]
    fn missing_heading_is_an_error() {
        let result =
            MountConfig::from_json_str(r#"{ "origin": { "latitude": 0.0, "longitude": 0.0 } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = MountConfig::from_path("does/not/exist.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
