use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeoError {
    #[error("cannot decompose the zero vector: azimuth is undefined")]
    ZeroVector,
    #[error("expected finite vector components but got: ({x}, {y}, {z})")]
    NonFiniteVector { x: f64, y: f64, z: f64 },
    #[error("{operation} is not implemented")]
    Unimplemented { operation: &'static str },
}
