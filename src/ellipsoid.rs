use uom::si::{angle::radian, f64::Angle};

/// Reference ellipsoid describing the figure of the earth.
///
/// Every derived quantity is computed once from the two axes, so the
/// constants can never disagree with each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semimajor (equatorial) axis in meters.
    a: f64,

    /// Semiminor (polar) axis in meters.
    b: f64,

    /// Flattening, `(a - b) / a`.
    f: f64,

    /// First eccentricity squared, `f * (2 - f)`.
    e_sq: f64,
}

/// The WGS-84 reference ellipsoid.
pub const WGS84: Ellipsoid = Ellipsoid::from_axes(6378137.0, 6356752.314245);

impl Ellipsoid {
    /// Creates an `Ellipsoid` from its semimajor axis `a` and semiminor axis `b` in meters.
    pub const fn from_axes(a: f64, b: f64) -> Self {
        let f = (a - b) / a;
        Self {
            a,
            b,
            f,
            e_sq: f * (2.0 - f),
        }
    }

    pub const fn semimajor_axis(&self) -> f64 {
        self.a
    }

    pub const fn semiminor_axis(&self) -> f64 {
        self.b
    }

    pub const fn flattening(&self) -> f64 {
        self.f
    }

    pub const fn inverse_flattening(&self) -> f64 {
        1.0 / self.f
    }

    pub const fn eccentricity_squared(&self) -> f64 {
        self.e_sq
    }

    /// Returns `e² / (1 - e²)`.
    pub const fn second_eccentricity_squared(&self) -> f64 {
        self.e_sq / (1.0 - self.e_sq)
    }

    /// Radius of curvature in the prime vertical at geodetic `latitude`, in meters.
    pub fn prime_vertical_radius(&self, latitude: Angle) -> f64 {
        self.prime_vertical_radius_rad(latitude.get::<radian>())
    }

    pub(crate) fn prime_vertical_radius_rad(&self, latitude: f64) -> f64 {
        let s = latitude.sin();
        self.a / (1.0 - self.e_sq * s * s).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}
