//! Two-angle coordinate records. All angles are radians.
//!
//! Conventions:
//! - [`Horizontal`] azimuth is measured westward from the south.
//! - [`Geographic`] longitude is positive west of Greenwich.
//! - Right ascension and longitudes are kept in `[0, 2π)` by the
//!   conversion functions in [`crate::transform`].

/// Right ascension α and declination δ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Ecliptic longitude λ and latitude β.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    pub longitude: f64,
    pub latitude: f64,
}

/// Azimuth A (from south, westward) and altitude h.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Galactic longitude l and latitude b (B1950 pole).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Galactic {
    pub longitude: f64,
    pub latitude: f64,
}

/// Observer position: longitude L (positive west) and latitude φ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geographic {
    pub longitude: f64,
    pub latitude: f64,
}

macro_rules! degree_constructors {
    ($ty:ident, $a:ident, $b:ident) => {
        impl $ty {
            pub const fn new($a: f64, $b: f64) -> Self {
                Self { $a, $b }
            }

            /// Build from degrees.
            pub fn from_degrees($a: f64, $b: f64) -> Self {
                Self {
                    $a: $a.to_radians(),
                    $b: $b.to_radians(),
                }
            }

            /// Both angles in degrees.
            pub fn to_degrees(self) -> (f64, f64) {
                (self.$a.to_degrees(), self.$b.to_degrees())
            }
        }
    };
}

degree_constructors!(Equatorial, right_ascension, declination);
degree_constructors!(Ecliptic, longitude, latitude);
degree_constructors!(Horizontal, azimuth, altitude);
degree_constructors!(Galactic, longitude, latitude);
degree_constructors!(Geographic, longitude, latitude);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_roundtrip() {
        let eq = Equatorial::from_degrees(116.328942, 28.026183);
        let (a, d) = eq.to_degrees();
        assert!((a - 116.328942).abs() < 1e-12);
        assert!((d - 28.026183).abs() < 1e-12);
        assert_eq!(Ecliptic::new(1.0, 0.5).latitude, 0.5);
    }
}
