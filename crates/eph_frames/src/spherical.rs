//! Cartesian ↔ spherical conversion for body states.
//!
//! Angles are radians, longitude in `[0, 2π)`. Distances and rates keep
//! the units of the input (AU and AU/day for VSOP87 states).

use eph_series::{BodyState, StateUnits};
use eph_time::normalize_radians;

/// Longitude, latitude and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Measured in the x-y plane from +x toward +y.
    pub longitude: f64,
    /// Elevation above the x-y plane, `[-π/2, π/2]`.
    pub latitude: f64,
    pub distance: f64,
}

/// Spherical position plus rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalState {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub longitude_rate: f64,
    pub latitude_rate: f64,
    pub distance_rate: f64,
}

pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            longitude: 0.0,
            latitude: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        longitude: normalize_radians(y.atan2(x)),
        latitude: (z / r).asin(),
        distance: r,
    }
}

pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sl, cl) = s.longitude.sin_cos();
    let (sb, cb) = s.latitude.sin_cos();
    [
        s.distance * cb * cl,
        s.distance * cb * sl,
        s.distance * sb,
    ]
}

/// Position and velocity to spherical position and rates.
///
/// Degenerate cases (r ≈ 0 or on the z axis) set the angular rates to zero.
pub fn cartesian_state_to_spherical_state(pos: &[f64; 3], vel: &[f64; 3]) -> SphericalState {
    const TINY: f64 = 1e-30;
    let [x, y, z] = *pos;
    let [vx, vy, vz] = *vel;

    let r_sq = x * x + y * y + z * z;
    let r = r_sq.sqrt();
    if r < TINY {
        return SphericalState {
            longitude: 0.0,
            latitude: 0.0,
            distance: 0.0,
            longitude_rate: 0.0,
            latitude_rate: 0.0,
            distance_rate: 0.0,
        };
    }

    let rxy_sq = x * x + y * y;
    let (longitude_rate, latitude_rate) = if rxy_sq < TINY {
        (0.0, 0.0)
    } else {
        let rxy = rxy_sq.sqrt();
        (
            (x * vy - y * vx) / rxy_sq,
            (vz * rxy_sq - z * (x * vx + y * vy)) / (r_sq * rxy),
        )
    };

    SphericalState {
        longitude: normalize_radians(y.atan2(x)),
        latitude: (z / r).asin(),
        distance: r,
        longitude_rate,
        latitude_rate,
        distance_rate: (x * vx + y * vy + z * vz) / r,
    }
}

/// Express a body state as spherical coordinates with rates.
///
/// Rectangular states are converted; spherical states are returned as-is.
pub fn body_state_to_spherical(state: &BodyState) -> SphericalState {
    match state.units {
        StateUnits::Rectangular => cartesian_state_to_spherical_state(&state.position, &state.velocity),
        StateUnits::LunarSpherical | StateUnits::HeliocentricSpherical => SphericalState {
            longitude: state.position[0],
            latitude: state.position[1],
            distance: state.position[2],
            longitude_rate: state.velocity[0],
            latitude_rate: state.velocity[1],
            distance_rate: state.velocity[2],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eph_series::Body;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    #[test]
    fn axes() {
        let s = cartesian_to_spherical(&[0.0, 2.0, 0.0]);
        assert!((s.longitude - FRAC_PI_2).abs() < EPS);
        assert!((s.distance - 2.0).abs() < EPS);
        let s = cartesian_to_spherical(&[-1.0, 0.0, 0.0]);
        assert!((s.longitude - PI).abs() < EPS);
        let s = cartesian_to_spherical(&[0.0, 0.0, 1.0]);
        assert!((s.latitude - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn roundtrip() {
        let xyz = [-0.184_276_982_6, 0.964_453_453_0, 0.000_202_240_7];
        let back = spherical_to_cartesian(&cartesian_to_spherical(&xyz));
        for i in 0..3 {
            assert!((xyz[i] - back[i]).abs() < EPS, "axis {i}");
        }
    }

    #[test]
    fn zero_vector() {
        let s = cartesian_state_to_spherical_state(&[0.0; 3], &[0.0; 3]);
        assert_eq!(s.distance, 0.0);
        assert_eq!(s.longitude_rate, 0.0);
    }

    #[test]
    fn rates_for_circular_motion() {
        // Unit circle, moving +y at 0.01 per day: dλ/dt = 0.01 rad/day.
        let s = cartesian_state_to_spherical_state(&[1.0, 0.0, 0.0], &[0.0, 0.01, 0.0]);
        assert!((s.longitude_rate - 0.01).abs() < EPS);
        assert!(s.latitude_rate.abs() < EPS);
        assert!(s.distance_rate.abs() < EPS);

        let s = cartesian_state_to_spherical_state(&[1.0, 0.0, 0.0], &[0.0, 0.0, 0.01]);
        assert!((s.latitude_rate - 0.01).abs() < EPS);
    }

    #[test]
    fn body_state_dispatch() {
        let rect = BodyState {
            body: Body::Earth,
            jd: 2_451_545.0,
            position: [1.0, 0.0, 0.0],
            velocity: [0.0, 0.01, 0.0],
            units: StateUnits::Rectangular,
        };
        assert!((body_state_to_spherical(&rect).longitude_rate - 0.01).abs() < EPS);

        let sph = BodyState {
            units: StateUnits::HeliocentricSpherical,
            position: [1.0, 0.1, 30.0],
            ..rect
        };
        let s = body_state_to_spherical(&sph);
        assert_eq!((s.longitude, s.latitude, s.distance), (1.0, 0.1, 30.0));
    }
}
