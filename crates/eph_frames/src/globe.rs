//! The Earth's globe: reference ellipsoid quantities and distances
//! between observers (Meeus ch.11, IAU 1976 ellipsoid).

use crate::coords::Geographic;

/// Equatorial radius a, km.
pub const EQUATORIAL_RADIUS_KM: f64 = 6378.14;
/// Polar radius b, km.
pub const POLAR_RADIUS_KM: f64 = 6356.755;
/// Flattening f = (a − b) / a.
pub const FLATTENING: f64 = 1.0 / 298.257;
/// Meridian eccentricity e.
pub const ECCENTRICITY: f64 = 0.081_819_22;
/// Mean radius used by the spherical distance approximation, km.
pub const MEAN_RADIUS_KM: f64 = 6371.0;

const B_OVER_A: f64 = POLAR_RADIUS_KM / EQUATORIAL_RADIUS_KM;

/// `(ρ·sin φ′, ρ·cos φ′)` for an observer at geographic latitude `lat`
/// and `height_m` metres above sea level. ρ is in units of the
/// equatorial radius.
pub fn rho_sin_cos_phi_prime(height_m: f64, lat: f64) -> (f64, f64) {
    let u = (B_OVER_A * lat.sin()).atan2(lat.cos());
    let h = height_m / (EQUATORIAL_RADIUS_KM * 1000.0);
    (B_OVER_A * u.sin() + h * lat.sin(), u.cos() + h * lat.cos())
}

/// Geographic (geodetic) latitude φ to geocentric latitude φ′.
pub fn geographic_to_geocentric_latitude(lat: f64) -> f64 {
    (B_OVER_A * B_OVER_A * lat.sin()).atan2(lat.cos())
}

/// Geocentric latitude φ′ to geographic latitude φ.
pub fn geocentric_to_geographic_latitude(lat: f64) -> f64 {
    lat.sin().atan2(B_OVER_A * B_OVER_A * lat.cos())
}

/// Radius of the parallel of latitude `lat`, km.
pub fn parallel_of_latitude_radius(lat: f64) -> f64 {
    let s = lat.sin();
    EQUATORIAL_RADIUS_KM * lat.cos() / (1.0 - ECCENTRICITY * ECCENTRICITY * s * s).sqrt()
}

/// Radius of curvature of the meridian at latitude `lat`, km.
pub fn meridian_curvature_radius(lat: f64) -> f64 {
    let e2 = ECCENTRICITY * ECCENTRICITY;
    let s = lat.sin();
    EQUATORIAL_RADIUS_KM * (1.0 - e2) / (1.0 - e2 * s * s).powf(1.5)
}

/// Distance along the ellipsoid between two observers, km (Andoyer's
/// method, error of the order of the flattening squared).
pub fn geodesic_distance(p1: &Geographic, p2: &Geographic) -> f64 {
    let f = (p1.latitude + p2.latitude) / 2.0;
    let g = (p1.latitude - p2.latitude) / 2.0;
    let lambda = (p1.longitude - p2.longitude) / 2.0;

    let (sg, cg) = g.sin_cos();
    let (sf, cf) = f.sin_cos();
    let (sl, cl) = lambda.sin_cos();

    let s = sg * sg * cl * cl + cf * cf * sl * sl;
    let c = cg * cg * cl * cl + sf * sf * sl * sl;
    if s == 0.0 {
        return 0.0;
    }
    let omega = (s / c).sqrt().atan();
    let r = (s * c).sqrt() / omega;
    let d = 2.0 * omega * EQUATORIAL_RADIUS_KM;
    let h1 = (3.0 * r - 1.0) / (2.0 * c);
    let h2 = (3.0 * r + 1.0) / (2.0 * s);

    d * (1.0 + FLATTENING * h1 * sf * sf * cg * cg - FLATTENING * h2 * cf * cf * sg * sg)
}

/// Great-circle distance on a sphere of radius [`MEAN_RADIUS_KM`], km.
pub fn geodesic_distance_fast(p1: &Geographic, p2: &Geographic) -> f64 {
    let (s1, c1) = p1.latitude.sin_cos();
    let (s2, c2) = p2.latitude.sin_cos();
    let (sdl, cdl) = (p2.longitude - p1.longitude).sin_cos();
    let x = c1 * s2 - s1 * c2 * cdl;
    let y = c2 * sdl;
    let z = s1 * s2 + c1 * c2 * cdl;
    MEAN_RADIUS_KM * x.hypot(y).atan2(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use eph_time::AngleOfArc;

    fn dms(d: i32, m: u32, s: f64) -> f64 {
        AngleOfArc::new(d, m, s).unwrap().to_radians()
    }

    #[test]
    fn meeus_11a_palomar() {
        let (rs, rc) = rho_sin_cos_phi_prime(1706.0, dms(33, 21, 22.0));
        assert_abs_diff_eq!(rs, 0.546_861, epsilon = 1e-6);
        assert_abs_diff_eq!(rc, 0.836_339, epsilon = 1e-6);
    }

    #[test]
    fn meeus_11b_radii_at_42_north() {
        let lat = 42f64.to_radians();
        assert_abs_diff_eq!(parallel_of_latitude_radius(lat), 4747.001, epsilon = 1e-3);
        assert_abs_diff_eq!(meridian_curvature_radius(lat), 6364.033, epsilon = 1e-3);
        assert_abs_diff_eq!(parallel_of_latitude_radius(0.0), EQUATORIAL_RADIUS_KM, epsilon = 1e-9);
    }

    #[test]
    fn meeus_11c_paris_washington() {
        let paris = Geographic::new(dms(-2, 20, 14.0), dms(48, 50, 11.0));
        let washington = Geographic::new(dms(77, 3, 56.0), dms(38, 55, 17.0));
        assert_abs_diff_eq!(geodesic_distance(&paris, &washington), 6181.63, epsilon = 0.01);
        assert_abs_diff_eq!(geodesic_distance_fast(&paris, &washington), 6165.6, epsilon = 0.1);
        assert_eq!(geodesic_distance(&paris, &paris), 0.0);
    }

    #[test]
    fn latitude_reduction() {
        let lat = 45f64.to_radians();
        let diff_arcsec = (lat - geographic_to_geocentric_latitude(lat)).to_degrees() * 3600.0;
        assert_abs_diff_eq!(diff_arcsec, 692.73, epsilon = 0.1);
        let back = geocentric_to_geographic_latitude(geographic_to_geocentric_latitude(lat));
        assert_abs_diff_eq!(back, lat, epsilon = 1e-14);
        assert_eq!(geographic_to_geocentric_latitude(0.0), 0.0);
    }
}
