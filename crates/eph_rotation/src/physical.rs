//! Physical and mean orbital data of the major natural satellites.
//!
//! Masses in kg, lengths in km, periods in days, inclinations in degrees
//! to the primary's Laplace plane. Satellites of Pluto orbit the
//! Pluto–Charon barycentre; Charon's semimajor axis is its separation
//! from Pluto. Masses of Pluto's small moons are loose upper estimates.

use std::f64::consts::PI;

use crate::body::IauBody::{self, Jupiter, Mars, Neptune, Pluto, Saturn, Uranus};
use crate::error::RotationError;

/// Figure of a satellite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { diameter_km: f64 },
    /// Full axis lengths, largest first.
    Triaxial { axes_km: [f64; 3] },
}

impl Shape {
    /// Radius of the sphere with the same volume.
    pub fn mean_radius_km(self) -> f64 {
        match self {
            Self::Sphere { diameter_km } => diameter_km / 2.0,
            Self::Triaxial { axes_km: [a, b, c] } => (a * b * c).cbrt() / 2.0,
        }
    }

    pub fn volume_km3(self) -> f64 {
        let r = self.mean_radius_km();
        4.0 / 3.0 * PI * r * r * r
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Satellite {
    pub name: &'static str,
    /// NAIF integer id.
    pub code: i32,
    pub primary: IauBody,
    pub shape: Shape,
    pub mass_kg: f64,
    pub semimajor_axis_km: f64,
    /// Sidereal period, always positive; see [`Satellite::is_retrograde`].
    pub orbital_period_days: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
}

impl Satellite {
    /// Rotational-elements entry, for satellites in the IAU catalog.
    pub fn iau_body(&self) -> Option<IauBody> {
        IauBody::from_code(self.code)
    }

    pub fn is_retrograde(&self) -> bool {
        self.inclination_deg > 90.0
    }

    /// Mean density in kg/m³.
    pub fn density(&self) -> f64 {
        self.mass_kg / (self.shape.volume_km3() * 1e9)
    }

    /// G·(M + m) in km³/s² implied by Kepler's third law.
    pub fn kepler_gm(&self) -> f64 {
        let a = self.semimajor_axis_km;
        let period_s = self.orbital_period_days * 86_400.0;
        4.0 * PI * PI * a * a * a / (period_s * period_s)
    }
}

const fn sphere(diameter_km: f64) -> Shape {
    Shape::Sphere { diameter_km }
}

const fn triaxial(a: f64, b: f64, c: f64) -> Shape {
    Shape::Triaxial { axes_km: [a, b, c] }
}

#[allow(clippy::too_many_arguments)]
const fn sat(
    name: &'static str,
    code: i32,
    primary: IauBody,
    shape: Shape,
    mass_kg: f64,
    semimajor_axis_km: f64,
    orbital_period_days: f64,
    eccentricity: f64,
    inclination_deg: f64,
) -> Satellite {
    Satellite {
        name,
        code,
        primary,
        shape,
        mass_kg,
        semimajor_axis_km,
        orbital_period_days,
        eccentricity,
        inclination_deg,
    }
}

/// Catalog ordered by NAIF id.
#[rustfmt::skip]
pub static SATELLITES: [Satellite; 25] = [
    sat("phobos",    401, Mars,    triaxial(27.0, 21.6, 18.8), 1.07e16,    9_376.0,     0.318_91,    0.0151,  1.093),
    sat("deimos",    402, Mars,    triaxial(16.0, 12.0, 10.0), 1.5e15,     23_463.2,    1.262_44,    0.000_33, 0.93),
    sat("io",        501, Jupiter, sphere(3_643.2),  8.9319e22,   421_800.0,   1.769_138,   0.0041,  0.050),
    sat("europa",    502, Jupiter, sphere(3_121.6),  4.7998e22,   671_100.0,   3.551_181,   0.0090,  0.470),
    sat("ganymede",  503, Jupiter, sphere(5_268.2),  1.4819e23,   1_070_400.0, 7.154_553,   0.0013,  0.200),
    sat("callisto",  504, Jupiter, sphere(4_820.6),  1.0759e23,   1_882_700.0, 16.689_018,  0.0074,  0.192),
    sat("mimas",     601, Saturn,  sphere(396.4),    3.7493e19,   185_404.0,   0.942_42,    0.0202,  1.566),
    sat("enceladus", 602, Saturn,  sphere(504.2),    1.08022e20,  237_950.0,   1.370_22,    0.0047,  0.010),
    sat("tethys",    603, Saturn,  sphere(1_062.2),  6.17449e20,  294_619.0,   1.887_80,    0.0001,  0.168),
    sat("dione",     604, Saturn,  sphere(1_122.8),  1.095452e21, 377_396.0,   2.736_92,    0.0022,  0.002),
    sat("rhea",      605, Saturn,  sphere(1_527.6),  2.306518e21, 527_108.0,   4.518_21,    0.0010,  0.327),
    sat("titan",     606, Saturn,  sphere(5_149.46), 1.3452e23,   1_221_930.0, 15.945_4,    0.0288,  0.349),
    sat("iapetus",   608, Saturn,  sphere(1_468.6),  1.805635e21, 3_560_820.0, 79.321_5,    0.0286,  15.47),
    sat("ariel",     701, Uranus,  sphere(1_157.8),  1.251e21,    190_900.0,   2.520_379,   0.0012,  0.260),
    sat("umbriel",   702, Uranus,  sphere(1_169.4),  1.275e21,    266_000.0,   4.144_177,   0.0039,  0.205),
    sat("titania",   703, Uranus,  sphere(1_576.8),  3.400e21,    436_300.0,   8.705_872,   0.0011,  0.340),
    sat("oberon",    704, Uranus,  sphere(1_522.8),  3.076e21,    583_500.0,   13.463_239,  0.0014,  0.058),
    sat("miranda",   705, Uranus,  sphere(471.6),    6.4e19,      129_900.0,   1.413_479,   0.0013,  4.232),
    sat("triton",    801, Neptune, sphere(2_705.2),  2.139e22,    354_759.0,   5.876_854,   0.000_016, 156.865),
    sat("nereid",    802, Neptune, sphere(357.0),    2.4e19,      5_513_400.0, 360.13,      0.7507,  5.8),
    sat("charon",    901, Pluto,   sphere(1_212.0),  1.587e21,    19_591.0,    6.387_23,    0.0002,  0.080),
    sat("nix",       902, Pluto,   triaxial(49.8, 33.2, 31.1), 5.0e16, 48_694.0, 24.854_63, 0.002_04, 0.133),
    sat("hydra",     903, Pluto,   triaxial(50.9, 36.1, 30.9), 5.0e16, 64_738.0, 38.201_77, 0.005_86, 0.242),
    sat("kerberos",  904, Pluto,   triaxial(19.0, 10.0, 9.0),  1.6e16, 57_783.0, 32.167_56, 0.003_28, 0.389),
    sat("styx",      905, Pluto,   triaxial(16.0, 9.0, 8.0),   7.5e15, 42_656.0, 20.161_55, 0.005_79, 0.81),
];

/// Satellites of one primary, innermost first.
pub fn satellites_of(primary: IauBody) -> Vec<&'static Satellite> {
    let mut found: Vec<_> = SATELLITES.iter().filter(|s| s.primary == primary).collect();
    found.sort_by(|a, b| a.semimajor_axis_km.total_cmp(&b.semimajor_axis_km));
    found
}

/// Look up a satellite by name (case-insensitive) or NAIF id.
pub fn satellite(key: &str) -> Result<&'static Satellite, RotationError> {
    let key = key.trim().to_ascii_lowercase();
    let code = key.parse::<i32>().ok();
    SATELLITES
        .iter()
        .find(|s| Some(s.code) == code || s.name == key)
        .ok_or(RotationError::UnknownBody(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sorted_by_code_and_unique() {
        assert!(SATELLITES.windows(2).all(|w| w[0].code < w[1].code));
        for s in &SATELLITES {
            assert_eq!(s.primary.code(), s.code / 100 * 100 + 99, "{}", s.name);
        }
    }

    #[test]
    fn kepler_gm_matches_primary() {
        // G·M of each system in km³/s²
        let systems = [
            (Mars, 42_828.37, 0.002),
            (Jupiter, 126_686_534.0, 0.002),
            (Saturn, 37_931_207.0, 0.002),
            (Uranus, 5_793_951.0, 0.002),
            (Neptune, 6_836_527.0, 0.002),
            // small moons circle the Pluto–Charon pair
            (Pluto, 975.5, 0.05),
        ];
        for (primary, gm, tolerance) in systems {
            for s in satellites_of(primary) {
                let rel = (s.kepler_gm() - gm) / gm;
                assert!(rel.abs() < tolerance, "{}: relative GM error {rel:.5}", s.name);
            }
        }
    }

    #[test]
    fn densities_are_physical() {
        // masses of the smallest moons are too uncertain to bound
        for s in SATELLITES.iter().filter(|s| s.mass_kg > 1e18) {
            let rho = s.density();
            assert!((400.0..4_000.0).contains(&rho), "{}: {rho} kg/m³", s.name);
        }
        assert_abs_diff_eq!(satellite("io").unwrap().density(), 3_528.0, epsilon = 5.0);
    }

    #[test]
    fn lookup_by_name_and_code() {
        assert_eq!(satellite("Titan").unwrap().code, 606);
        assert_eq!(satellite("802").unwrap().name, "nereid");
        assert!(matches!(satellite("vulcan"), Err(RotationError::UnknownBody(_))));
    }

    #[test]
    fn iau_links_and_retrograde() {
        assert_eq!(satellite("triton").unwrap().iau_body(), Some(IauBody::Triton));
        assert_eq!(satellite("nereid").unwrap().iau_body(), None);
        let retro: Vec<_> = SATELLITES.iter().filter(|s| s.is_retrograde()).map(|s| s.name).collect();
        assert_eq!(retro, ["triton"]);
    }

    #[test]
    fn galilean_moons_in_order() {
        let names: Vec<_> = satellites_of(Jupiter).iter().map(|s| s.name).collect();
        assert_eq!(names, ["io", "europa", "ganymede", "callisto"]);
    }

    #[test]
    fn triaxial_radius_is_volume_equivalent() {
        let phobos = satellite("phobos").unwrap();
        let r = phobos.shape.mean_radius_km();
        assert_abs_diff_eq!(r, (27.0f64 * 21.6 * 18.8).cbrt() / 2.0, epsilon = 1e-12);
        assert!(r > 9.0 && r < 13.5);
    }
}
