//! Mean orbital elements of the major planets as cubic polynomials in
//! Julian centuries (Meeus ch.31, tables 31.A and 31.B).

use eph_time::{ARCSEC_TO_RAD, jd_to_centuries, normalize_degrees, normalize_radians};

use crate::error::SeriesError;
use crate::state::Body;

/// Reference frame for the angular elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equinox {
    /// Mean equinox of date (table 31.A).
    OfDate,
    /// Standard equinox J2000.0 (table 31.B).
    J2000,
}

/// Cubic coefficients `[a0, a1, a2, a3]` per element. Angles in degrees,
/// semimajor axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPolynomials {
    pub mean_longitude: [f64; 4],
    pub semimajor_axis: [f64; 4],
    pub eccentricity: [f64; 4],
    pub inclination: [f64; 4],
    pub ascending_node: [f64; 4],
    pub perihelion: [f64; 4],
}

/// Mean elements at one instant. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub body: Body,
    pub jd: f64,
    /// Mean longitude L.
    pub mean_longitude: f64,
    /// Semimajor axis in AU.
    pub semimajor_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    /// Longitude of the ascending node Ω.
    pub ascending_node: f64,
    /// Longitude of the perihelion ϖ.
    pub perihelion: f64,
}

impl OrbitalElements {
    /// M = L − ϖ, in `[0, 2π)`.
    pub fn mean_anomaly(&self) -> f64 {
        eph_time::normalize_radians(self.mean_longitude - self.perihelion)
    }

    /// ω = ϖ − Ω, in `[0, 2π)`.
    pub fn argument_of_perihelion(&self) -> f64 {
        eph_time::normalize_radians(self.perihelion - self.ascending_node)
    }
}

#[rustfmt::skip]
static OF_DATE: [PlanetPolynomials; 8] = [
    // Mercury
    PlanetPolynomials {
        mean_longitude: [252.250906, 149474.0722491, 0.00030350, 0.000000018],
        semimajor_axis: [0.387098310, 0.0, 0.0, 0.0],
        eccentricity: [0.20563175, 0.000020407, -0.0000000283, -0.00000000018],
        inclination: [7.004986, 0.0018215, -0.00001810, 0.000000056],
        ascending_node: [48.330893, 1.1861883, 0.00017542, 0.000000215],
        perihelion: [77.456119, 1.5564776, 0.00029544, 0.000000009],
    },
    // Venus
    PlanetPolynomials {
        mean_longitude: [181.979801, 58519.2130302, 0.00031014, 0.000000015],
        semimajor_axis: [0.723329820, 0.0, 0.0, 0.0],
        eccentricity: [0.00677192, -0.000047765, 0.0000000981, 0.00000000046],
        inclination: [3.394662, 0.0010037, -0.00000088, -0.000000007],
        ascending_node: [76.679920, 0.9011206, 0.00040618, -0.000000093],
        perihelion: [131.563703, 1.4022288, -0.00107618, -0.000005678],
    },
    // Earth
    PlanetPolynomials {
        mean_longitude: [100.466457, 36000.7698278, 0.00030322, 0.000000020],
        semimajor_axis: [1.000001018, 0.0, 0.0, 0.0],
        eccentricity: [0.01670863, -0.000042037, -0.0000001267, 0.00000000014],
        inclination: [0.0, 0.0, 0.0, 0.0],
        ascending_node: [0.0, 0.0, 0.0, 0.0],
        perihelion: [102.937348, 1.7195366, 0.00045688, -0.000000018],
    },
    // Mars
    PlanetPolynomials {
        mean_longitude: [355.433000, 19141.6964471, 0.00031052, 0.000000016],
        semimajor_axis: [1.523679342, 0.0, 0.0, 0.0],
        eccentricity: [0.09340065, 0.000090484, -0.0000000806, -0.00000000025],
        inclination: [1.849726, -0.0006011, 0.00001276, -0.000000007],
        ascending_node: [49.558093, 0.7720959, 0.00001557, 0.000002267],
        perihelion: [336.060234, 1.8410449, 0.00013477, 0.000000536],
    },
    // Jupiter
    PlanetPolynomials {
        mean_longitude: [34.351519, 3036.3027748, 0.00022330, 0.000000037],
        semimajor_axis: [5.202603209, 0.0000001913, 0.0, 0.0],
        eccentricity: [0.04849793, 0.000163225, -0.0000004714, -0.00000000201],
        inclination: [1.303267, -0.0054965, 0.00000466, -0.000000002],
        ascending_node: [100.464407, 1.0209774, 0.00040315, 0.000000404],
        perihelion: [14.331207, 1.6126352, 0.00103042, -0.000004464],
    },
    // Saturn
    PlanetPolynomials {
        mean_longitude: [50.077444, 1223.5110686, 0.00051908, -0.000000030],
        semimajor_axis: [9.554909192, -0.0000021390, 0.000000004, 0.0],
        eccentricity: [0.05554814, -0.000346641, -0.0000006436, 0.00000000340],
        inclination: [2.488879, -0.0037362, -0.00001519, 0.000000087],
        ascending_node: [113.665503, 0.8770880, -0.00012176, -0.000002249],
        perihelion: [93.057237, 1.9637613, 0.00083753, 0.000004928],
    },
    // Uranus
    PlanetPolynomials {
        mean_longitude: [314.055005, 439.8640561, 0.00030390, 0.000000026],
        semimajor_axis: [19.218446062, -0.0000000372, 0.00000000098, 0.0],
        eccentricity: [0.04638122, -0.000027293, 0.0000000789, 0.00000000024],
        inclination: [0.773197, 0.0007744, 0.00003749, -0.000000092],
        ascending_node: [74.005957, 0.5211278, 0.00133947, 0.000018484],
        perihelion: [173.005291, 1.4863790, 0.00021406, 0.000000434],
    },
    // Neptune
    PlanetPolynomials {
        mean_longitude: [304.348665, 219.8833092, 0.00030882, 0.000000018],
        semimajor_axis: [30.110386869, -0.0000001663, 0.00000000069, 0.0],
        eccentricity: [0.00945575, 0.000006033, 0.0000000000, -0.00000000005],
        inclination: [1.769953, -0.0093082, -0.00000708, 0.000000027],
        ascending_node: [131.784057, 1.1022039, 0.00025952, -0.000000637],
        perihelion: [48.120276, 1.4262957, 0.00038434, 0.000000020],
    },
];

#[rustfmt::skip]
static J2000: [PlanetPolynomials; 8] = [
    // Mercury
    PlanetPolynomials {
        mean_longitude: [252.250906, 149472.6746358, -0.00000536, 0.000000002],
        semimajor_axis: [0.387098310, 0.0, 0.0, 0.0],
        eccentricity: [0.20563175, 0.000020407, -0.0000000283, -0.00000000018],
        inclination: [7.004986, -0.0059516, 0.00000080, 0.000000043],
        ascending_node: [48.330893, -0.1254227, -0.00008833, -0.000000200],
        perihelion: [77.456119, 0.1588643, -0.00001342, -0.000000007],
    },
    // Venus
    PlanetPolynomials {
        mean_longitude: [181.979801, 58517.8156760, 0.00000165, -0.000000002],
        semimajor_axis: [0.723329820, 0.0, 0.0, 0.0],
        eccentricity: [0.00677192, -0.000047765, 0.0000000981, 0.00000000046],
        inclination: [3.394662, -0.0008568, -0.00003244, 0.000000009],
        ascending_node: [76.679920, -0.2780134, -0.00014257, -0.000000164],
        perihelion: [131.563703, 0.0048746, -0.00138467, -0.000005695],
    },
    // Earth
    PlanetPolynomials {
        mean_longitude: [100.466457, 35999.3728565, -0.00000568, -0.000000001],
        semimajor_axis: [1.000001018, 0.0, 0.0, 0.0],
        eccentricity: [0.01670863, -0.000042037, -0.0000001267, 0.00000000014],
        inclination: [0.0, 0.0130548, -0.00000931, -0.000000034],
        ascending_node: [174.873176, -0.2410908, 0.00004262, 0.000000001],
        perihelion: [102.937348, 0.3225654, 0.00014799, -0.000000039],
    },
    // Mars
    PlanetPolynomials {
        mean_longitude: [355.433000, 19140.2993039, 0.00000262, -0.000000003],
        semimajor_axis: [1.523679342, 0.0, 0.0, 0.0],
        eccentricity: [0.09340065, 0.000090484, -0.0000000806, -0.00000000025],
        inclination: [1.849726, -0.0081477, -0.00002255, -0.000000029],
        ascending_node: [49.558093, -0.2950250, -0.00064048, -0.000001964],
        perihelion: [336.060234, 0.4439016, -0.00017313, 0.000000518],
    },
    // Jupiter
    PlanetPolynomials {
        mean_longitude: [34.351519, 3034.9056606, -0.00008501, 0.000000016],
        semimajor_axis: [5.202603209, 0.0000001913, 0.0, 0.0],
        eccentricity: [0.04849793, 0.000163225, -0.0000004714, -0.00000000201],
        inclination: [1.303267, -0.0019877, 0.00003320, 0.000000097],
        ascending_node: [100.464407, 0.1767232, 0.00090700, -0.000007272],
        perihelion: [14.331207, 0.2155209, 0.00072211, -0.000004485],
    },
    // Saturn
    PlanetPolynomials {
        mean_longitude: [50.077444, 1222.1138488, 0.00021004, -0.000000046],
        semimajor_axis: [9.554909192, -0.0000021390, 0.000000004, 0.0],
        eccentricity: [0.05554814, -0.000346641, -0.0000006436, 0.00000000340],
        inclination: [2.488879, 0.0025514, -0.00004906, 0.000000017],
        ascending_node: [113.665503, -0.2566722, -0.00018399, 0.000000480],
        perihelion: [93.057237, 0.5665415, 0.00052850, 0.000004912],
    },
    // Uranus
    PlanetPolynomials {
        mean_longitude: [314.055005, 428.4669983, -0.00000486, 0.000000006],
        semimajor_axis: [19.218446062, -0.0000000372, 0.00000000098, 0.0],
        eccentricity: [0.04638122, -0.000027293, 0.0000000789, 0.00000000024],
        inclination: [0.773197, -0.0016869, 0.00000349, 0.000000016],
        ascending_node: [74.005957, 0.0741431, 0.00040539, 0.000000119],
        perihelion: [173.005291, 0.0893212, -0.00009470, 0.000000414],
    },
    // Neptune
    PlanetPolynomials {
        mean_longitude: [304.348665, 218.4862002, 0.00000059, -0.000000002],
        semimajor_axis: [30.110386869, -0.0000001663, 0.00000000069, 0.0],
        eccentricity: [0.00945575, 0.000006033, 0.0000000000, -0.00000000005],
        inclination: [1.769953, 0.0002256, 0.00000023, -0.000000000],
        ascending_node: [131.784057, -0.0061651, -0.00000219, -0.000000078],
        perihelion: [48.120276, 0.0291866, 0.00007610, 0.000000000],
    },
];

fn planet_index(body: Body) -> Option<usize> {
    match body {
        Body::Mercury => Some(0),
        Body::Venus => Some(1),
        Body::Earth => Some(2),
        Body::Mars => Some(3),
        Body::Jupiter => Some(4),
        Body::Saturn => Some(5),
        Body::Uranus => Some(6),
        Body::Neptune => Some(7),
        Body::Sun | Body::Moon | Body::Pluto => None,
    }
}

fn cubic(c: &[f64; 4], t: f64) -> f64 {
    c[0] + t * (c[1] + t * (c[2] + t * c[3]))
}

/// Coefficient table for a planet, if it has one.
pub fn polynomials(body: Body, equinox: Equinox) -> Option<&'static PlanetPolynomials> {
    let table = match equinox {
        Equinox::OfDate => &OF_DATE,
        Equinox::J2000 => &J2000,
    };
    planet_index(body).map(|i| &table[i])
}

/// Mean orbital elements of `body` at `jd`.
pub fn orbital_elements(
    body: Body,
    jd: f64,
    equinox: Equinox,
) -> Result<OrbitalElements, SeriesError> {
    let p = polynomials(body, equinox).ok_or(SeriesError::UnsupportedBody {
        body,
        theory: "the mean-element tables",
    })?;
    let t = jd_to_centuries(jd);
    let angle = |c: &[f64; 4]| normalize_degrees(cubic(c, t)).to_radians();

    Ok(OrbitalElements {
        body,
        jd,
        mean_longitude: angle(&p.mean_longitude),
        semimajor_axis: cubic(&p.semimajor_axis, t),
        eccentricity: cubic(&p.eccentricity, t),
        inclination: cubic(&p.inclination, t).to_radians(),
        ascending_node: angle(&p.ascending_node),
        perihelion: angle(&p.perihelion),
    })
}

/// Geometric mean longitude of the Sun, mean equinox of date, in radians
/// `[0, 2π)`. Coefficients in arcseconds: 280°27′59.245″ +
/// 129 602 771.380″·T + 1.0915″·T².
pub fn sun_mean_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let arcsec = 1_009_679.245 + t * (129_602_771.380 + t * 1.0915);
    normalize_radians(arcsec * ARCSEC_TO_RAD)
}

/// Eccentricity of Uranus' orbit from the quadratic form of table 31.A.
///
/// Returns `None` more than 30 centuries from J2000, where the quadratic
/// is no longer meaningful.
pub fn uranus_eccentricity(jd: f64) -> Option<f64> {
    let t = jd_to_centuries(jd);
    if t.abs() > 30.0 {
        return None;
    }
    Some(0.046_381_22 - 0.000_027_293 * t + 0.000_000_078_9 * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mercury_meeus_31a() {
        let el = orbital_elements(Body::Mercury, 2_475_460.5, Equinox::OfDate).unwrap();
        assert_abs_diff_eq!(el.mean_longitude.to_degrees(), 203.494_701_4, epsilon = 1e-6);
        assert_abs_diff_eq!(el.semimajor_axis, 0.387_098_310, epsilon = 1e-12);
        assert_abs_diff_eq!(el.eccentricity, 0.205_645_1, epsilon = 1e-7);
        assert_abs_diff_eq!(el.inclination.to_degrees(), 7.006_170_9, epsilon = 1e-6);
        assert_abs_diff_eq!(el.ascending_node.to_degrees(), 49.107_649_6, epsilon = 1e-6);
        assert_abs_diff_eq!(el.perihelion.to_degrees(), 78.475_381_6, epsilon = 1e-6);
    }

    #[test]
    fn derived_angles() {
        let el = orbital_elements(Body::Mercury, 2_475_460.5, Equinox::OfDate).unwrap();
        assert_abs_diff_eq!(
            el.mean_anomaly().to_degrees(),
            203.494_701_4 - 78.475_381_6,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            el.argument_of_perihelion().to_degrees(),
            78.475_381_6 - 49.107_649_6,
            epsilon = 1e-5
        );
    }

    #[test]
    fn frames_agree_at_j2000() {
        for body in [Body::Venus, Body::Mars, Body::Jupiter, Body::Neptune] {
            let a = orbital_elements(body, eph_time::J2000_JD, Equinox::OfDate).unwrap();
            let b = orbital_elements(body, eph_time::J2000_JD, Equinox::J2000).unwrap();
            assert_abs_diff_eq!(a.mean_longitude, b.mean_longitude, epsilon = 1e-8);
            assert_abs_diff_eq!(a.eccentricity, b.eccentricity, epsilon = 1e-12);
            assert_abs_diff_eq!(a.inclination, b.inclination, epsilon = 1e-8);
        }
    }

    #[test]
    fn moon_and_pluto_have_no_elements() {
        for body in [Body::Moon, Body::Pluto, Body::Sun] {
            assert!(matches!(
                orbital_elements(body, eph_time::J2000_JD, Equinox::J2000),
                Err(SeriesError::UnsupportedBody { .. })
            ));
        }
    }

    #[test]
    fn sun_opposes_earth_mean_longitude() {
        for jd in [eph_time::J2000_JD, 2_448_908.5, 2_488_069.5, 2_415_020.0] {
            let earth = orbital_elements(Body::Earth, jd, Equinox::OfDate).unwrap();
            let diff = normalize_radians(sun_mean_longitude(jd) - earth.mean_longitude);
            assert_abs_diff_eq!(diff, std::f64::consts::PI, epsilon = 1e-7);
        }
    }

    #[test]
    fn sun_mean_longitude_at_j2000() {
        assert_abs_diff_eq!(
            sun_mean_longitude(eph_time::J2000_JD).to_degrees(),
            280.466_457,
            epsilon = 1e-6
        );
    }

    #[test]
    fn uranus_eccentricity_tracks_table() {
        let jd = 2_470_000.5;
        let el = orbital_elements(Body::Uranus, jd, Equinox::OfDate).unwrap();
        let e = uranus_eccentricity(jd).unwrap();
        assert_abs_diff_eq!(e, el.eccentricity, epsilon = 1e-9);
        assert_eq!(uranus_eccentricity(eph_time::J2000_JD), Some(0.046_381_22));
    }

    #[test]
    fn uranus_eccentricity_limited_to_thirty_centuries() {
        let century = eph_time::DAYS_PER_CENTURY;
        assert!(uranus_eccentricity(eph_time::J2000_JD + 29.9 * century).is_some());
        assert!(uranus_eccentricity(eph_time::J2000_JD + 30.1 * century).is_none());
        assert!(uranus_eccentricity(eph_time::J2000_JD - 30.1 * century).is_none());
    }
}
