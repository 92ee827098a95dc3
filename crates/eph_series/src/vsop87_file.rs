//! Parser for the official VSOP87 ASCII distribution files
//! (`VSOP87A.ear`, `VSOP87E.sun`, ...).
//!
//! A file is a sequence of blocks. Each block starts with a header such as
//!
//! ```text
//!  VSOP87 VERSION E2    EARTH     VARIABLE 1 (XYZ)       *T**0    843 TERMS ...
//! ```
//!
//! followed by `843` term lines whose last three columns are `A B C` of
//! `A·cos(B + C·t)`.

use crate::error::SeriesError;
use crate::evaluator::CosineTerm;
use crate::state::Body;

/// VSOP87 solution variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vsop87Version {
    /// Heliocentric rectangular, ecliptic and equinox J2000.
    A,
    /// Heliocentric spherical, ecliptic and equinox J2000.
    B,
    /// Heliocentric rectangular, ecliptic and equinox of date.
    C,
    /// Heliocentric spherical, ecliptic and equinox of date.
    D,
    /// Barycentric rectangular, ecliptic and equinox J2000.
    E,
}

impl Vsop87Version {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Versions B and D give L, B, R instead of X, Y, Z.
    pub const fn is_spherical(self) -> bool {
        matches!(self, Self::B | Self::D)
    }
}

/// File extension used by the distribution for a body.
pub const fn file_extension(body: Body) -> Option<&'static str> {
    match body {
        Body::Sun => Some("sun"),
        Body::Mercury => Some("mer"),
        Body::Venus => Some("ven"),
        Body::Earth => Some("ear"),
        Body::Mars => Some("mar"),
        Body::Jupiter => Some("jup"),
        Body::Saturn => Some("sat"),
        Body::Uranus => Some("ura"),
        Body::Neptune => Some("nep"),
        Body::Moon | Body::Pluto => None,
    }
}

/// Series of one file: `series[variable][power]`.
pub type SeriesTable = [[Vec<CosineTerm>; 6]; 3];

/// Parsed contents of a VSOP87 file.
#[derive(Debug, Clone)]
pub struct Vsop87File {
    pub version: Vsop87Version,
    pub body: Body,
    pub series: SeriesTable,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Header {
    version: Vsop87Version,
    body: Body,
    variable: usize,
    power: usize,
    count: usize,
}

fn parse_err(line: usize, msg: impl Into<String>) -> SeriesError {
    SeriesError::Parse {
        line,
        msg: msg.into(),
    }
}

fn body_from_header_name(name: &str, line: usize) -> Result<Body, SeriesError> {
    match name {
        "EMB" => Err(parse_err(line, "Earth-Moon barycentre series are not supported")),
        other => other
            .parse::<Body>()
            .map_err(|_| parse_err(line, format!("unknown body {other:?}"))),
    }
}

fn parse_header(text: &str, line: usize) -> Result<Header, SeriesError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let after = |key: &str| -> Option<&str> {
        tokens
            .iter()
            .position(|t| *t == key)
            .and_then(|i| tokens.get(i + 1).copied())
    };

    let version_token = after("VERSION").ok_or_else(|| parse_err(line, "missing VERSION"))?;
    let version = version_token
        .chars()
        .next()
        .and_then(Vsop87Version::from_letter)
        .ok_or_else(|| parse_err(line, format!("unsupported version {version_token:?}")))?;

    let body_name = after(version_token).ok_or_else(|| parse_err(line, "missing body name"))?;
    let body = body_from_header_name(body_name, line)?;

    let variable: usize = after("VARIABLE")
        .and_then(|v| v.parse().ok())
        .filter(|v| (1..=3).contains(v))
        .ok_or_else(|| parse_err(line, "bad VARIABLE field"))?;

    let power_pos = tokens
        .iter()
        .position(|t| t.starts_with("*T**"))
        .ok_or_else(|| parse_err(line, "missing *T** field"))?;
    let power: usize = tokens[power_pos]["*T**".len()..]
        .parse()
        .ok()
        .filter(|p| *p < 6)
        .ok_or_else(|| parse_err(line, "bad power of T"))?;

    let count: usize = tokens
        .get(power_pos + 1)
        .and_then(|c| c.parse().ok())
        .ok_or_else(|| parse_err(line, "bad term count"))?;

    Ok(Header {
        version,
        body,
        variable: variable - 1,
        power,
        count,
    })
}

fn parse_term(text: &str, line: usize) -> Result<CosineTerm, SeriesError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(parse_err(line, "term line has fewer than 3 columns"));
    }
    let num = |s: &str| {
        s.parse::<f64>()
            .map_err(|e| parse_err(line, format!("bad number {s:?}: {e}")))
    };
    let n = tokens.len();
    Ok(CosineTerm {
        amplitude: num(tokens[n - 3])?,
        phase: num(tokens[n - 2])?,
        frequency: num(tokens[n - 1])?,
    })
}

/// Parse the text of one VSOP87 file.
pub fn parse_vsop87(content: &str) -> Result<Vsop87File, SeriesError> {
    let mut series: SeriesTable = Default::default();
    let mut identity: Option<(Vsop87Version, Body)> = None;
    let mut current: Option<(Header, usize)> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        if raw.trim_start().starts_with("VSOP87") {
            if let Some((h, seen)) = current {
                if seen != h.count {
                    return Err(parse_err(
                        line,
                        format!("previous block declared {} terms, found {seen}", h.count),
                    ));
                }
            }
            let header = parse_header(raw, line)?;
            match identity {
                None => identity = Some((header.version, header.body)),
                Some(id) if id != (header.version, header.body) => {
                    return Err(parse_err(line, "file mixes bodies or versions"));
                }
                Some(_) => {}
            }
            series[header.variable][header.power].reserve(header.count);
            current = Some((header, 0));
            continue;
        }

        let (header, seen) = current
            .as_mut()
            .ok_or_else(|| parse_err(line, "term line before first header"))?;
        if *seen == header.count {
            return Err(parse_err(line, "more terms than declared"));
        }
        series[header.variable][header.power].push(parse_term(raw, line)?);
        *seen += 1;
    }

    if let Some((h, seen)) = current {
        if seen != h.count {
            return Err(parse_err(
                content.lines().count(),
                format!("last block declared {} terms, found {seen}", h.count),
            ));
        }
    }

    let (version, body) = identity.ok_or_else(|| parse_err(0, "no VSOP87 headers found"))?;
    Ok(Vsop87File {
        version,
        body,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
 VSOP87 VERSION E2    EARTH     VARIABLE 1 (XYZ)       *T**0      2 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 3310    1  0  0  0  0  0  0  0  0  0  0  0  0  0    0.99982928844 1.75348568475   6283.07584999140
 3310    2  0  0  0  0  0  0  0  0  0  0  0  0  0    0.00835257300 1.71034539450  12566.15169998280
 VSOP87 VERSION E2    EARTH     VARIABLE 2 (XYZ)       *T**1      1 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 3321    1  0  0  0  0  0  0  0  0  0  0  0  0  0    0.00123456789 0.5   0.0
";

    #[test]
    fn parses_blocks() {
        let f = parse_vsop87(SAMPLE).unwrap();
        assert_eq!(f.version, Vsop87Version::E);
        assert_eq!(f.body, Body::Earth);
        assert_eq!(f.series[0][0].len(), 2);
        assert_eq!(f.series[1][1].len(), 1);
        assert_eq!(f.series[2][0].len(), 0);
        assert_eq!(f.series[0][0][1].frequency, 12566.15169998280);
        assert_eq!(f.series[1][1][0].phase, 0.5);
    }

    #[test]
    fn term_count_mismatch_is_error() {
        let truncated: String = SAMPLE.lines().take(2).map(|l| format!("{l}\n")).collect();
        let err = parse_vsop87(&truncated).unwrap_err();
        assert!(matches!(err, SeriesError::Parse { .. }), "{err}");
    }

    #[test]
    fn rejects_emb_and_garbage() {
        let emb = SAMPLE.replace("EARTH  ", "EMB    ");
        assert!(parse_vsop87(&emb).is_err());
        assert!(parse_vsop87("hello\n").is_err());
        assert!(parse_vsop87("").is_err());
    }

    #[test]
    fn spherical_versions() {
        assert!(Vsop87Version::B.is_spherical());
        assert!(Vsop87Version::D.is_spherical());
        assert!(!Vsop87Version::E.is_spherical());
        assert_eq!(Vsop87Version::from_letter('c'), Some(Vsop87Version::C));
        assert_eq!(Vsop87Version::from_letter('0'), None);
    }
}
