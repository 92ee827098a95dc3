//! Bodies with published IAU rotational elements.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::RotationError;

/// Number of bodies in the rotation catalog.
pub const BODY_COUNT: usize = 73;

/// Planets, satellites, dwarf planets, asteroids and comets, in
/// alphabetical order of their lowercase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IauBody {
    Borrelly19P,
    Tempel1,
    Adrastea,
    Amalthea,
    Ariel,
    Atlas,
    Belinda,
    Bianca,
    Callisto,
    Calypso,
    Ceres,
    Charon,
    Cordelia,
    Cressida,
    Davida,
    Deimos,
    Desdemona,
    Despina,
    Dione,
    Earth,
    Enceladus,
    Epimetheus,
    Eros,
    Europa,
    Galatea,
    Ganymede,
    Gaspra,
    Helene,
    Iapetus,
    Ida,
    Io,
    Itokawa,
    Janus,
    Juliet,
    Jupiter,
    Larissa,
    Lutetia,
    Mars,
    Mercury,
    Metis,
    Mimas,
    Miranda,
    Moon,
    Naiad,
    Neptune,
    Oberon,
    Ophelia,
    Pallas,
    Pan,
    Pandora,
    Phobos,
    Phoebe,
    Pluto,
    Portia,
    Prometheus,
    Proteus,
    Puck,
    Rhea,
    Rosalind,
    Saturn,
    Steins,
    Sun,
    Telesto,
    Tethys,
    Thalassa,
    Thebe,
    Titan,
    Titania,
    Triton,
    Umbriel,
    Uranus,
    Venus,
    Vesta,
}

impl IauBody {
    pub const ALL: [IauBody; BODY_COUNT] = [
        Self::Borrelly19P,
        Self::Tempel1,
        Self::Adrastea,
        Self::Amalthea,
        Self::Ariel,
        Self::Atlas,
        Self::Belinda,
        Self::Bianca,
        Self::Callisto,
        Self::Calypso,
        Self::Ceres,
        Self::Charon,
        Self::Cordelia,
        Self::Cressida,
        Self::Davida,
        Self::Deimos,
        Self::Desdemona,
        Self::Despina,
        Self::Dione,
        Self::Earth,
        Self::Enceladus,
        Self::Epimetheus,
        Self::Eros,
        Self::Europa,
        Self::Galatea,
        Self::Ganymede,
        Self::Gaspra,
        Self::Helene,
        Self::Iapetus,
        Self::Ida,
        Self::Io,
        Self::Itokawa,
        Self::Janus,
        Self::Juliet,
        Self::Jupiter,
        Self::Larissa,
        Self::Lutetia,
        Self::Mars,
        Self::Mercury,
        Self::Metis,
        Self::Mimas,
        Self::Miranda,
        Self::Moon,
        Self::Naiad,
        Self::Neptune,
        Self::Oberon,
        Self::Ophelia,
        Self::Pallas,
        Self::Pan,
        Self::Pandora,
        Self::Phobos,
        Self::Phoebe,
        Self::Pluto,
        Self::Portia,
        Self::Prometheus,
        Self::Proteus,
        Self::Puck,
        Self::Rhea,
        Self::Rosalind,
        Self::Saturn,
        Self::Steins,
        Self::Sun,
        Self::Telesto,
        Self::Tethys,
        Self::Thalassa,
        Self::Thebe,
        Self::Titan,
        Self::Titania,
        Self::Triton,
        Self::Umbriel,
        Self::Uranus,
        Self::Venus,
        Self::Vesta,
    ];

    /// Position in [`IauBody::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// NAIF integer id.
    pub const fn code(self) -> i32 {
        match self {
            Self::Borrelly19P => 1000005,
            Self::Tempel1 => 1000093,
            Self::Adrastea => 515,
            Self::Amalthea => 505,
            Self::Ariel => 701,
            Self::Atlas => 615,
            Self::Belinda => 714,
            Self::Bianca => 708,
            Self::Callisto => 504,
            Self::Calypso => 614,
            Self::Ceres => 2000001,
            Self::Charon => 901,
            Self::Cordelia => 706,
            Self::Cressida => 709,
            Self::Davida => 2000511,
            Self::Deimos => 402,
            Self::Desdemona => 710,
            Self::Despina => 805,
            Self::Dione => 604,
            Self::Earth => 399,
            Self::Enceladus => 602,
            Self::Epimetheus => 611,
            Self::Eros => 2000433,
            Self::Europa => 502,
            Self::Galatea => 806,
            Self::Ganymede => 503,
            Self::Gaspra => 9511010,
            Self::Helene => 612,
            Self::Iapetus => 608,
            Self::Ida => 2431010,
            Self::Io => 501,
            Self::Itokawa => 2025143,
            Self::Janus => 610,
            Self::Juliet => 711,
            Self::Jupiter => 599,
            Self::Larissa => 807,
            Self::Lutetia => 2000021,
            Self::Mars => 499,
            Self::Mercury => 199,
            Self::Metis => 516,
            Self::Mimas => 601,
            Self::Miranda => 705,
            Self::Moon => 301,
            Self::Naiad => 803,
            Self::Neptune => 899,
            Self::Oberon => 704,
            Self::Ophelia => 707,
            Self::Pallas => 2000002,
            Self::Pan => 618,
            Self::Pandora => 617,
            Self::Phobos => 401,
            Self::Phoebe => 609,
            Self::Pluto => 999,
            Self::Portia => 712,
            Self::Prometheus => 616,
            Self::Proteus => 808,
            Self::Puck => 715,
            Self::Rhea => 605,
            Self::Rosalind => 713,
            Self::Saturn => 699,
            Self::Steins => 2002867,
            Self::Sun => 10,
            Self::Telesto => 613,
            Self::Tethys => 603,
            Self::Thalassa => 804,
            Self::Thebe => 514,
            Self::Titan => 606,
            Self::Titania => 703,
            Self::Triton => 801,
            Self::Umbriel => 702,
            Self::Uranus => 799,
            Self::Venus => 299,
            Self::Vesta => 2000004,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1000005 => Some(Self::Borrelly19P),
            1000093 => Some(Self::Tempel1),
            515 => Some(Self::Adrastea),
            505 => Some(Self::Amalthea),
            701 => Some(Self::Ariel),
            615 => Some(Self::Atlas),
            714 => Some(Self::Belinda),
            708 => Some(Self::Bianca),
            504 => Some(Self::Callisto),
            614 => Some(Self::Calypso),
            2000001 => Some(Self::Ceres),
            901 => Some(Self::Charon),
            706 => Some(Self::Cordelia),
            709 => Some(Self::Cressida),
            2000511 => Some(Self::Davida),
            402 => Some(Self::Deimos),
            710 => Some(Self::Desdemona),
            805 => Some(Self::Despina),
            604 => Some(Self::Dione),
            399 => Some(Self::Earth),
            602 => Some(Self::Enceladus),
            611 => Some(Self::Epimetheus),
            2000433 => Some(Self::Eros),
            502 => Some(Self::Europa),
            806 => Some(Self::Galatea),
            503 => Some(Self::Ganymede),
            9511010 => Some(Self::Gaspra),
            612 => Some(Self::Helene),
            608 => Some(Self::Iapetus),
            2431010 => Some(Self::Ida),
            501 => Some(Self::Io),
            2025143 => Some(Self::Itokawa),
            610 => Some(Self::Janus),
            711 => Some(Self::Juliet),
            599 => Some(Self::Jupiter),
            807 => Some(Self::Larissa),
            2000021 => Some(Self::Lutetia),
            499 => Some(Self::Mars),
            199 => Some(Self::Mercury),
            516 => Some(Self::Metis),
            601 => Some(Self::Mimas),
            705 => Some(Self::Miranda),
            301 => Some(Self::Moon),
            803 => Some(Self::Naiad),
            899 => Some(Self::Neptune),
            704 => Some(Self::Oberon),
            707 => Some(Self::Ophelia),
            2000002 => Some(Self::Pallas),
            618 => Some(Self::Pan),
            617 => Some(Self::Pandora),
            401 => Some(Self::Phobos),
            609 => Some(Self::Phoebe),
            999 => Some(Self::Pluto),
            712 => Some(Self::Portia),
            616 => Some(Self::Prometheus),
            808 => Some(Self::Proteus),
            715 => Some(Self::Puck),
            605 => Some(Self::Rhea),
            713 => Some(Self::Rosalind),
            699 => Some(Self::Saturn),
            2002867 => Some(Self::Steins),
            10 => Some(Self::Sun),
            613 => Some(Self::Telesto),
            603 => Some(Self::Tethys),
            804 => Some(Self::Thalassa),
            514 => Some(Self::Thebe),
            606 => Some(Self::Titan),
            703 => Some(Self::Titania),
            801 => Some(Self::Triton),
            702 => Some(Self::Umbriel),
            799 => Some(Self::Uranus),
            299 => Some(Self::Venus),
            2000004 => Some(Self::Vesta),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Borrelly19P => "19p_borrelly",
            Self::Tempel1 => "9p_tempel_1",
            Self::Adrastea => "adrastea",
            Self::Amalthea => "amalthea",
            Self::Ariel => "ariel",
            Self::Atlas => "atlas",
            Self::Belinda => "belinda",
            Self::Bianca => "bianca",
            Self::Callisto => "callisto",
            Self::Calypso => "calypso",
            Self::Ceres => "ceres",
            Self::Charon => "charon",
            Self::Cordelia => "cordelia",
            Self::Cressida => "cressida",
            Self::Davida => "davida",
            Self::Deimos => "deimos",
            Self::Desdemona => "desdemona",
            Self::Despina => "despina",
            Self::Dione => "dione",
            Self::Earth => "earth",
            Self::Enceladus => "enceladus",
            Self::Epimetheus => "epimetheus",
            Self::Eros => "eros",
            Self::Europa => "europa",
            Self::Galatea => "galatea",
            Self::Ganymede => "ganymede",
            Self::Gaspra => "gaspra",
            Self::Helene => "helene",
            Self::Iapetus => "iapetus",
            Self::Ida => "ida",
            Self::Io => "io",
            Self::Itokawa => "itokawa",
            Self::Janus => "janus",
            Self::Juliet => "juliet",
            Self::Jupiter => "jupiter",
            Self::Larissa => "larissa",
            Self::Lutetia => "lutetia",
            Self::Mars => "mars",
            Self::Mercury => "mercury",
            Self::Metis => "metis",
            Self::Mimas => "mimas",
            Self::Miranda => "miranda",
            Self::Moon => "moon",
            Self::Naiad => "naiad",
            Self::Neptune => "neptune",
            Self::Oberon => "oberon",
            Self::Ophelia => "ophelia",
            Self::Pallas => "pallas",
            Self::Pan => "pan",
            Self::Pandora => "pandora",
            Self::Phobos => "phobos",
            Self::Phoebe => "phoebe",
            Self::Pluto => "pluto",
            Self::Portia => "portia",
            Self::Prometheus => "prometheus",
            Self::Proteus => "proteus",
            Self::Puck => "puck",
            Self::Rhea => "rhea",
            Self::Rosalind => "rosalind",
            Self::Saturn => "saturn",
            Self::Steins => "steins",
            Self::Sun => "sun",
            Self::Telesto => "telesto",
            Self::Tethys => "tethys",
            Self::Thalassa => "thalassa",
            Self::Thebe => "thebe",
            Self::Titan => "titan",
            Self::Titania => "titania",
            Self::Triton => "triton",
            Self::Umbriel => "umbriel",
            Self::Uranus => "uranus",
            Self::Venus => "venus",
            Self::Vesta => "vesta",
        }
    }
}

impl Display for IauBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IauBody {
    type Err = RotationError;

    /// Accepts the lowercase catalog name (case-insensitive, `-` or `_`
    /// separators) or a NAIF id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        if let Ok(code) = key.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| RotationError::UnknownBody(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|b| b.name() == key)
            .ok_or_else(|| RotationError::UnknownBody(s.to_string()))
    }
}
