use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eph_core::{Engine, EngineConfig, Query};
use eph_frames::{
    Ecliptic, Equatorial, Galactic, Geographic, J2000_OBLIQUITY, Nutation, ObliquityModel,
    angular_separation, body_state_to_spherical, ecliptic_to_equatorial, equatorial_to_ecliptic,
    equatorial_to_galactic, equatorial_to_horizontal_gst, galactic_to_equatorial, mean_obliquity,
    relative_position_angle, smallest_circle,
};
use eph_rotation::{IauBody, satellites_of};
use eph_series::{Body, Equinox, StateUnits, orbital_elements};
use eph_time::{AngleOfArc, HourAngle, delta_t, jd_to_calendar, mean_sidereal_time_degrees};
use log::debug;

#[derive(Parser)]
#[command(name = "ephem", about = "Analytic ephemeris and coordinate toolkit")]
struct Cli {
    /// Engine config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory with VSOP87 files (overrides the config's vsop87_dir)
    #[arg(long, global = true)]
    vsop87_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nutation in longitude and obliquity
    Nutation {
        /// Julian Day (TT)
        jd: f64,
        /// Use the two-term approximation
        #[arg(long)]
        fast: bool,
    },
    /// Mean and true obliquity of the ecliptic
    Obliquity {
        /// Julian Day (TT)
        jd: f64,
        /// Use the short classical polynomial instead of Laskar's
        #[arg(long)]
        classical: bool,
    },
    /// Mean and apparent Greenwich sidereal time
    Sidereal {
        /// Julian Day (UT)
        jd: f64,
    },
    /// Geocentric lunar position (ELP2000-82B subset)
    Moon {
        /// Julian Day (TT)
        jd: f64,
    },
    /// Heliocentric position of Pluto
    Pluto {
        /// Julian Day (TT)
        jd: f64,
    },
    /// Planet state from VSOP87 files
    Planet {
        /// Body name (sun, mercury, ..., neptune)
        body: String,
        /// Julian Day (TDB)
        jd: f64,
    },
    /// IAU pole and prime meridian
    Orient {
        /// Body name or NAIF id
        body: Option<String>,
        /// Julian Day (TDB)
        #[arg(long)]
        jd: f64,
        /// Every body in the catalog
        #[arg(long)]
        all: bool,
    },
    /// Physical and orbital data of a planet's major satellites
    Satellites {
        /// Primary body name, e.g. jupiter
        primary: String,
    },
    /// Ecliptic to equatorial
    #[command(allow_negative_numbers = true)]
    Ecl2eq {
        /// Longitude in degrees
        lon: f64,
        /// Latitude in degrees
        lat: f64,
        /// Use the true obliquity of this date instead of J2000
        #[arg(long)]
        jd: Option<f64>,
    },
    /// Equatorial to ecliptic
    #[command(allow_negative_numbers = true)]
    Eq2ecl {
        /// Right ascension in degrees
        ra: f64,
        /// Declination in degrees
        dec: f64,
        /// Use the true obliquity of this date instead of J2000
        #[arg(long)]
        jd: Option<f64>,
    },
    /// Equatorial to horizontal (azimuth from south)
    #[command(allow_negative_numbers = true)]
    Eq2hor {
        /// Right ascension in degrees
        ra: f64,
        /// Declination in degrees
        dec: f64,
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
        /// Observer latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees, positive west
        #[arg(long)]
        lon_west: f64,
    },
    /// Equatorial (B1950) to galactic
    #[command(allow_negative_numbers = true)]
    Eq2gal {
        /// Right ascension in degrees
        ra: f64,
        /// Declination in degrees
        dec: f64,
    },
    /// Galactic to equatorial (B1950)
    #[command(allow_negative_numbers = true)]
    Gal2eq {
        /// Galactic longitude in degrees
        l: f64,
        /// Galactic latitude in degrees
        b: f64,
    },
    /// Angular separation and position angle of two points
    #[command(allow_negative_numbers = true)]
    Separation {
        ra1: f64,
        dec1: f64,
        ra2: f64,
        dec2: f64,
    },
    /// Diameter of the smallest circle containing three points
    #[command(allow_negative_numbers = true)]
    Circle {
        /// Six values: ra1 dec1 ra2 dec2 ra3 dec3 (degrees)
        #[arg(num_args = 6)]
        coords: Vec<f64>,
    },
    /// Mean orbital elements of a planet
    Elements {
        /// Body name (mercury, ..., neptune)
        body: String,
        /// Julian Day (TT)
        jd: f64,
        /// Refer angles to the J2000 equinox instead of the equinox of date
        #[arg(long)]
        j2000: bool,
    },
    /// ΔT = TT − UT in seconds
    DeltaT {
        /// Decimal year, e.g. 1990.5
        year: f64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Nutation { jd, fast } => {
            let n = if *fast {
                Nutation::fast(*jd)
            } else {
                Nutation::full(*jd)
            };
            println!("JD {jd}");
            println!("  Δψ = {:+.4}\"", n.longitude_arcsec());
            println!("  Δε = {:+.4}\"", n.obliquity_arcsec());
        }
        Commands::Obliquity { jd, classical } => {
            let model = if *classical {
                ObliquityModel::Classical
            } else {
                ObliquityModel::Laskar
            };
            let mean = mean_obliquity(*jd, model);
            let n = Nutation::full(*jd);
            println!("JD {jd}");
            println!("  mean ε0 = {}", AngleOfArc::from_degrees(mean.to_degrees()));
            println!(
                "  true ε  = {}",
                AngleOfArc::from_degrees((mean + n.obliquity).to_degrees())
            );
        }
        Commands::Sidereal { jd } => {
            let engine = load_engine(&cli);
            let mean = mean_sidereal_time_degrees(*jd);
            let apparent = engine.apparent_sidereal_time_degrees(*jd);
            println!("JD {jd}");
            println!("  mean     = {} ({mean:.6}°)", HourAngle::from_degrees(mean));
            println!("  apparent = {} ({apparent:.6}°)", HourAngle::from_degrees(apparent));
        }
        Commands::Moon { jd } => {
            let engine = load_engine(&cli);
            print_state(&engine, Body::Moon, *jd);
        }
        Commands::Pluto { jd } => {
            let engine = load_engine(&cli);
            print_state(&engine, Body::Pluto, *jd);
        }
        Commands::Planet { body, jd } => {
            let body = parse_body(body);
            if cli.config.is_none() && cli.vsop87_dir.is_none() {
                eprintln!("planet needs --config or --vsop87-dir");
                std::process::exit(2);
            }
            let engine = load_engine(&cli);
            print_state(&engine, body, *jd);
        }
        Commands::Orient { body, jd, all } => {
            let engine = load_engine(&cli);
            let bodies: Vec<IauBody> = match (body, *all) {
                (_, true) => IauBody::ALL.to_vec(),
                (Some(name), false) => vec![parse_iau_body(name)],
                (None, false) => {
                    eprintln!("give a body name or --all");
                    std::process::exit(2);
                }
            };
            let requests: Vec<_> = bodies.iter().map(|&b| (b, *jd)).collect();
            let (orientations, stats) = engine
                .orientation_batch(&requests)
                .unwrap_or_else(|e| fail(e));
            debug!("{stats:?}");
            println!("{:<14} {:>12} {:>12} {:>12}", "body", "α0 (°)", "δ0 (°)", "W (°)");
            for o in orientations {
                println!(
                    "{:<14} {:>12.6} {:>12.6} {:>12.6}",
                    o.body.name(),
                    o.right_ascension.to_degrees(),
                    o.declination.to_degrees(),
                    o.prime_meridian.to_degrees()
                );
            }
        }
        Commands::Satellites { primary } => {
            let primary = parse_iau_body(primary);
            let moons = satellites_of(primary);
            if moons.is_empty() {
                eprintln!("no satellites catalogued for {}", primary.name());
                std::process::exit(1);
            }
            println!(
                "{:<10} {:>5} {:>9} {:>11} {:>12} {:>10} {:>7} {:>8}",
                "name", "naif", "R (km)", "mass (kg)", "a (km)", "P (d)", "e", "i (°)"
            );
            for s in moons {
                println!(
                    "{:<10} {:>5} {:>9.1} {:>11.3e} {:>12.1} {:>10.5} {:>7.4} {:>8.3}",
                    s.name,
                    s.code,
                    s.shape.mean_radius_km(),
                    s.mass_kg,
                    s.semimajor_axis_km,
                    s.orbital_period_days,
                    s.eccentricity,
                    s.inclination_deg
                );
            }
        }
        Commands::Ecl2eq { lon, lat, jd } => {
            let eps = obliquity_for(&cli, *jd);
            let eq = ecliptic_to_equatorial(&Ecliptic::from_degrees(*lon, *lat), eps);
            print_equatorial(&eq);
        }
        Commands::Eq2ecl { ra, dec, jd } => {
            let eps = obliquity_for(&cli, *jd);
            let ecl = equatorial_to_ecliptic(&Equatorial::from_degrees(*ra, *dec), eps);
            let (l, b) = ecl.to_degrees();
            println!("λ = {l:.6}°  β = {b:+.6}°");
        }
        Commands::Eq2hor {
            ra,
            dec,
            jd,
            lat,
            lon_west,
        } => {
            let engine = load_engine(&cli);
            let gst = engine.apparent_sidereal_time_degrees(*jd).to_radians();
            let observer = Geographic::from_degrees(*lon_west, *lat);
            let hor =
                equatorial_to_horizontal_gst(&Equatorial::from_degrees(*ra, *dec), gst, &observer);
            let (a, h) = hor.to_degrees();
            println!("A = {a:.6}° (from south)  h = {h:+.6}°");
        }
        Commands::Eq2gal { ra, dec } => {
            let gal = equatorial_to_galactic(&Equatorial::from_degrees(*ra, *dec));
            let (l, b) = gal.to_degrees();
            println!("l = {l:.6}°  b = {b:+.6}°");
        }
        Commands::Gal2eq { l, b } => {
            let eq = galactic_to_equatorial(&Galactic::from_degrees(*l, *b));
            print_equatorial(&eq);
        }
        Commands::Separation {
            ra1,
            dec1,
            ra2,
            dec2,
        } => {
            let a = Equatorial::from_degrees(*ra1, *dec1);
            let b = Equatorial::from_degrees(*ra2, *dec2);
            let d = angular_separation(&a, &b).to_degrees();
            let p = relative_position_angle(&a, &b).to_degrees();
            println!("separation = {} ({d:.6}°)", AngleOfArc::from_degrees(d));
            println!("position angle = {p:.6}°");
        }
        Commands::Circle { coords } => {
            let p: Vec<Equatorial> = coords
                .chunks_exact(2)
                .map(|c| Equatorial::from_degrees(c[0], c[1]))
                .collect();
            let d = smallest_circle(&p[0], &p[1], &p[2]).to_degrees();
            println!("diameter = {} ({d:.6}°)", AngleOfArc::from_degrees(d));
        }
        Commands::Elements { body, jd, j2000 } => {
            let equinox = if *j2000 {
                Equinox::J2000
            } else {
                Equinox::OfDate
            };
            let el = orbital_elements(parse_body(body), *jd, equinox).unwrap_or_else(|e| fail(e));
            println!("{} at JD {jd} ({equinox:?})", el.body);
            println!("  L = {:.6}°", el.mean_longitude.to_degrees());
            println!("  a = {:.9} AU", el.semimajor_axis);
            println!("  e = {:.8}", el.eccentricity);
            println!("  i = {:.6}°", el.inclination.to_degrees());
            println!("  Ω = {:.6}°", el.ascending_node.to_degrees());
            println!("  ϖ = {:.6}°", el.perihelion.to_degrees());
            println!("  M = {:.6}°", el.mean_anomaly().to_degrees());
            println!("  ω = {:.6}°", el.argument_of_perihelion().to_degrees());
        }
        Commands::DeltaT { year } => {
            println!("ΔT({year}) = {:.1} s", delta_t(*year));
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn load_engine(cli: &Cli) -> Engine {
    let mut config = match &cli.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            EngineConfig::load(path).unwrap_or_else(|e| fail(e))
        }
        None => EngineConfig::default(),
    };
    if let Some(dir) = &cli.vsop87_dir {
        config.vsop87_dir = Some(dir.clone());
    }
    Engine::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to load engine: {e}");
        std::process::exit(1);
    })
}

fn obliquity_for(cli: &Cli, jd: Option<f64>) -> f64 {
    match jd {
        Some(jd) => load_engine(cli).true_obliquity(jd),
        None => J2000_OBLIQUITY,
    }
}

fn parse_body(name: &str) -> Body {
    name.parse().unwrap_or_else(|_| {
        eprintln!("Invalid body name: {name}");
        eprintln!("Valid: sun, mercury, venus, earth, moon, mars, jupiter, saturn, uranus, neptune, pluto");
        std::process::exit(1);
    })
}

fn parse_iau_body(name: &str) -> IauBody {
    name.parse().unwrap_or_else(|e| fail(e))
}

fn print_equatorial(eq: &Equatorial) {
    let (ra, dec) = eq.to_degrees();
    println!(
        "α = {} ({ra:.6}°)  δ = {} ({dec:+.6}°)",
        HourAngle::from_degrees(ra),
        AngleOfArc::from_degrees(dec)
    );
}

fn print_state(engine: &Engine, body: Body, jd: f64) {
    let state = engine
        .query(Query { body, jd })
        .unwrap_or_else(|e| fail(e));
    let (y, m, d) = jd_to_calendar(jd);
    println!("{body} at JD {jd} ({y}-{m:02}-{d:05.2})");
    let s = body_state_to_spherical(&state);
    match state.units {
        StateUnits::LunarSpherical => {
            println!("  λ = {:.6}°  β = {:+.6}°", s.longitude.to_degrees(), s.latitude.to_degrees());
            println!("  Δ = {:.1} km", s.distance / 1000.0);
        }
        StateUnits::HeliocentricSpherical | StateUnits::Rectangular => {
            if state.units == StateUnits::Rectangular {
                let [x, y, z] = state.position;
                let [vx, vy, vz] = state.velocity;
                println!("  r = ({x:+.10}, {y:+.10}, {z:+.10}) AU");
                println!("  v = ({vx:+.10}, {vy:+.10}, {vz:+.10}) AU/day");
            }
            println!("  L = {:.6}°  B = {:+.6}°", s.longitude.to_degrees(), s.latitude.to_degrees());
            println!("  R = {:.9} AU", s.distance);
        }
    }
}
