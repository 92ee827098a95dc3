//! Golden tests against the VSOP87 reference values published with the
//! distribution (`vsop87.chk`). Require the official data files under
//! `kernels/data/`, from the CDS catalogue VI/81
//! (<https://cdsarc.cds.unistra.fr/ftp/VI/81/>).

#![allow(clippy::excessive_precision)]

use std::path::{Path, PathBuf};

use eph_series::{Body, StateUnits, Vsop87Theory, Vsop87Version};

const POS_TOL_AU: f64 = 1e-10;
const VEL_TOL_AU_DAY: f64 = 1e-7;

fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../kernels/data")
        .join(name)
}

fn load(name: &str) -> Option<Vsop87Theory> {
    let path = data_path(name);
    if !path.exists() {
        eprintln!("Skipping: {} not found (CDS catalogue VI/81)", path.display());
        return None;
    }
    Some(Vsop87Theory::load(&path).expect("should load VSOP87 file"))
}

fn assert_vec(label: &str, got: [f64; 3], want: [f64; 3], tol: f64) {
    for i in 0..3 {
        assert!(
            (got[i] - want[i]).abs() < tol,
            "{label}[{i}]: got {:.12}, want {:.12}",
            got[i],
            want[i]
        );
    }
}

#[test]
fn earth_version_e_j2000() {
    let Some(theory) = load("VSOP87E.ear") else {
        return;
    };
    assert_eq!(theory.body(), Body::Earth);
    assert_eq!(theory.version(), Vsop87Version::E);

    let s = theory.state(2_451_545.0);
    assert_eq!(s.units, StateUnits::Rectangular);
    assert_vec(
        "position",
        s.position,
        [-0.1842769826, 0.9644534530, 0.0002022407],
        POS_TOL_AU,
    );
    assert_vec(
        "velocity",
        s.velocity,
        [-0.0172022466, -0.0031661954, 0.0000000125],
        VEL_TOL_AU_DAY,
    );
}

#[test]
fn earth_version_e_1900() {
    let Some(theory) = load("VSOP87E.ear") else {
        return;
    };
    let s = theory.state(2_415_020.0);
    assert_vec(
        "position",
        s.position,
        [-0.1851203046, 0.9714264843, 0.0001113443],
        POS_TOL_AU,
    );
    assert_vec(
        "velocity",
        s.velocity,
        [-0.0171823836, -0.0033539678, -0.0000016179],
        VEL_TOL_AU_DAY,
    );
}

#[test]
fn sun_version_e_j2000() {
    let Some(theory) = load("VSOP87E.sun") else {
        return;
    };
    assert_eq!(theory.body(), Body::Sun);
    let s = theory.state(2_451_545.0);
    assert_vec(
        "position",
        s.position,
        [-0.0071415279, -0.0027881715, 0.0002061418],
        POS_TOL_AU,
    );
    assert_vec(
        "velocity",
        s.velocity,
        [0.0000053774, -0.0000074073, -0.0000000943],
        VEL_TOL_AU_DAY,
    );
}
