//! Integration tests for the engine. VSOP87 cases need the official files
//! under `kernels/data/` and are skipped without them.

use std::path::PathBuf;
use std::sync::Arc;

use approx::assert_abs_diff_eq;
use eph_core::*;
use eph_rotation::IauBody;
use eph_series::{Body, StateUnits};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../kernels/data")
}

fn engine_from_toml(text: &str) -> Engine {
    Engine::new(EngineConfig::from_toml_str(text).expect("valid config")).expect("engine")
}

fn vsop_engine() -> Option<Engine> {
    let dir = data_dir();
    if !dir.join("VSOP87E.ear").exists() {
        eprintln!("Skipping: VSOP87E.ear not found in kernels/data (CDS catalogue VI/81)");
        return None;
    }
    let config = EngineConfig {
        vsop87_dir: Some(dir),
        bodies: vec![Body::Earth],
        ..EngineConfig::default()
    };
    Some(Engine::new(config).expect("should load engine"))
}

#[test]
fn earth_barycentric_state_at_j2000() {
    let engine = match vsop_engine() {
        Some(e) => e,
        None => return,
    };
    let state = engine
        .query(Query {
            body: Body::Earth,
            jd: 2_451_545.0,
        })
        .unwrap();
    assert_eq!(state.units, StateUnits::Rectangular);
    assert_abs_diff_eq!(state.position[0], -0.184_276_982_6, epsilon = 1e-9);
    assert_abs_diff_eq!(state.position[1], 0.964_453_453_0, epsilon = 1e-9);
    assert_abs_diff_eq!(state.velocity[0], -0.017_202_246_6, epsilon = 1e-9);
}

#[test]
fn batch_mixes_builtin_and_missing_theories() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let results = engine.query_batch(&[
        Query {
            body: Body::Moon,
            jd: 2_448_724.5,
        },
        Query {
            body: Body::Saturn,
            jd: 2_448_724.5,
        },
        Query {
            body: Body::Pluto,
            jd: 2_448_908.5,
        },
    ]);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(EngineError::TheoryNotLoaded(Body::Saturn))));
    assert!(results[2].is_ok());
}

#[test]
fn moon_matches_meeus_47a() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let moon = engine
        .query(Query {
            body: Body::Moon,
            jd: 2_448_724.5,
        })
        .unwrap();
    assert_abs_diff_eq!(moon.position[0], 133.162_659f64.to_radians(), epsilon = 2e-8);
    assert_abs_diff_eq!(moon.position[1], (-3.229_127f64).to_radians(), epsilon = 5e-9);
    assert_abs_diff_eq!(moon.position[2] / 1000.0, 368_409.7, epsilon = 0.1);
}

#[test]
fn configured_models_drive_earth_orientation() {
    let full = Engine::new(EngineConfig::default()).unwrap();
    let fast = engine_from_toml("nutation = \"fast\"\nobliquity = \"classical\"");

    let jd = 2_446_895.5;
    let dpsi_full = full.nutation(jd).longitude_arcsec();
    let dpsi_fast = fast.nutation(jd).longitude_arcsec();
    assert_abs_diff_eq!(dpsi_full, -3.788, epsilon = 0.001);
    assert!((dpsi_full - dpsi_fast).abs() < 1.0, "{dpsi_full} vs {dpsi_fast}");

    let eps = full.true_obliquity(jd).to_degrees();
    assert_abs_diff_eq!(eps, 23.443_569_4, epsilon = 1e-6);
    assert!(full.true_obliquity(jd) > full.mean_obliquity(jd));

    let theta = full.apparent_sidereal_time_degrees(jd);
    assert_abs_diff_eq!(theta, 197.692_23, epsilon = 1e-4);
}

#[test]
fn catalog_orientation_steps_once() {
    let engine = Engine::new(EngineConfig::default()).unwrap();
    let jd = 2_460_000.5;
    let requests: Vec<_> = IauBody::ALL.iter().map(|&b| (b, jd)).collect();
    let (orientations, stats) = engine.orientation_batch(&requests).unwrap();
    assert_eq!(stats.cache_steps, 1);
    assert_eq!(stats.orientations as usize, IauBody::ALL.len());
    assert_eq!(
        orientations[IauBody::Moon.index()],
        engine.orientation(IauBody::Moon, jd).unwrap()
    );
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = Arc::new(Engine::new(EngineConfig::default()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let jd = 2_451_545.0 + i as f64;
                engine.orientation(IauBody::Mars, jd).unwrap().jd
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), 2_451_545.0 + i as f64);
    }
}
