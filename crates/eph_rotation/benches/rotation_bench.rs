use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eph_rotation::{IauBody, RotationCache, orientation};

fn bench_step(c: &mut Criterion) {
    let mut cache = RotationCache::new();
    c.bench_function("rotation_cache_step", |b| {
        b.iter(|| cache.step(black_box(2_460_000.5)))
    });
}

fn bench_catalog(c: &mut Criterion) {
    let mut cache = RotationCache::new();
    cache.step(2_460_000.5);
    c.bench_function("rotation_all_bodies_shared_cache", |b| {
        b.iter(|| black_box(&cache).orientations())
    });
    c.bench_function("rotation_all_bodies_one_shot", |b| {
        b.iter(|| {
            for body in IauBody::ALL {
                let _ = black_box(orientation(body, black_box(2_460_000.5)));
            }
        })
    });
}

criterion_group!(benches, bench_step, bench_catalog);
criterion_main!(benches);
