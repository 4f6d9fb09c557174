//! Benchmarks for randomized sphere packing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sphere_pack_d3::{Config, SpherePacker, Volume};

fn packer_benchmark(c: &mut Criterion) {
    let volume = Volume::new(100.0, 50.0, 30.0);
    let packer = SpherePacker::new(Config::default().with_max_spheres(100));

    c.bench_function("pack_100_spheres_default_box", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            let result = packer.solve_with_rng(black_box(&volume), &mut rng);
            black_box(result)
        })
    });

    let cube = Volume::new(100.0, 100.0, 100.0);
    let saturating = SpherePacker::new(Config::default().with_max_spheres(500));

    c.bench_function("pack_500_slots_saturated_cube", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            let result = saturating.solve_with_rng(black_box(&cube), &mut rng);
            black_box(result)
        })
    });
}

criterion_group!(benches, packer_benchmark);
criterion_main!(benches);
