use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tlescope::kepler::solve_kepler_equation;
use tlescope::params::{KEPLER_MAX_ITER, KEPLER_TOLERANCE};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn bench_eccentricity_range(c: &mut Criterion, name: &str, seed: u64, lo: f64, hi: f64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = 10_000usize;

    c.bench_function(name, |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| (rng.random_range(lo..=hi), rand_angle(&mut rng)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (e, m) in cases {
                    let sol = solve_kepler_equation(
                        black_box(e),
                        black_box(m),
                        KEPLER_TOLERANCE,
                        KEPLER_MAX_ITER,
                    );
                    black_box(sol);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Low Earth orbit regime: e ∈ [0.0, 0.01]
fn bench_near_circular(c: &mut Criterion) {
    bench_eccentricity_range(
        c,
        "solve_kepler_equation/near_circular_e<=0.01",
        0xFEEDFACE,
        0.0,
        0.01,
    );
}

/// Typical regime: e ∈ [0.0, 0.7]
fn bench_typical(c: &mut Criterion) {
    bench_eccentricity_range(c, "solve_kepler_equation/typical_e<=0.7", 0xDEADBEEF, 0.0, 0.7);
}

/// Molniya-like and beyond: e ∈ [0.7, 0.9]
fn bench_high_e(c: &mut Criterion) {
    bench_eccentricity_range(
        c,
        "solve_kepler_equation/high_e_0.7..0.9",
        0xBADF00D,
        0.7,
        0.9,
    );
}

/// ISS element set of 2022-01-14.
fn bench_iss(c: &mut Criterion) {
    let e = 0.0006828_f64;
    let m = 10.3753_f64.to_radians();

    c.bench_function("solve_kepler_equation/iss", |b| {
        b.iter(|| {
            let sol = solve_kepler_equation(black_box(e), black_box(m), KEPLER_TOLERANCE, KEPLER_MAX_ITER);
            black_box(sol);
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_near_circular, bench_typical, bench_high_e, bench_iss
);
criterion_main!(benches);
