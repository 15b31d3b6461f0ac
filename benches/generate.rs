#[macro_use]
extern crate criterion;
extern crate unique_slug;

use criterion::Criterion;
use rand::{SeedableRng, rngs::StdRng};
use unique_slug::core::FixedClock;
use unique_slug::{Precision, SlugGenerator, generate_slug};

fn generate_default(c: &mut Criterion) {
    c.bench_function("generate_slug(None)", |b| {
        b.iter(|| generate_slug(None).unwrap());
    });
}

fn generate_os_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate with OsRng");
    for precision in Precision::all() {
        let mut generator = SlugGenerator::builder()
            .precision(precision)
            .build()
            .unwrap();
        group.bench_function(precision.unit_name(), |b| {
            b.iter(|| generator.generate().unwrap());
        });
    }
    group.finish();
}

fn generate_seeded(c: &mut Criterion) {
    let mut generator = SlugGenerator::builder()
        .precision(Precision::Nanoseconds)
        .clock(FixedClock::from_secs(1_700_000_000))
        .rng(StdRng::seed_from_u64(420))
        .build()
        .unwrap();

    c.bench_function("generate nanoseconds with StdRng", |b| {
        b.iter(|| generator.generate().unwrap());
    });
}

criterion_group!(benches, generate_default, generate_os_rng, generate_seeded);
criterion_main!(benches);
