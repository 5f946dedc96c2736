use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memechart_core::{
    build_price_history_set, create_history_table, generate_prices, FixedClock, TimeframeConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    group.measurement_time(Duration::from_secs(5));

    for ticks in [7usize, 90, 365, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("prices", ticks), ticks, |b, &ticks| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(generate_prices(&mut rng, ticks, 0.0005, 0.0042)));
        });
    }

    let configs = TimeframeConfig::reference_set();
    group.bench_function("reference_set", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            black_box(
                build_price_history_set(&mut rng, FixedClock::reference_date(), &configs).unwrap(),
            )
        });
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let set = build_price_history_set(
        &mut StdRng::seed_from_u64(42),
        FixedClock::reference_date(),
        &TimeframeConfig::reference_set(),
    )
    .unwrap();

    c.bench_function("summary_table", |b| {
        b.iter(|| black_box(create_history_table(&set, 1)));
    });
}

criterion_group!(benches, bench_generation, bench_rendering);
criterion_main!(benches);
