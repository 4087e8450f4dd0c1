//! Criterion benchmarks for the multiplication strategies.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matcalc_core::strategy::{
    DivideConquerMultiplier, Multiplier, SchoolbookMultiplier, StrassenMultiplier,
};
use matcalc_core::{Matrix, Options, WorkerPool};

fn bench_strategies(c: &mut Criterion) {
    let opts = Options::default().normalize();
    let pool = WorkerPool::new(opts.pool_capacity).expect("worker pool");

    let strategies: Vec<Box<dyn Multiplier>> = vec![
        Box::new(SchoolbookMultiplier::new()),
        Box::new(DivideConquerMultiplier::new(opts)),
        Box::new(StrassenMultiplier::new(opts, pool)),
    ];

    let sizes: Vec<usize> = vec![32, 64, 128, 256];
    let mut rng = StdRng::seed_from_u64(0x6d61_7463);

    for strategy in &strategies {
        let mut group = c.benchmark_group(strategy.name());
        for &n in &sizes {
            let a = Matrix::random_with(n, &mut rng).unwrap();
            let b = Matrix::random_with(n, &mut rng).unwrap();
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
                bench.iter(|| strategy.multiply(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
