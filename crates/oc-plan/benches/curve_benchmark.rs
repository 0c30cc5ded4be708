use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use oc_plan::{build_curve, FractionGrid, PlanParameters, QualityTargets};

fn bench_curve_build(c: &mut Criterion) {
    let grid = FractionGrid::default_grid();
    let targets = QualityTargets::new(Some(0.95), Some(0.90));

    let binomial_plan = PlanParameters::new(1000, 32, 32, 2, 6, 5).unwrap();
    c.bench_function("double_curve_binomial_10k", |b| {
        b.iter(|| black_box(build_curve(&binomial_plan, &targets, &grid).unwrap()))
    });

    let hyper_plan = PlanParameters::new(300, 32, 32, 2, 6, 5).unwrap();
    c.bench_function("double_curve_hypergeometric_10k", |b| {
        b.iter(|| black_box(build_curve(&hyper_plan, &targets, &grid).unwrap()))
    });
}

criterion_group!(benches, bench_curve_build);
criterion_main!(benches);
