//! Benchmarks for the analysis engine.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use routhier_core::{Polynomial, TransferFunction};
use routhier_solver::{SimulationParams, StateSpaceModel, analyze, find_roots, transient};

fn bench_find_roots(c: &mut Criterion) {
    // Degree 8, forces the eigenvalue path
    let poly = Polynomial::new(&[1.0, 4.0, -3.0, 2.0, 7.0, -1.0, 5.0, 0.5, -2.0]).unwrap();
    c.bench_function("find_roots_degree_8", |b| {
        b.iter(|| find_roots(black_box(&poly)).unwrap())
    });
}

fn bench_step_response(c: &mut Criterion) {
    let tf = TransferFunction::new(&[1.0], &[1.0, 4.0, 8.0, 3.0]).unwrap();
    let model = StateSpaceModel::build(&tf).unwrap();
    let params = SimulationParams::default();
    c.bench_function("step_response_third_order", |b| {
        b.iter(|| transient::step_response(black_box(&model), black_box(&params)).unwrap())
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    c.bench_function("analyze_third_order", |b| {
        b.iter(|| analyze(black_box(&[1.0, 2.0]), black_box(&[1.0, 4.0, 8.0, 3.0])).unwrap())
    });
}

criterion_group!(benches, bench_find_roots, bench_step_response, bench_full_analysis);
criterion_main!(benches);
