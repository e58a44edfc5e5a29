//! Benchmarks for the APR solvers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lr_loans::{bisection_apr, compare_efficiency, newton_apr, KNOWN_LOANS};
use lr_math::ConvergenceEvaluator;

fn benchmark_newton(c: &mut Criterion) {
    let loan = KNOWN_LOANS[1];
    let terms = loan.terms().unwrap();
    let evaluator = ConvergenceEvaluator::new(loan.annual_rate, 1e-10)
        .unwrap()
        .with_max_iterations(1000);

    c.bench_function("newton_apr_1e-10", |b| {
        b.iter(|| evaluator.evaluate(newton_apr(black_box(&terms), None)))
    });
}

fn benchmark_bisection(c: &mut Criterion) {
    let loan = KNOWN_LOANS[1];
    let terms = loan.terms().unwrap();
    let evaluator = ConvergenceEvaluator::new(loan.annual_rate, 1e-10)
        .unwrap()
        .with_max_iterations(1000);

    c.bench_function("bisection_apr_1e-10", |b| {
        b.iter(|| evaluator.evaluate(bisection_apr(black_box(&terms), None).unwrap()))
    });
}

fn benchmark_efficiency_report(c: &mut Criterion) {
    c.bench_function("compare_efficiency_known_loans", |b| {
        b.iter(|| compare_efficiency(black_box(&KNOWN_LOANS), 1e-4, Some(1000)))
    });
}

criterion_group!(
    benches,
    benchmark_newton,
    benchmark_bisection,
    benchmark_efficiency_report
);
criterion_main!(benches);
