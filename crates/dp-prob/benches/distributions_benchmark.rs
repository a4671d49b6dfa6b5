use criterion::{Criterion, criterion_group, criterion_main};
use dp_prob::{DistributionSpec, Evaluator, Method, ValuePolicy, inclusive_range};
use std::hint::black_box;

fn bench_closed_form(c: &mut Criterion) {
    let ks: Vec<f64> = (0..10_000).map(|i| (i % 60) as f64).collect();

    c.bench_function("binomial_pmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &k in &ks {
                acc += dp_prob::binomial::pmf(k, 60, 0.35);
            }
            black_box(acc)
        })
    });

    c.bench_function("poisson_pmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &k in &ks {
                acc += dp_prob::poisson::pmf(k, 3.2);
            }
            black_box(acc)
        })
    });

    c.bench_function("geometric_pmf_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &k in &ks {
                acc += dp_prob::geometric::pmf(k, 0.2);
            }
            black_box(acc)
        })
    });
}

fn bench_methods(c: &mut Criterion) {
    let xs = inclusive_range(-100, 1_000);
    let spec = DistributionSpec::binomial(1_000, 0.4).unwrap();

    for method in [Method::Statrs, Method::Direct] {
        let evaluator = Evaluator::new(ValuePolicy::Filter).with_method(method);
        c.bench_function(&format!("binomial_evaluate_filter_{}", method), |b| {
            b.iter(|| black_box(evaluator.evaluate(&spec, black_box(&xs)).unwrap()))
        });
    }
}

criterion_group!(benches, bench_closed_form, bench_methods);
criterion_main!(benches);
