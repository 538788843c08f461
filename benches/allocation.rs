use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use parampool::domain::models::{select_value, CandidatePool, Outcome, PoolClassification};
use std::hint::black_box;

fn bench_pool_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_parse");
    for &n in &[8usize, 64, 256] {
        let spec = format!("vm[1..{n}], spare-a, spare-b");
        group.bench_with_input(BenchmarkId::from_parameter(n), &spec, |b, spec| {
            b.iter(|| black_box(CandidatePool::parse(black_box(spec))));
        });
    }
    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_sightings");
    for &n in &[100usize, 1000] {
        // A deterministic mix of outcomes over 32 recurring values.
        let sightings: Vec<(String, Outcome)> = (0..n)
            .map(|i| {
                let value = format!("vm{}", i % 32);
                let outcome = match i % 5 {
                    0 => Outcome::Running,
                    1 | 2 => Outcome::Functional,
                    _ => Outcome::Failed,
                };
                (value, outcome)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &sightings, |b, sightings| {
            b.iter(|| {
                let mut state = PoolClassification::new();
                for (value, outcome) in sightings {
                    state = state.observe(value, *outcome);
                }
                black_box(state)
            });
        });
    }
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let pool = CandidatePool::parse("vm[1..256]");

    // Every value but the last is taken, forcing a full pool scan.
    let mut state = PoolClassification::new();
    for i in 1..=255u64 {
        let outcome = if i % 3 == 0 {
            Outcome::Running
        } else {
            Outcome::Functional
        };
        state = state.observe(&format!("vm{i}"), outcome);
    }

    c.bench_function("select_last_free_value", |b| {
        b.iter(|| black_box(select_value(black_box(&pool), black_box(&state), false)));
    });
}

criterion_group!(
    benches,
    bench_pool_parsing,
    bench_classification,
    bench_selection
);
criterion_main!(benches);
