//! Survey benchmarks
//!
//! Goal: a small set that finishes within a minute locally and in CI.

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kata_drills::domain::numbers::armstrong::is_armstrong_number;
use kata_drills::domain::numbers::collatz::steps;
use kata_drills::domain::numbers::perfect_numbers::classify;
use kata_drills::{SurveyOptions, armstrong_numbers, classify_numbers, longest_collatz};

const RANGE_END: u64 = 200_000;

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(15)
        .measurement_time(Duration::from_secs(8))
}

fn bench_single_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("single");

    group.bench_function("armstrong_548834", |b| {
        b.iter(|| is_armstrong_number(black_box(548_834)))
    });
    group.bench_function("collatz_837799", |b| b.iter(|| steps(black_box(837_799))));
    group.bench_function("classify_33550336", |b| {
        b.iter(|| classify(black_box(33_550_336)))
    });

    group.finish();
}

fn bench_surveys(c: &mut Criterion) {
    let mut group = c.benchmark_group("survey");

    group.bench_function("armstrong_200k", |b| {
        b.iter(|| armstrong_numbers(1..=RANGE_END, SurveyOptions::default()))
    });
    group.bench_function("collatz_200k", |b| {
        b.iter(|| longest_collatz(1..=RANGE_END, SurveyOptions::default()))
    });
    group.bench_function("classify_200k", |b| {
        b.iter(|| classify_numbers(1..=RANGE_END, SurveyOptions::default()))
    });

    group.finish();
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_size");

    for chunk_size in [256u64, 4096, 65_536] {
        group.bench_function(format!("collatz_{chunk_size}"), |b| {
            b.iter(|| {
                longest_collatz(
                    1..=RANGE_END,
                    SurveyOptions::default().with_chunk_size(chunk_size),
                )
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_single_checks, bench_surveys, bench_chunk_sizes
}
criterion_main!(benches);
