//! Benchmarks for phrase compilation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use windspeak::phrase::{compass_to_tokens, int_to_tokens, num_to_tokens};
use windspeak::{compile, Reading};

fn bench_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("numbers");

    for n in [7_i64, 42, 347, -999] {
        group.bench_with_input(BenchmarkId::new("int_to_tokens", n), &n, |b, &n| {
            b.iter(|| black_box(int_to_tokens(black_box(n))))
        });
    }

    group.bench_function("num_to_tokens", |b| {
        b.iter(|| black_box(num_to_tokens(black_box(12.34))))
    });

    group.finish();
}

fn bench_compass(c: &mut Criterion) {
    // worst case walks the whole cascade
    c.bench_function("compass_to_tokens_north", |b| {
        b.iter(|| black_box(compass_to_tokens(black_box(5.0))))
    });
}

fn bench_compile(c: &mut Criterion) {
    let readings: Vec<Reading> = (0..360)
        .map(|deg| Reading::new(deg as f64 + 0.5, (deg % 30) as f64 * 0.7))
        .collect();

    c.bench_function("compile_full_circle", |b| {
        b.iter(|| {
            for reading in &readings {
                black_box(compile(reading).ok());
            }
        })
    });
}

criterion_group!(benches, bench_numbers, bench_compass, bench_compile);
criterion_main!(benches);
