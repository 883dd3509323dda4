// ============================================================================
// Formatter Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Raw Conversions - The stateless algorithms without caching
// 2. Cached Lookups - Repeated values through one call site
// 3. Cold Partitions - Every value is a miss
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tiered_format::convert;
use tiered_format::prelude::*;

// ============================================================================
// Raw Conversion Benchmarks
// ============================================================================

fn benchmark_raw_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_conversions");
    let config = FormatterConfig::default();

    for value in [999.0, 1_234_567.0, 9.87e20].iter() {
        group.bench_with_input(BenchmarkId::new("abbreviate", value), value, |b, &value| {
            b.iter(|| {
                black_box(convert::abbreviate(
                    value,
                    &config.abbreviations,
                    config.decimal_places,
                    config.overflow_policy,
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("comma", value), value, |b, &value| {
            b.iter(|| black_box(convert::group_thousands(value)));
        });

        group.bench_with_input(BenchmarkId::new("bytes", value), value, |b, &value| {
            b.iter(|| {
                black_box(convert::abbreviate_bytes(
                    value,
                    &config.byte_abbreviations,
                    config.decimal_places,
                    config.overflow_policy,
                ))
            });
        });
    }

    group.bench_function("roman_3888", |b| {
        b.iter(|| black_box(convert::to_roman(3888.0)));
    });

    group.finish();
}

// ============================================================================
// Cached Lookup Benchmarks
// ============================================================================

fn benchmark_cached_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_lookups");

    for distinct in [1usize, 100, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(distinct),
            distinct,
            |b, &distinct| {
                let formatter = Formatter::new();
                for i in 0..distinct {
                    let _ = formatter.to_abbreviation_in(PartitionKey::Global, i as f64 * 1000.0);
                }

                let mut i = 0usize;
                b.iter(|| {
                    i = (i + 1) % distinct;
                    black_box(
                        formatter.to_abbreviation_in(PartitionKey::Global, i as f64 * 1000.0),
                    )
                });
            },
        );
    }

    group.bench_function("track_caller_hit", |b| {
        let formatter = Formatter::new();
        b.iter(|| black_box(formatter.to_comma(1_234_567.89)));
    });

    group.finish();
}

// ============================================================================
// Cold Partition Benchmarks
// ============================================================================

fn benchmark_cold_partitions(c: &mut Criterion) {
    c.bench_function("miss_then_flush", |b| {
        let formatter = Formatter::new();
        let mut value = 0.0;
        b.iter(|| {
            value += 1.0;
            let output = formatter.to_byte_abbreviation_in("cold", value);
            if value % 10_000.0 == 0.0 {
                let _ = formatter.flush();
            }
            black_box(output)
        });
    });
}

criterion_group!(
    benches,
    benchmark_raw_conversions,
    benchmark_cached_lookups,
    benchmark_cold_partitions
);
criterion_main!(benches);
