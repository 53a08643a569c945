// ============================================================================
// Safe Integer Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Add/Mul - The four policies on non-overflowing and overflowing inputs
// 2. Division - Defined quotients against the special cases
// 3. Shifts - Valid and invalid counts
// 4. Width Fitting - ufit/sfit across field widths
// 5. Baseline - Native wrapping/checked operations for comparison
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use safe_int_arith::prelude::*;
use std::hint::black_box;

/// Operand pairs: mostly in range, with one overflowing pair per four.
fn operands() -> Vec<(i32, i32)> {
    (0..1024)
        .map(|i| {
            if i % 4 == 0 {
                (i32::MAX - i, i + 1)
            } else {
                (i * 7919, -(i * 104729) % 65536)
            }
        })
        .collect()
}

// ============================================================================
// Add / Mul
// ============================================================================

fn benchmark_arith_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("arith_policies");
    let pairs = operands();

    group.bench_function("checked_add", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(x, y)| checked::add(black_box(*x), black_box(*y)).is_ok())
                .count()
        });
    });

    group.bench_function("flagged_add", |b| {
        b.iter(|| {
            let mut failed = false;
            let sum = pairs.iter().fold(0i32, |acc, &(x, y)| {
                acc ^ flagged::add(black_box(x), black_box(y), &mut failed)
            });
            (sum, failed)
        });
    });

    group.bench_function("truncating_add", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(0i32, |acc, &(x, y)| acc ^ truncating::add(black_box(x), black_box(y)))
        });
    });

    group.bench_function("saturating_add", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(0i32, |acc, &(x, y)| acc ^ saturating::add(black_box(x), black_box(y)))
        });
    });

    group.bench_function("checked_mul_mixed", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(x, y)| checked::mul(black_box(*x as i64), black_box(*y as u32)).is_ok())
                .count()
        });
    });

    group.bench_function("saturating_mul_i128", |b| {
        b.iter(|| {
            pairs.iter().fold(0i128, |acc, &(x, y)| {
                acc ^ saturating::mul(black_box(x as i128) << 64, black_box(y))
            })
        });
    });

    group.finish();
}

// ============================================================================
// Division
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    let cases = [
        ("defined", 1_000_003i32, 7i32),
        ("by_zero", 1_000_003, 0),
        ("min_by_minus_one", i32::MIN, -1),
    ];

    for (name, n, d) in cases {
        group.bench_with_input(BenchmarkId::new("checked", name), &(n, d), |b, &(n, d)| {
            b.iter(|| checked::div(black_box(n), black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("flagged", name), &(n, d), |b, &(n, d)| {
            b.iter(|| {
                let mut failed = false;
                (flagged::div(black_box(n), black_box(d), &mut failed), failed)
            })
        });
        group.bench_with_input(BenchmarkId::new("truncating", name), &(n, d), |b, &(n, d)| {
            b.iter(|| truncating::div(black_box(n), black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("saturating", name), &(n, d), |b, &(n, d)| {
            b.iter(|| saturating::div(black_box(n), black_box(d)))
        });
    }

    group.finish();
}

// ============================================================================
// Shifts
// ============================================================================

fn benchmark_shifts(c: &mut Criterion) {
    let mut group = c.benchmark_group("shifts");

    for count in [4i32, 5, 40] {
        group.bench_with_input(BenchmarkId::new("checked_shl", count), &count, |b, &count| {
            b.iter(|| checked::shl(black_box(0x7777777i32), black_box(count)))
        });
        group.bench_with_input(BenchmarkId::new("saturating_shl", count), &count, |b, &count| {
            b.iter(|| saturating::shl(black_box(0x7777777i32), black_box(count)))
        });
        group.bench_with_input(BenchmarkId::new("truncating_shr", count), &count, |b, &count| {
            b.iter(|| truncating::shr(black_box(-0x7777777i64), black_box(count)))
        });
    }

    group.finish();
}

// ============================================================================
// Width Fitting
// ============================================================================

fn benchmark_fitting(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitting");
    let values: Vec<i64> = (0..1024).map(|i| (i - 512) * 1_000_003).collect();

    for nbits in [8u32, 24, 63, 64] {
        group.bench_with_input(BenchmarkId::new("checked_sfit", nbits), &nbits, |b, &nbits| {
            b.iter(|| values.iter().filter(|&&v| checked::sfit(black_box(v), nbits).is_ok()).count())
        });
        group.bench_with_input(BenchmarkId::new("checked_ufit", nbits), &nbits, |b, &nbits| {
            b.iter(|| values.iter().filter(|&&v| checked::ufit(black_box(v), nbits).is_ok()).count())
        });
        group.bench_with_input(BenchmarkId::new("saturating_sfit", nbits), &nbits, |b, &nbits| {
            b.iter(|| values.iter().fold(0i64, |acc, &v| acc ^ saturating::sfit(black_box(v), nbits)))
        });
    }

    group.finish();
}

// ============================================================================
// Native Baseline
// ============================================================================

fn benchmark_native_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("native_baseline");
    let pairs = operands();

    group.bench_function("checked_add", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(x, y)| black_box(*x).checked_add(black_box(*y)).is_some())
                .count()
        });
    });

    group.bench_function("saturating_add", |b| {
        b.iter(|| {
            pairs
                .iter()
                .fold(0i32, |acc, &(x, y)| acc ^ black_box(x).saturating_add(black_box(y)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_arith_policies,
    benchmark_division,
    benchmark_shifts,
    benchmark_fitting,
    benchmark_native_baseline,
);

criterion_main!(benches);
