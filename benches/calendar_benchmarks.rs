//! Performance benchmarks for the leave engine calendar.
//!
//! Holidays are recomputed on every query, so these benchmarks track the
//! cost of the calendar primitives the workflow leans on:
//! - Holiday list for a single year
//! - Business-day count over a year-long range
//! - Full validation report for a two-week leave range
//! - Approval checks across the configured hierarchy
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use leave_engine::authorization::{can_approve, EmployeeDirectory};
use leave_engine::calendar::{business_days_count, public_holidays, validate_date_range};
use leave_engine::config::ConfigLoader;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("Invalid bench date")
}

fn create_directory() -> EmployeeDirectory {
    ConfigLoader::load("./config/acme")
        .expect("Failed to load config")
        .directory()
}

/// Benchmark: Holiday list for one year.
fn bench_public_holidays(c: &mut Criterion) {
    c.bench_function("public_holidays_2025", |b| {
        b.iter(|| black_box(public_holidays(black_box(2025))))
    });
}

/// Benchmark: Business days over ranges of increasing length.
fn bench_business_days_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("business_days_count");
    let start = date("2025-01-01");

    for days in [7u64, 31, 365].iter() {
        let end = start + chrono::Duration::days(*days as i64 - 1);
        group.throughput(Throughput::Elements(*days));
        group.bench_with_input(BenchmarkId::new("days", days), &end, |b, end| {
            b.iter(|| black_box(business_days_count(black_box(start), black_box(*end))))
        });
    }

    group.finish();
}

/// Benchmark: Validation report for a leave range spanning Easter.
fn bench_validate_date_range(c: &mut Criterion) {
    let start = date("2025-04-14");
    let end = date("2025-04-25");

    c.bench_function("validate_date_range_easter", |b| {
        b.iter(|| black_box(validate_date_range(black_box(start), black_box(end))))
    });
}

/// Benchmark: Approval checks for every pair in the hierarchy.
fn bench_can_approve(c: &mut Criterion) {
    let directory = create_directory();
    let ids: Vec<u32> = directory.iter().map(|e| e.id).collect();

    let mut group = c.benchmark_group("authorization");
    group.throughput(Throughput::Elements((ids.len() * ids.len()) as u64));
    group.bench_function("can_approve_all_pairs", |b| {
        b.iter(|| {
            let mut allowed = 0usize;
            for approver in &ids {
                for employee in &ids {
                    if can_approve(&directory, *approver, *employee) {
                        allowed += 1;
                    }
                }
            }
            black_box(allowed)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_public_holidays,
    bench_business_days_count,
    bench_validate_date_range,
    bench_can_approve
);
criterion_main!(benches);
