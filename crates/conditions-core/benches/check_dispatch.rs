//! Benchmarks for check dispatch and message formatting
//!
//! Passing checks should cost little more than the predicate itself; the
//! failure path formats and classifies a message.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use conditions_core::{
    requires_named, CheckOutcome, ConditionDescription, FailureReason, MessageFormatter, Relation,
    StringComparison,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn ends_with_check(subject: &str, suffix: &str, comparison: &StringComparison) -> bool {
    requires_named(subject, "subject")
        .check(None, |value| {
            if comparison.relates(Relation::EndsWith, Some(*value), Some(suffix)) {
                CheckOutcome::failed(
                    FailureReason::ArgumentInvalid,
                    format!("not end with '{}'", suffix),
                )
            } else {
                CheckOutcome::Passed
            }
        })
        .is_ok()
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let comparisons = [
        ("ordinal", StringComparison::Ordinal),
        ("ordinal_ignore_case", StringComparison::OrdinalIgnoreCase),
        ("culture_ignore_case", StringComparison::culture("tr-TR", true)),
    ];

    for (label, comparison) in &comparisons {
        group.bench_with_input(BenchmarkId::new("passing", label), comparison, |b, cmp| {
            b.iter(|| ends_with_check(black_box("hello and hi"), black_box("HO"), cmp))
        });
        group.bench_with_input(BenchmarkId::new("failing", label), comparison, |b, cmp| {
            b.iter(|| ends_with_check(black_box("hello and hi"), black_box("hi"), cmp))
        });
    }

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let description = ConditionDescription::parse("the {0} argument is invalid")
        .unwrap_or_else(|e| panic!("{}", e));

    c.bench_function("format_default", |b| {
        b.iter(|| MessageFormatter::format(black_box("not end with 'test'"), None, Some("a")))
    });
    c.bench_function("format_description", |b| {
        b.iter(|| {
            MessageFormatter::format(
                black_box("not end with 'test'"),
                Some(&description),
                Some("a"),
            )
        })
    });
    c.bench_function("parse_description", |b| {
        b.iter(|| ConditionDescription::parse(black_box("qwe {0} xyz {{escaped}}")))
    });
}

criterion_group!(benches, bench_dispatch, bench_formatting);
criterion_main!(benches);
