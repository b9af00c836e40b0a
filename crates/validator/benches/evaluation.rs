//! Benchmarks for constraint evaluation
//!
//! Covers single-field chains (passing and failing), registry dispatch of
//! named constraints, e-mail matching, and multi-field sessions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use okay_validator::prelude::*;

// ============================================================================
// SINGLE FIELD
// ============================================================================

fn username(value: &str) -> Field {
    Field::new(value, "username")
        .required()
        .min_length(3)
        .max_length(16)
        .is_alphanumeric()
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("field");
    let evaluator = Evaluator::default();

    let valid = username("gopher42");
    group.bench_function("valid", |b| {
        b.iter(|| evaluator.evaluate(black_box(&valid)))
    });

    let invalid = username("");
    group.bench_function("invalid", |b| {
        b.iter(|| evaluator.evaluate(black_box(&invalid)))
    });

    let named = Field::new("gopher42", "username")
        .named("required", [])
        .named("minlength", [Param::Length(3)])
        .named("maxlength", [Param::Length(16)])
        .named("isalphanumeric", []);
    group.bench_function("named", |b| {
        b.iter(|| evaluator.evaluate(black_box(&named)))
    });

    group.finish();
}

fn bench_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_scaling");
    let evaluator = Evaluator::default();

    for size in [10, 100, 1_000, 10_000] {
        let field = Field::new("a".repeat(size), "x").min_length(5).is_alpha();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &field, |b, field| {
            b.iter(|| evaluator.evaluate(black_box(field)))
        });
    }

    group.finish();
}

// ============================================================================
// E-MAIL
// ============================================================================

fn bench_email(c: &mut Criterion) {
    let mut group = c.benchmark_group("email");
    let evaluator = Evaluator::default();

    for (label, value) in [
        ("plain", "user@example.com"),
        ("display_name", "Some User <user@example.com>"),
        ("invalid", "user@localhost"),
    ] {
        let field = Field::new(value, "email").is_email();
        group.bench_function(label, |b| b.iter(|| evaluator.evaluate(black_box(&field))));
    }

    group.finish();
}

// ============================================================================
// SESSION
// ============================================================================

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");

    for fields in [1, 10, 100] {
        let mut session = Session::new();
        for i in 0..fields {
            session
                .field(format!("user{i}@example.com"), format!("email{i}"))
                .required()
                .is_email()
                .does_not_end_with(".edu");
        }

        group.throughput(Throughput::Elements(fields as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fields), &session, |b, session| {
            b.iter(|| black_box(session).errors())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_field,
    bench_length_scaling,
    bench_email,
    bench_session
);
criterion_main!(benches);
