// ABOUTME: Criterion benchmarks for the smart suggestion engine
// ABOUTME: Measures extraction, classification, full planning, and pattern-shift re-planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the smart suggestion engine.
//!
//! Histories contain several exercises per session so that extraction has to
//! filter, mirroring a real training log.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_strength::intelligence::{SetDetail, SmartSuggestionEngine, SuggestionRequest};
use pierre_strength::models::{ExerciseLog, SetLog, WorkoutSession};

const EXERCISES: [&str; 4] = ["Bench Press", "Squat", "Deadlift", "Overhead Press"];

fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Every-other-day sessions with alternating heavy/light bench work
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_history(count: usize) -> Vec<WorkoutSession> {
    (0..count)
        .map(|index| {
            let heavy = index % 2 == 0;
            let base = 60.0 + (index % 20) as f64 * 2.5;
            let exercises = EXERCISES
                .iter()
                .enumerate()
                .map(|(offset, name)| {
                    let (weight, reps) = if heavy {
                        (base + offset as f64 * 10.0, 5)
                    } else {
                        (base * 0.75 + offset as f64 * 7.5, 12)
                    };
                    ExerciseLog::new(*name, vec![SetLog::completed(weight, reps); 4])
                })
                .collect();
            let days_ago = ((count - index) * 2) as i64;
            WorkoutSession::new(
                format!("bench_session_{index}"),
                as_of() - Duration::days(days_ago),
                exercises,
            )
        })
        .collect()
}

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_data_points");
    let engine = SmartSuggestionEngine::default();

    for count in [10_usize, 45, 200] {
        let history = generate_history(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &history, |b, history| {
            b.iter(|| {
                engine.extract_data_points(
                    black_box("Bench Press"),
                    black_box(history),
                    None,
                    as_of(),
                )
            });
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let engine = SmartSuggestionEngine::default();
    let history = generate_history(45);
    let points = engine.extract_data_points("Bench Press", &history, None, as_of());

    c.bench_function("analyze_pattern", |b| {
        b.iter(|| engine.analyze_pattern(black_box(&points), true, as_of()));
    });
}

fn bench_full_suggestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_smart_suggestion_sets");
    let engine = SmartSuggestionEngine::default();
    let history = generate_history(45);
    let equipment = vec!["barbell".to_owned()];

    for sets in [3_usize, 5, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(sets), &sets, |b, &sets| {
            let request = SuggestionRequest {
                exercise_name: "Squat",
                history: &history,
                is_compound: true,
                equipment: &equipment,
                most_recent_sets: &[],
                requested_set_count: sets,
                exclude_session_id: None,
            };
            b.iter(|| engine.create_smart_suggestion_sets(black_box(&request), as_of()));
        });
    }

    group.finish();
}

fn bench_in_session(c: &mut Criterion) {
    let engine = SmartSuggestionEngine::default();
    let history = generate_history(45);
    let points = engine.extract_data_points("Deadlift", &history, None, as_of());
    let planned = vec![SetLog::planned(100.0, 10); 5];
    let actual = SetDetail {
        weight: 150.0,
        reps: 5,
    };

    c.bench_function("adapt_next_set", |b| {
        b.iter(|| {
            engine.adapt_next_set(
                black_box(SetDetail {
                    weight: 100.0,
                    reps: 8,
                }),
                black_box(actual),
                &["barbell"],
                true,
            )
        });
    });

    c.bench_function("detect_pattern_shift", |b| {
        b.iter(|| {
            engine.detect_pattern_shift(
                0,
                black_box(actual),
                black_box(&planned),
                black_box(&points),
                4,
                &["barbell"],
                true,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_extraction,
    bench_analysis,
    bench_full_suggestion,
    bench_in_session,
);
criterion_main!(benches);
