// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Builds deterministic workout histories relative to a fixed analysis instant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_strength`

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_strength::intelligence::{ExerciseDataPoint, SmartSuggestionConfig};
use pierre_strength::models::{ExerciseLog, SetLog, WorkoutSession};
use std::sync::Once;

pub const BENCH: &str = "Bench Press";

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Fixed analysis instant so every test is deterministic
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// One session of `exercise` with completed sets
pub fn session(
    id: &str,
    date: DateTime<Utc>,
    exercise: &str,
    sets: &[(f64, u32)],
) -> WorkoutSession {
    WorkoutSession::new(
        id,
        date,
        vec![ExerciseLog::new(
            exercise,
            sets.iter()
                .map(|&(weight, reps)| SetLog::completed(weight, reps))
                .collect(),
        )],
    )
}

/// Sessions oldest first, `spacing_days` apart, the last one `spacing_days` before [`as_of`]
pub fn history(
    exercise: &str,
    spacing_days: i64,
    sessions: &[Vec<(f64, u32)>],
) -> Vec<WorkoutSession> {
    let count = i64::try_from(sessions.len()).unwrap();
    (0_i64..)
        .zip(sessions)
        .map(|(i, sets)| {
            let days_ago = (count - i) * spacing_days;
            session(
                &format!("s{i}"),
                as_of() - Duration::days(days_ago),
                exercise,
                sets,
            )
        })
        .collect()
}

/// `set_count` identical sets per session, one session per entry of `weights`/`reps`
pub fn straight_history(
    spacing_days: i64,
    weights: &[f64],
    reps: &[u32],
    set_count: usize,
) -> Vec<WorkoutSession> {
    let sessions: Vec<Vec<(f64, u32)>> = weights
        .iter()
        .zip(reps)
        .map(|(&w, &r)| vec![(w, r); set_count])
        .collect();
    history(BENCH, spacing_days, &sessions)
}

/// Extract data points for [`BENCH`] with the default configuration
pub fn points(history: &[WorkoutSession]) -> Vec<ExerciseDataPoint> {
    let config = SmartSuggestionConfig::default();
    pierre_strength::intelligence::data_extractor::extract_data_points(
        BENCH,
        history,
        None,
        as_of(),
        &config.history,
    )
}

/// True when `value` is a non-negative multiple of `step`
pub fn is_multiple_of(value: f64, step: f64) -> bool {
    let ratio = value / step;
    value >= 0.0 && (ratio - ratio.round()).abs() < 1e-6
}
