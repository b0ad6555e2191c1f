// ABOUTME: Turns raw workout history into an ordered per-exercise time series
// ABOUTME: Filters by lookback window, summarizes each session, keeps the most recent N
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: set counts are tiny

use chrono::{DateTime, Duration, Utc};
use pierre_core::models::{SetLog, WorkoutSession};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::suggestion::HistoryConfig;
use crate::statistics::mean;

/// Weight and reps at one set position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetDetail {
    /// Load in kilograms
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl From<&SetLog> for SetDetail {
    fn from(set: &SetLog) -> Self {
        Self {
            weight: set.weight,
            reps: set.reps,
        }
    }
}

/// One past session's summary for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDataPoint {
    /// Identifier of the source session
    pub session_id: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Mean weight across weighted sets
    pub average_weight: f64,
    /// Mean reps across weighted sets
    pub average_reps: f64,
    /// Heaviest set's weight
    pub top_set_weight: f64,
    /// Heaviest set's reps
    pub top_set_reps: u32,
    /// Number of completed weighted sets
    pub total_sets: usize,
    /// Sum of weight × reps over weighted sets
    pub total_volume: f64,
    /// Per-position weight/reps in performed order, without gaps
    pub set_details: Vec<SetDetail>,
}

impl ExerciseDataPoint {
    /// Summarize one session, or `None` when it has no completed weighted set
    #[must_use]
    pub fn from_session(session: &WorkoutSession, exercise_name: &str) -> Option<Self> {
        let set_details: Vec<SetDetail> = session
            .sets_for(exercise_name)
            .filter(|set| set.is_weighted_work())
            .map(SetDetail::from)
            .collect();

        if set_details.is_empty() {
            return None;
        }

        let weights: Vec<f64> = set_details.iter().map(|s| s.weight).collect();
        let reps: Vec<f64> = set_details.iter().map(|s| f64::from(s.reps)).collect();

        // Heaviest set; on equal weight the set with more reps is the top set
        let top = set_details.iter().copied().fold(set_details[0], |best, s| {
            let same_weight = (s.weight - best.weight).abs() < f64::EPSILON;
            if s.weight > best.weight || (same_weight && s.reps > best.reps) {
                s
            } else {
                best
            }
        });

        Some(Self {
            session_id: session.id.clone(),
            date: session.date,
            average_weight: mean(&weights),
            average_reps: mean(&reps),
            top_set_weight: top.weight,
            top_set_reps: top.reps,
            total_sets: set_details.len(),
            total_volume: set_details
                .iter()
                .map(|s| s.weight * f64::from(s.reps))
                .sum(),
            set_details,
        })
    }

    /// Number of recorded set positions
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_details.len()
    }

    /// Set at `position`, or the last set when the session was shorter
    #[must_use]
    pub fn set_at_or_last(&self, position: usize) -> Option<SetDetail> {
        self.set_details
            .get(position)
            .or_else(|| self.set_details.last())
            .copied()
    }
}

/// Build the ordered, windowed series of data points for one exercise
///
/// Sessions outside the lookback window (relative to `as_of`), the excluded
/// in-progress session, and sessions without any completed weighted set for the
/// exercise are skipped. The result is sorted oldest first and truncated to the
/// most recent `max_sessions` entries.
#[must_use]
pub fn extract_data_points(
    exercise_name: &str,
    history: &[WorkoutSession],
    exclude_session_id: Option<&str>,
    as_of: DateTime<Utc>,
    config: &HistoryConfig,
) -> Vec<ExerciseDataPoint> {
    // A window reaching past chrono's range means no cutoff at all
    let cutoff = Duration::try_days(config.lookback_days)
        .and_then(|window| as_of.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let mut points: Vec<ExerciseDataPoint> = history
        .iter()
        .filter(|session| exclude_session_id != Some(session.id.as_str()))
        .filter(|session| session.date >= cutoff)
        .filter_map(|session| ExerciseDataPoint::from_session(session, exercise_name))
        .collect();

    points.sort_by_key(|point| point.date);

    if points.len() > config.max_sessions {
        let excess = points.len() - config.max_sessions;
        points.drain(..excess);
    }

    debug!(
        exercise = exercise_name,
        sessions_in_history = history.len(),
        data_points = points.len(),
        "Extracted exercise data points"
    );

    points
}
