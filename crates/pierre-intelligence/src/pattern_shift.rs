// ABOUTME: Live pattern-shift detection and re-planning of the remaining sets
// ABOUTME: Matches the athlete's actual set against history and re-targets from the analog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use pierre_core::models::{SetLog, WeightIncrement};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::suggestion::SmartSuggestionConfig;
use crate::data_extractor::{ExerciseDataPoint, SetDetail};
use crate::statistics::relative_difference;

/// Outcome of a pattern-shift check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternShift {
    /// Whether the remaining plan should be replaced
    pub shifted: bool,
    /// Replacement targets for the remaining sets; empty when not shifted
    pub new_targets: Vec<SetLog>,
    /// Date of the historical session used as the analog, if one matched
    pub matched_session_date: Option<DateTime<Utc>>,
    /// Relative deviation of the actual weight from the plan
    pub weight_deviation: f64,
    /// Relative deviation of the actual reps from the plan
    pub reps_deviation: f64,
}

impl PatternShift {
    fn unchanged(weight_deviation: f64, reps_deviation: f64) -> Self {
        Self {
            shifted: false,
            new_targets: Vec::new(),
            matched_session_date: None,
            weight_deviation,
            reps_deviation,
        }
    }
}

/// Decide whether the rest of the session should be re-planned
///
/// Compares the completed set against the original suggestion at the same
/// position. A significant deviation re-targets the remaining sets from the
/// historical session whose same-position set most resembles what the athlete
/// just did, or projects forward from the actual set when nothing is close.
// Long signature: mirrors the call made by the logging UI after every set
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn detect_pattern_shift(
    completed_set_index: usize,
    actual: SetDetail,
    original_suggested_sets: &[SetLog],
    data_points: &[ExerciseDataPoint],
    remaining_set_count: usize,
    increment: WeightIncrement,
    is_compound: bool,
    config: &SmartSuggestionConfig,
) -> PatternShift {
    let shift_config = &config.pattern_shift;

    let Some(planned) = original_suggested_sets
        .get(completed_set_index)
        .or_else(|| original_suggested_sets.last())
    else {
        return PatternShift::unchanged(0.0, 0.0);
    };

    let weight_deviation = relative_difference(actual.weight, planned.weight);
    let reps_deviation = relative_difference(f64::from(actual.reps), f64::from(planned.reps));
    let significant = weight_deviation > shift_config.weight_deviation_threshold
        || reps_deviation > shift_config.reps_deviation_threshold;

    if !significant {
        debug!(
            weight_deviation,
            reps_deviation,
            "Set within plan tolerance, keeping remaining targets"
        );
        return PatternShift::unchanged(weight_deviation, reps_deviation);
    }

    let best_match = closest_session(completed_set_index, actual, data_points, config)
        .filter(|(_, distance)| *distance <= shift_config.max_similarity_distance);

    let (new_targets, matched_session_date) = match best_match {
        Some((session, distance)) => {
            debug!(
                matched_session = %session.session_id,
                distance,
                "Pattern shift: re-targeting from closest historical session"
            );
            let targets = (0..remaining_set_count)
                .map(|offset| {
                    let position = completed_set_index.saturating_add(1).saturating_add(offset);
                    let source = session.set_at_or_last(position).unwrap_or(actual);
                    let weight =
                        increment.round_down(source.weight * (1.0 + shift_config.matched_bump));
                    SetLog::planned(weight, config.reps.clamp(source.reps))
                })
                .collect();
            (targets, Some(session.date))
        }
        None => {
            debug!("Pattern shift: no close historical session, projecting from actual set");
            (
                project_from_actual(actual, remaining_set_count, increment, is_compound, config),
                None,
            )
        }
    };

    PatternShift {
        shifted: true,
        new_targets,
        matched_session_date,
        weight_deviation,
        reps_deviation,
    }
}

/// Weighted distance between the athlete's set and a historical set
///
/// Weight dominates because it best identifies which training mode the athlete
/// is in today.
#[must_use]
pub fn similarity_distance(
    actual: SetDetail,
    historical: SetDetail,
    config: &SmartSuggestionConfig,
) -> f64 {
    let shift_config = &config.pattern_shift;
    let weight_diff = relative_difference(historical.weight, actual.weight);
    let reps_diff = relative_difference(f64::from(historical.reps), f64::from(actual.reps));
    shift_config
        .weight_similarity_weight
        .mul_add(weight_diff, shift_config.reps_similarity_weight * reps_diff)
}

/// Historical session closest to the actual set; most recent wins ties
fn closest_session<'a>(
    position: usize,
    actual: SetDetail,
    data_points: &'a [ExerciseDataPoint],
    config: &SmartSuggestionConfig,
) -> Option<(&'a ExerciseDataPoint, f64)> {
    let mut best: Option<(&ExerciseDataPoint, f64)> = None;
    for point in data_points.iter().rev() {
        let Some(historical) = point.set_at_or_last(position) else {
            continue;
        };
        let distance = similarity_distance(actual, historical, config);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((point, distance));
        }
    }
    best
}

/// Compounding bump per subsequent set, capped at the movement's max increase
fn project_from_actual(
    actual: SetDetail,
    remaining_set_count: usize,
    increment: WeightIncrement,
    is_compound: bool,
    config: &SmartSuggestionConfig,
) -> Vec<SetLog> {
    let ceiling = actual.weight * (1.0 + config.progression.max_increase(is_compound));
    let step = 1.0 + config.pattern_shift.projection_bump;
    let reps = config.reps.clamp(actual.reps);

    let mut targets = Vec::with_capacity(remaining_set_count);
    let mut weight = actual.weight.max(0.0);
    for _ in 0..remaining_set_count {
        weight = (weight * step).min(ceiling);
        targets.push(SetLog::planned(increment.round_down(weight), reps));
    }
    targets
}
