// ABOUTME: Per-set weight and rep targets for the next session of one exercise
// ABOUTME: Dispatches on the classified pattern and projects each set position independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: rep counts are small and clamped

//! # Suggestion Generator
//!
//! Every set position is regressed on its own history: the third set of a
//! pyramid moves independently of the first. Weights are clamped to a safe band
//! around the last value for that position before rounding to the equipment
//! increment, and rounding up is only allowed when the weight trend is positive.

use pierre_core::models::{SetLog, WeightIncrement};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::suggestion::SmartSuggestionConfig;
use crate::data_extractor::{ExerciseDataPoint, SetDetail};
use crate::pattern_analyzer::{
    detect_set_arrangement, PatternAnalysis, PatternKind, SetArrangement, TrainingPattern,
};
use crate::statistics::{mean, LinearRegression};

/// Planned sets for the next session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartSuggestionResult {
    /// One planned entry per requested set, all with `completed = false`
    pub sets: Vec<SetLog>,
    /// Pattern the plan was derived from
    pub pattern: PatternKind,
    /// Confidence of that pattern (0-1)
    pub confidence: f64,
    /// Arrangement the targets were shaped by (the predicted cluster's for rep cycling)
    pub set_arrangement: SetArrangement,
}

/// Inputs shared by every projection in one generation pass
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    /// Rounding step for the exercise's equipment
    pub increment: WeightIncrement,
    /// Compound movements tolerate larger jumps
    pub is_compound: bool,
    /// Thresholds
    pub config: &'a SmartSuggestionConfig,
}

/// Produce targets for `requested_set_count` sets from a pattern analysis
///
/// `most_recent_sets` are the athlete's last actual sets for this exercise and
/// only matter for the fallback pattern.
#[must_use]
pub fn generate_suggestions(
    analysis: &PatternAnalysis,
    most_recent_sets: &[SetLog],
    requested_set_count: usize,
    ctx: SuggestionContext<'_>,
) -> SmartSuggestionResult {
    let points = analysis.data_points.as_slice();
    let straight_across = analysis.set_arrangement == SetArrangement::StraightAcross;

    let (mut sets, set_arrangement) = match &analysis.pattern {
        TrainingPattern::Fallback { .. } => (
            fallback_sets(most_recent_sets, points, requested_set_count, ctx),
            analysis.set_arrangement,
        ),
        TrainingPattern::ProgressiveOverload { .. }
        | TrainingPattern::Stable
        | TrainingPattern::Deload {
            last_session_is_deload: false,
            ..
        } => (
            with_straight_across(
                project_set_positions(points, requested_set_count, ctx),
                straight_across,
            ),
            analysis.set_arrangement,
        ),
        TrainingPattern::Deload {
            last_session_is_deload: true,
            ..
        } => {
            let baseline = pre_deload_baseline(points, ctx.config.deload.baseline_sessions);
            (
                with_straight_across(
                    project_set_positions(baseline, requested_set_count, ctx),
                    straight_across,
                ),
                analysis.set_arrangement,
            )
        }
        TrainingPattern::RepCycling { clusters, .. } => {
            // The predicted cluster's own shape decides, not the whole series
            let pool = clusters.next_cluster();
            let cluster_arrangement = detect_set_arrangement(pool, &ctx.config.arrangement);
            (
                with_straight_across(
                    project_set_positions(pool, requested_set_count, ctx),
                    cluster_arrangement == SetArrangement::StraightAcross,
                ),
                cluster_arrangement,
            )
        }
    };

    for set in &mut sets {
        set.reps = ctx.config.reps.clamp(set.reps);
        set.completed = false;
    }

    debug!(
        pattern = %analysis.kind(),
        requested_set_count,
        first_weight = sets.first().map(|s| s.weight),
        "Generated smart suggestion sets"
    );

    SmartSuggestionResult {
        sets,
        pattern: analysis.kind(),
        confidence: analysis.confidence,
        set_arrangement,
    }
}

/// Regress every set position independently across `pool`
///
/// Positions run up to the larger of the requested count and the longest
/// historical session, then the result is cut to the requested count. A
/// position without history clones the previous position's target; the first
/// position falls back to the pool's overall average instead.
#[must_use]
pub fn project_set_positions(
    pool: &[ExerciseDataPoint],
    requested_set_count: usize,
    ctx: SuggestionContext<'_>,
) -> Vec<SetLog> {
    let max_historical = pool.iter().map(ExerciseDataPoint::set_count).max().unwrap_or(0);
    let positions = requested_set_count.max(max_historical);
    let overall_average = overall_average(pool, ctx);

    let mut targets: Vec<SetLog> = Vec::with_capacity(positions);
    for position in 0..positions {
        let history: Vec<SetDetail> = pool
            .iter()
            .filter_map(|point| point.set_details.get(position).copied())
            .collect();

        let target = match history.as_slice() {
            [] => targets.last().copied().unwrap_or(overall_average),
            [only] => single_point_target(*only, ctx),
            _ => regressed_target(&history, ctx),
        };
        targets.push(target);
    }

    targets.truncate(requested_set_count);
    targets
}

fn regressed_target(history: &[SetDetail], ctx: SuggestionContext<'_>) -> SetLog {
    let weights: Vec<f64> = history.iter().map(|s| s.weight).collect();
    let reps: Vec<f64> = history.iter().map(|s| f64::from(s.reps)).collect();
    let weight_trend = LinearRegression::fit(&weights);
    let rep_trend = LinearRegression::fit(&reps);

    let last = history[history.len() - 1];
    let progression = &ctx.config.progression;
    let upper = last.weight * (1.0 + progression.max_increase(ctx.is_compound));
    let lower = last.weight * (1.0 - progression.max_decrease);

    let projected = (last.weight + weight_trend.slope).clamp(lower, upper);
    let weight = ctx
        .increment
        .round_within(projected, weight_trend.slope > 0.0, lower, upper);

    // Added load keeps the rep target; otherwise let reps drift with their trend
    let reps = if weight > last.weight + f64::EPSILON {
        last.reps
    } else {
        let projected_reps = (f64::from(last.reps) + rep_trend.slope).round().max(0.0);
        let cap = f64::from(last.reps.saturating_add(progression.max_rep_increase));
        projected_reps.min(cap) as u32
    };

    SetLog::planned(weight, reps)
}

fn single_point_target(only: SetDetail, ctx: SuggestionContext<'_>) -> SetLog {
    let bumped = only.weight * (1.0 + ctx.config.progression.single_point_bump);
    SetLog::planned(ctx.increment.round_down(bumped), only.reps)
}

fn overall_average(pool: &[ExerciseDataPoint], ctx: SuggestionContext<'_>) -> SetLog {
    if pool.is_empty() {
        return SetLog::planned(0.0, ctx.config.reps.fallback_reps);
    }
    let weights: Vec<f64> = pool.iter().map(|p| p.average_weight).collect();
    let reps: Vec<f64> = pool.iter().map(|p| p.average_reps).collect();
    SetLog::planned(
        ctx.increment.round_down(mean(&weights)),
        ctx.config.reps.clamp_f64(mean(&reps)),
    )
}

/// Same weight on every set, one more rep on each subsequent set
fn with_straight_across(mut sets: Vec<SetLog>, straight_across: bool) -> Vec<SetLog> {
    if !straight_across {
        return sets;
    }
    if let Some(first) = sets.first().copied() {
        for (offset, set) in (0_u32..).zip(sets.iter_mut()) {
            set.weight = first.weight;
            set.reps = first.reps.saturating_add(offset);
        }
    }
    sets
}

/// The sessions immediately preceding the latest (deload) session
fn pre_deload_baseline(
    points: &[ExerciseDataPoint],
    baseline_sessions: usize,
) -> &[ExerciseDataPoint] {
    let end = points.len().saturating_sub(1);
    let start = end.saturating_sub(baseline_sessions);
    &points[start..end]
}

/// Repeat the most recent session one-for-one
///
/// Prefers the caller-provided `most_recent_sets`, then the latest data point.
/// Missing positions repeat the last available set; with no history at all every
/// set defaults to zero weight at the fallback rep target.
fn fallback_sets(
    most_recent_sets: &[SetLog],
    points: &[ExerciseDataPoint],
    requested_set_count: usize,
    ctx: SuggestionContext<'_>,
) -> Vec<SetLog> {
    let source: Vec<SetLog> = if most_recent_sets.is_empty() {
        points
            .last()
            .map(|point| {
                point
                    .set_details
                    .iter()
                    .map(|s| SetLog::planned(s.weight, s.reps))
                    .collect()
            })
            .unwrap_or_default()
    } else {
        most_recent_sets.to_vec()
    };

    let default_set = SetLog::planned(0.0, ctx.config.reps.fallback_reps);
    (0..requested_set_count)
        .map(|position| {
            let set = source
                .get(position)
                .or_else(|| source.last())
                .copied()
                .unwrap_or(default_set);
            SetLog::planned(set.weight.max(0.0), set.reps)
        })
        .collect()
}
