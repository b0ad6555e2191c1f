// ABOUTME: Training pattern classification for one exercise's session history
// ABOUTME: Detects rep cycling, progressive overload, deload history, and set arrangement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are tiny

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clustering::{detect_rep_cycling, ClusterData};
use crate::config::suggestion::{ArrangementConfig, DeloadConfig, SmartSuggestionConfig};
use crate::data_extractor::ExerciseDataPoint;
use crate::statistics::{mean, std_dev, LinearRegression};

/// How weight varies across set positions within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetArrangement {
    /// Weight climbs from first to last set
    PyramidUp,
    /// Weight drops from first to last set
    PyramidDown,
    /// Weight stays roughly constant
    StraightAcross,
}

/// Why the analyzer refused to classify a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FallbackReason {
    /// Not enough qualifying sessions
    InsufficientHistory {
        /// Sessions available
        sessions: usize,
        /// Sessions required
        required: usize,
    },
    /// The last session is too long ago for the trend to still apply
    StaleHistory {
        /// Days between the last session and the analysis instant
        days_since_last: i64,
    },
}

/// Classified training pattern with its variant-specific evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "pattern")]
pub enum TrainingPattern {
    /// No usable pattern; suggestions reuse the last session
    Fallback {
        /// What disqualified the history
        reason: FallbackReason,
    },
    /// Top-set weight climbing at consistent reps
    ProgressiveOverload {
        /// Top-set weight gained per session
        slope: f64,
        /// Goodness of fit of the weight trend
        r_squared: f64,
    },
    /// Alternating heavy and light sessions
    RepCycling {
        /// Heavy/light partition and next-session prediction
        clusters: ClusterData,
        /// Fraction of adjacent sessions crossing the median reps
        alternation_rate: f64,
    },
    /// History contains deliberate volume drops
    Deload {
        /// Number of detected deload sessions
        deload_events: usize,
        /// Whether the most recent session is itself a deload
        last_session_is_deload: bool,
    },
    /// Nothing stands out
    Stable,
}

/// Discriminant of [`TrainingPattern`] without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// See [`TrainingPattern::Fallback`]
    Fallback,
    /// See [`TrainingPattern::ProgressiveOverload`]
    ProgressiveOverload,
    /// See [`TrainingPattern::RepCycling`]
    RepCycling,
    /// See [`TrainingPattern::Deload`]
    Deload,
    /// See [`TrainingPattern::Stable`]
    Stable,
}

impl PatternKind {
    /// Stable identifier used in logs and JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::ProgressiveOverload => "progressive_overload",
            Self::RepCycling => "rep_cycling",
            Self::Deload => "deload",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TrainingPattern {
    /// Variant discriminant
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::Fallback { .. } => PatternKind::Fallback,
            Self::ProgressiveOverload { .. } => PatternKind::ProgressiveOverload,
            Self::RepCycling { .. } => PatternKind::RepCycling,
            Self::Deload { .. } => PatternKind::Deload,
            Self::Stable => PatternKind::Stable,
        }
    }

    /// Short explanation suitable for the logging UI
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Fallback {
                reason: FallbackReason::InsufficientHistory { sessions, required },
            } => format!(
                "Not enough history yet ({sessions} of {required} sessions) - repeating your last workout"
            ),
            Self::Fallback {
                reason: FallbackReason::StaleHistory { days_since_last },
            } => format!(
                "Last session was {days_since_last} days ago - repeating it instead of extrapolating"
            ),
            Self::ProgressiveOverload { slope, .. } => {
                format!("Steady progression of about {slope:.1} kg per session")
            }
            Self::RepCycling { clusters, .. } => {
                if clusters.next_is_heavy {
                    "Heavy/light cycling detected - next session is a heavy day".to_owned()
                } else {
                    "Heavy/light cycling detected - next session is a light day".to_owned()
                }
            }
            Self::Deload {
                last_session_is_deload: true,
                ..
            } => "Coming off a deload - resuming from your pre-deload baseline".to_owned(),
            Self::Deload { deload_events, .. } => {
                format!("Periodized training with {deload_events} deload(s) in recent history")
            }
            Self::Stable => "Consistent training - small progression suggested".to_owned(),
        }
    }
}

/// Result of classifying a data-point series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    /// Classified pattern and its evidence
    pub pattern: TrainingPattern,
    /// Confidence in the classification (0-1)
    pub confidence: f64,
    /// Within-session arrangement detected over recent sessions
    pub set_arrangement: SetArrangement,
    /// Series the classification was computed from, oldest first
    pub data_points: Vec<ExerciseDataPoint>,
}

impl PatternAnalysis {
    /// Pattern discriminant
    #[must_use]
    pub const fn kind(&self) -> PatternKind {
        self.pattern.kind()
    }
}

/// Classify a data-point series into a training pattern
///
/// Insufficient or stale history always yields [`TrainingPattern::Fallback`].
/// Otherwise rep cycling is checked first, then progressive overload, then deload
/// history, defaulting to [`TrainingPattern::Stable`].
#[must_use]
pub fn analyze_pattern(
    data_points: &[ExerciseDataPoint],
    is_compound: bool,
    as_of: DateTime<Utc>,
    config: &SmartSuggestionConfig,
) -> PatternAnalysis {
    let set_arrangement = detect_set_arrangement(data_points, &config.arrangement);
    let (pattern, confidence) = classify(data_points, is_compound, as_of, config);

    debug!(
        pattern = %pattern.kind(),
        confidence,
        arrangement = ?set_arrangement,
        sessions = data_points.len(),
        is_compound,
        "Classified training pattern"
    );

    PatternAnalysis {
        pattern,
        confidence,
        set_arrangement,
        data_points: data_points.to_vec(),
    }
}

fn classify(
    points: &[ExerciseDataPoint],
    is_compound: bool,
    as_of: DateTime<Utc>,
    config: &SmartSuggestionConfig,
) -> (TrainingPattern, f64) {
    let required = config.history.min_sessions_for_pattern;
    if points.len() < required {
        let reason = FallbackReason::InsufficientHistory {
            sessions: points.len(),
            required,
        };
        return (TrainingPattern::Fallback { reason }, 0.0);
    }

    // Recent data outranks pattern strength: a long break invalidates any trend
    if let Some(last) = points.last() {
        let days_since_last = (as_of - last.date).num_days();
        if days_since_last > config.history.stale_after_days {
            let reason = FallbackReason::StaleHistory { days_since_last };
            return (TrainingPattern::Fallback { reason }, 0.0);
        }
    }

    if let Some((clusters, alternation_rate)) = detect_rep_cycling(points, &config.rep_cycling) {
        return (
            TrainingPattern::RepCycling {
                clusters,
                alternation_rate,
            },
            alternation_rate.clamp(0.0, 1.0),
        );
    }

    if let Some(trend) = detect_progressive_overload(points, is_compound, config) {
        return (
            TrainingPattern::ProgressiveOverload {
                slope: trend.slope,
                r_squared: trend.r_squared,
            },
            trend.r_squared,
        );
    }

    let deload_events = count_deload_events(points, &config.deload);
    if deload_events > 0 && history_weeks(points) >= config.deload.min_history_weeks {
        let last_session_is_deload = is_deload_session(points, points.len() - 1, &config.deload);
        let extra = (deload_events - 1) as f64;
        let confidence = config
            .deload
            .confidence_per_event
            .mul_add(extra, config.deload.base_confidence)
            .min(config.deload.max_confidence);
        return (
            TrainingPattern::Deload {
                deload_events,
                last_session_is_deload,
            },
            confidence,
        );
    }

    (TrainingPattern::Stable, config.stable_confidence)
}

/// Classify within-session weight arrangement over the most recent sessions
///
/// Only sessions with at least two set positions vote. A class needs at least
/// half of the votes and must beat the other pyramid direction; anything else,
/// including no votes at all, is straight across.
#[must_use]
pub fn detect_set_arrangement(
    points: &[ExerciseDataPoint],
    config: &ArrangementConfig,
) -> SetArrangement {
    let eligible: Vec<&ExerciseDataPoint> = points
        .iter()
        .rev()
        .filter(|p| p.set_count() >= 2)
        .take(config.max_sessions_considered)
        .collect();

    let mut up = 0_usize;
    let mut down = 0_usize;
    let mut votes = 0_usize;
    for point in eligible {
        let (Some(first), Some(last)) = (point.set_details.first(), point.set_details.last())
        else {
            continue;
        };
        if first.weight <= 0.0 {
            continue;
        }
        votes += 1;
        let change = (last.weight - first.weight) / first.weight;
        if change > config.pyramid_up_threshold {
            up += 1;
        } else if -change > config.pyramid_down_threshold {
            down += 1;
        }
    }

    if votes == 0 {
        return SetArrangement::StraightAcross;
    }
    if up * 2 >= votes && up > down {
        SetArrangement::PyramidUp
    } else if down * 2 >= votes && down > up {
        SetArrangement::PyramidDown
    } else {
        SetArrangement::StraightAcross
    }
}

/// Top-set weight regression when it qualifies as progressive overload
fn detect_progressive_overload(
    points: &[ExerciseDataPoint],
    is_compound: bool,
    config: &SmartSuggestionConfig,
) -> Option<LinearRegression> {
    let top_weights: Vec<f64> = points.iter().map(|p| p.top_set_weight).collect();
    let trend = LinearRegression::fit(&top_weights);

    // Changing rep targets confound the weight trend
    let reps: Vec<f64> = points.iter().map(|p| p.average_reps).collect();
    let reps_consistent = std_dev(&reps) < config.progression.max_reps_stddev;

    let qualifies = trend.slope > 0.0
        && trend.r_squared >= config.progression.min_r_squared(is_compound)
        && reps_consistent;
    qualifies.then_some(trend)
}

/// Whether the session at `index` drops volume sharply versus its trailing window
#[must_use]
pub fn is_deload_session(
    points: &[ExerciseDataPoint],
    index: usize,
    config: &DeloadConfig,
) -> bool {
    if index < config.trailing_window || index >= points.len() {
        return false;
    }
    let trailing: Vec<f64> = points[index - config.trailing_window..index]
        .iter()
        .map(|p| p.total_volume)
        .collect();
    let trailing_avg = mean(&trailing);
    trailing_avg > 0.0
        && points[index].total_volume < trailing_avg * (1.0 - config.volume_drop_threshold)
}

fn count_deload_events(points: &[ExerciseDataPoint], config: &DeloadConfig) -> usize {
    (config.trailing_window..points.len())
        .filter(|&index| is_deload_session(points, index, config))
        .count()
}

fn history_weeks(points: &[ExerciseDataPoint]) -> i64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => (last.date - first.date).num_days() / 7,
        _ => 0,
    }
}
