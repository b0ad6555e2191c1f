// ABOUTME: Next-set ladder applied after each completed set during a session
// ABOUTME: Bumps, holds, or reduces load based on reps achieved versus the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::WeightIncrement;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::suggestion::SmartSuggestionConfig;

/// Which rung of the ladder the completed set landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetAdjustment {
    /// Comfortably beat the target: add weight
    Increase,
    /// Hit the target: repeat
    Hold,
    /// Narrowly missed: keep the weight, accept fewer reps
    AcceptLowerReps,
    /// Missed badly: drop weight
    Decrease,
}

/// Target for the upcoming set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NextSetTarget {
    /// Load in kilograms
    pub weight: f64,
    /// Rep target
    pub reps: u32,
    /// Ladder rung that produced this target
    pub adjustment: SetAdjustment,
}

/// Compute the next set's target from the set just performed
///
/// The athlete's actual weight becomes the new baseline; the original target
/// reps remain the yardstick.
#[must_use]
pub fn adapt_next_set(
    suggested_weight: f64,
    suggested_reps: u32,
    actual_weight: f64,
    actual_reps: u32,
    increment: WeightIncrement,
    is_compound: bool,
    config: &SmartSuggestionConfig,
) -> NextSetTarget {
    let ladder = &config.adaptation;
    let baseline = actual_weight.max(0.0);

    let (weight, reps, adjustment) =
        if actual_reps >= suggested_reps.saturating_add(ladder.easy_rep_margin) {
            let ceiling = baseline * (1.0 + config.progression.max_increase(is_compound));
            let bumped = (baseline * (1.0 + ladder.easy_bump)).min(ceiling);
            (
                increment.round_down(bumped),
                suggested_reps,
                SetAdjustment::Increase,
            )
        } else if actual_reps >= suggested_reps {
            (baseline, suggested_reps, SetAdjustment::Hold)
        } else if actual_reps >= suggested_reps.saturating_sub(ladder.miss_rep_margin) {
            (baseline, actual_reps, SetAdjustment::AcceptLowerReps)
        } else {
            (
                increment.round_down(baseline * (1.0 - ladder.miss_reduction)),
                suggested_reps,
                SetAdjustment::Decrease,
            )
        };

    debug!(
        suggested_weight,
        suggested_reps,
        actual_weight,
        actual_reps,
        next_weight = weight,
        adjustment = ?adjustment,
        "Adapted next set"
    );

    NextSetTarget {
        weight,
        reps: config.reps.clamp(reps),
        adjustment,
    }
}
