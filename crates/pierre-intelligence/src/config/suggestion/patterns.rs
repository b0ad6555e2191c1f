// ABOUTME: Pattern classification thresholds for the smart suggestion engine
// ABOUTME: Configures rep cycling, progressive overload regression, and deload detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Pattern Classification Configuration
//!
//! These values were tuned against real training logs. Changing them changes which
//! pattern an athlete's history is classified as, so treat them as a behavioral
//! contract rather than free parameters.

use serde::{Deserialize, Serialize};

/// Heavy/light rep cycling detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepCyclingConfig {
    /// The heavy/light split never sits below this many average reps
    pub light_threshold_floor_reps: f64,
    /// Each cluster needs at least this many sessions
    pub min_cluster_size: usize,
    /// Standard deviation of per-session average reps must exceed this
    pub min_reps_stddev: f64,
    /// Fraction of adjacent sessions crossing the median required
    pub min_alternation_rate: f64,
    /// Sessions inspected when predicting the next session's cluster
    pub prediction_window: usize,
    /// Flip rate within the prediction window treated as regular alternation
    pub regular_alternation_rate: f64,
}

impl Default for RepCyclingConfig {
    fn default() -> Self {
        Self {
            light_threshold_floor_reps: 11.0,
            min_cluster_size: 2,
            min_reps_stddev: 2.0,
            min_alternation_rate: 0.6,
            prediction_window: 4,
            regular_alternation_rate: 0.5,
        }
    }
}

/// Progressive overload detection and per-set projection limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// R² required for compound movements
    pub compound_min_r_squared: f64,
    /// R² required for isolation movements
    pub isolation_min_r_squared: f64,
    /// Rep counts must be at least this consistent for a weight trend to count
    pub max_reps_stddev: f64,
    /// Largest single-session increase for compound movements (fraction)
    pub compound_max_increase: f64,
    /// Largest single-session increase for isolation movements (fraction)
    pub isolation_max_increase: f64,
    /// Largest single-session decrease (fraction)
    pub max_decrease: f64,
    /// Bump applied to a set position with a single historical data point
    pub single_point_bump: f64,
    /// Projected reps never exceed the last value by more than this
    pub max_rep_increase: u32,
}

impl ProgressionConfig {
    /// R² threshold for the movement type
    #[must_use]
    pub const fn min_r_squared(&self, is_compound: bool) -> f64 {
        if is_compound {
            self.compound_min_r_squared
        } else {
            self.isolation_min_r_squared
        }
    }

    /// Max per-session increase for the movement type
    #[must_use]
    pub const fn max_increase(&self, is_compound: bool) -> f64 {
        if is_compound {
            self.compound_max_increase
        } else {
            self.isolation_max_increase
        }
    }
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            compound_min_r_squared: 0.8,
            isolation_min_r_squared: 0.7,
            max_reps_stddev: 2.0,
            compound_max_increase: 0.10,
            isolation_max_increase: 0.05,
            max_decrease: 0.10,
            single_point_bump: 0.025,
            max_rep_increase: 2,
        }
    }
}

/// Deload history detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeloadConfig {
    /// Volume below the trailing average by more than this fraction is a deload
    pub volume_drop_threshold: f64,
    /// Number of preceding sessions forming the trailing average
    pub trailing_window: usize,
    /// History must span at least this many weeks
    pub min_history_weeks: i64,
    /// Sessions before a fresh deload used as the baseline plan
    pub baseline_sessions: usize,
    /// Confidence for a single detected deload
    pub base_confidence: f64,
    /// Extra confidence per additional deload event
    pub confidence_per_event: f64,
    /// Confidence ceiling
    pub max_confidence: f64,
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            volume_drop_threshold: 0.30,
            trailing_window: 3,
            min_history_weeks: 4,
            baseline_sessions: 3,
            base_confidence: 0.6,
            confidence_per_event: 0.1,
            max_confidence: 0.9,
        }
    }
}
