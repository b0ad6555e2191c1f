// ABOUTME: History window and set-arrangement configuration for suggestions
// ABOUTME: Controls lookback, retained session count, staleness, and pyramid thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Which past sessions feed the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Sessions older than this many days are ignored
    pub lookback_days: i64,
    /// Only the most recent N qualifying sessions are kept
    pub max_sessions: usize,
    /// Fewer sessions than this always yields the fallback pattern
    pub min_sessions_for_pattern: usize,
    /// A gap longer than this since the last session yields the fallback pattern
    pub stale_after_days: i64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            lookback_days: 90,
            max_sessions: 10,
            min_sessions_for_pattern: 3,
            stale_after_days: 21,
        }
    }
}

/// Within-session weight arrangement detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArrangementConfig {
    /// Number of most recent sessions inspected
    pub max_sessions_considered: usize,
    /// Last set heavier than first by more than this fraction counts as pyramid up
    pub pyramid_up_threshold: f64,
    /// First set heavier than last by more than this fraction counts as pyramid down
    pub pyramid_down_threshold: f64,
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            max_sessions_considered: 6,
            pyramid_up_threshold: 0.05,
            pyramid_down_threshold: 0.05,
        }
    }
}
