// ABOUTME: Live in-session adaptation configuration
// ABOUTME: Configures next-set ladder margins, pattern-shift deviation, and rep range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::constants::reps;
use serde::{Deserialize, Serialize};

/// Next-set ladder after each completed set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Reps above target that mark a set as easy
    pub easy_rep_margin: u32,
    /// Weight increase after an easy set (fraction)
    pub easy_bump: f64,
    /// Reps below target still treated as a small miss
    pub miss_rep_margin: u32,
    /// Weight reduction after a large miss (fraction)
    pub miss_reduction: f64,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            easy_rep_margin: 3,
            easy_bump: 0.05,
            miss_rep_margin: 2,
            miss_reduction: 0.10,
        }
    }
}

/// Live deviation detection and re-planning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternShiftConfig {
    /// Relative weight deviation that counts as significant
    pub weight_deviation_threshold: f64,
    /// Relative rep deviation that counts as significant
    pub reps_deviation_threshold: f64,
    /// Share of the similarity score taken by weight difference
    pub weight_similarity_weight: f64,
    /// Share of the similarity score taken by rep difference
    pub reps_similarity_weight: f64,
    /// Closest historical session must score at or below this distance
    pub max_similarity_distance: f64,
    /// Bump applied to sets taken from the matched session
    pub matched_bump: f64,
    /// Per-set compounding bump when no session matches
    pub projection_bump: f64,
}

impl Default for PatternShiftConfig {
    fn default() -> Self {
        Self {
            weight_deviation_threshold: 0.15,
            reps_deviation_threshold: 0.25,
            weight_similarity_weight: 0.6,
            reps_similarity_weight: 0.4,
            max_similarity_distance: 0.25,
            matched_bump: 0.025,
            projection_bump: 0.02,
        }
    }
}

/// Bounds on every returned rep target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepRangeConfig {
    /// Lowest rep target ever returned
    pub min_reps: u32,
    /// Highest rep target ever returned
    pub max_reps: u32,
    /// Rep target when no history exists
    pub fallback_reps: u32,
}

impl RepRangeConfig {
    /// Clamp a rep count into range
    #[must_use]
    pub fn clamp(&self, reps: u32) -> u32 {
        reps.max(self.min_reps).min(self.max_reps)
    }

    /// Round a fractional rep projection and clamp it into range
    #[must_use]
    pub fn clamp_f64(&self, reps: f64) -> u32 {
        if !reps.is_finite() {
            return self.min_reps;
        }
        let rounded = reps.round().max(0.0);
        let max = f64::from(self.max_reps);
        self.clamp(if rounded > max { self.max_reps } else { rounded as u32 })
    }
}

impl Default for RepRangeConfig {
    fn default() -> Self {
        Self {
            min_reps: reps::MIN_REPS,
            max_reps: reps::MAX_REPS,
            fallback_reps: reps::FALLBACK_REPS,
        }
    }
}
