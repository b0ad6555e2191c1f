// ABOUTME: Smart suggestion configuration for strength training load targets
// ABOUTME: Orchestrates domain-specific threshold sections with validation and env loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Smart Suggestion Configuration Module
//!
//! Every empirically chosen threshold used by the suggestion engine lives here.
//!
//! # Module Structure
//!
//! - `history` - Lookback window, retained sessions, staleness, set arrangement
//! - `patterns` - Rep cycling, progressive overload, and deload detection
//! - `adaptation` - In-session ladder, pattern-shift re-planning, rep range

pub mod adaptation;
pub mod error;
pub mod history;
pub mod patterns;

pub use adaptation::{AdaptationConfig, PatternShiftConfig, RepRangeConfig};
pub use error::ConfigError;
pub use history::{ArrangementConfig, HistoryConfig};
pub use patterns::{DeloadConfig, ProgressionConfig, RepCyclingConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Longest accepted history window
pub const MAX_LOOKBACK_DAYS: i64 = 36_500;

/// Global configuration singleton
static SMART_SUGGESTION_CONFIG: OnceLock<SmartSuggestionConfig> = OnceLock::new();

/// Main smart suggestion configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartSuggestionConfig {
    /// Which sessions are considered
    pub history: HistoryConfig,
    /// Pyramid / straight-across detection
    pub arrangement: ArrangementConfig,
    /// Heavy/light cycling detection
    pub rep_cycling: RepCyclingConfig,
    /// Progressive overload detection and projection limits
    pub progression: ProgressionConfig,
    /// Deload detection
    pub deload: DeloadConfig,
    /// In-session next-set ladder
    pub adaptation: AdaptationConfig,
    /// Live deviation re-planning
    pub pattern_shift: PatternShiftConfig,
    /// Rep bounds
    pub reps: RepRangeConfig,
    /// Confidence reported for the stable pattern
    pub stable_confidence: f64,
}

impl Default for SmartSuggestionConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            arrangement: ArrangementConfig::default(),
            rep_cycling: RepCyclingConfig::default(),
            progression: ProgressionConfig::default(),
            deload: DeloadConfig::default(),
            adaptation: AdaptationConfig::default(),
            pattern_shift: PatternShiftConfig::default(),
            reps: RepRangeConfig::default(),
            stable_confidence: 0.5,
        }
    }
}

impl SmartSuggestionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SMART_SUGGESTION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load smart suggestion config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        let history = &self.history;
        if history.lookback_days <= 0 || history.stale_after_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "lookback_days and stale_after_days must be positive",
            ));
        }
        if history.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ConfigError::ValueOutOfRange(
                "lookback_days must not exceed 36500 (100 years)",
            ));
        }
        if history.max_sessions == 0 || history.min_sessions_for_pattern == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_sessions and min_sessions_for_pattern must be at least 1",
            ));
        }
        if history.min_sessions_for_pattern > history.max_sessions {
            return Err(ConfigError::InvalidRange(
                "min_sessions_for_pattern must be <= max_sessions",
            ));
        }

        if self.arrangement.max_sessions_considered == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "arrangement.max_sessions_considered must be at least 1",
            ));
        }
        Self::check_fraction(
            self.arrangement.pyramid_up_threshold,
            "pyramid_up_threshold must be in [0, 1)",
        )?;
        Self::check_fraction(
            self.arrangement.pyramid_down_threshold,
            "pyramid_down_threshold must be in [0, 1)",
        )?;

        let cycling = &self.rep_cycling;
        if cycling.min_cluster_size == 0 || cycling.prediction_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "min_cluster_size must be >= 1 and prediction_window >= 2",
            ));
        }
        Self::check_fraction(
            cycling.min_alternation_rate,
            "min_alternation_rate must be in [0, 1)",
        )?;

        let progression = &self.progression;
        if progression.isolation_min_r_squared > progression.compound_min_r_squared {
            return Err(ConfigError::InvalidRange(
                "compound R² threshold must be at least as strict as isolation",
            ));
        }
        Self::check_fraction(
            progression.compound_max_increase,
            "compound_max_increase must be in [0, 1)",
        )?;
        Self::check_fraction(
            progression.isolation_max_increase,
            "isolation_max_increase must be in [0, 1)",
        )?;
        Self::check_fraction(progression.max_decrease, "max_decrease must be in [0, 1)")?;

        let deload = &self.deload;
        Self::check_fraction(
            deload.volume_drop_threshold,
            "volume_drop_threshold must be in [0, 1)",
        )?;
        if deload.trailing_window == 0 || deload.baseline_sessions == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "deload windows must be at least 1 session",
            ));
        }
        if deload.base_confidence > deload.max_confidence || deload.max_confidence > 1.0 {
            return Err(ConfigError::InvalidRange(
                "deload base_confidence <= max_confidence <= 1.0 required",
            ));
        }

        Self::check_fraction(self.adaptation.easy_bump, "easy_bump must be in [0, 1)")?;
        Self::check_fraction(
            self.adaptation.miss_reduction,
            "miss_reduction must be in [0, 1)",
        )?;

        let shift = &self.pattern_shift;
        let weight_sum = shift.weight_similarity_weight + shift.reps_similarity_weight;
        if (weight_sum - 1.0).abs() > 0.01 {
            return Err(ConfigError::InvalidWeights(
                "Pattern-shift similarity weights must sum to 1.0",
            ));
        }
        if shift.weight_deviation_threshold <= 0.0 || shift.reps_deviation_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "pattern-shift deviation thresholds must be positive",
            ));
        }

        if self.reps.min_reps == 0 || self.reps.min_reps > self.reps.max_reps {
            return Err(ConfigError::InvalidRange(
                "reps: 1 <= min_reps <= max_reps required",
            ));
        }
        if !(0.0..=1.0).contains(&self.stable_confidence) {
            return Err(ConfigError::ValueOutOfRange(
                "stable_confidence must be in [0, 1]",
            ));
        }

        Ok(())
    }

    fn check_fraction(value: f64, message: &'static str) -> Result<(), ConfigError> {
        if (0.0..1.0).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(message))
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // History window
        Self::apply_env_var(
            "PIERRE_STRENGTH_LOOKBACK_DAYS",
            &mut self.history.lookback_days,
        )?;
        Self::apply_env_var(
            "PIERRE_STRENGTH_MAX_SESSIONS",
            &mut self.history.max_sessions,
        )?;
        Self::apply_env_var(
            "PIERRE_STRENGTH_MIN_SESSIONS",
            &mut self.history.min_sessions_for_pattern,
        )?;
        Self::apply_env_var(
            "PIERRE_STRENGTH_STALE_AFTER_DAYS",
            &mut self.history.stale_after_days,
        )?;

        // Progression limits
        Self::apply_env_var(
            "PIERRE_STRENGTH_COMPOUND_MAX_INCREASE",
            &mut self.progression.compound_max_increase,
        )?;
        Self::apply_env_var(
            "PIERRE_STRENGTH_ISOLATION_MAX_INCREASE",
            &mut self.progression.isolation_max_increase,
        )?;

        // Rep cycling
        Self::apply_env_var(
            "PIERRE_STRENGTH_REP_CYCLING_MIN_STDDEV",
            &mut self.rep_cycling.min_reps_stddev,
        )?;

        // In-session adaptation
        Self::apply_env_var(
            "PIERRE_STRENGTH_EASY_BUMP",
            &mut self.adaptation.easy_bump,
        )?;
        Self::apply_env_var(
            "PIERRE_STRENGTH_MISS_REDUCTION",
            &mut self.adaptation.miss_reduction,
        )?;

        // Rep range
        Self::apply_env_var("PIERRE_STRENGTH_MIN_REPS", &mut self.reps.min_reps)?;
        Self::apply_env_var("PIERRE_STRENGTH_MAX_REPS", &mut self.reps.max_reps)?;

        Ok(self)
    }
}
