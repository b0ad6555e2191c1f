// ABOUTME: Smart suggestion engine facade wiring extractor, analyzer, generator, and adapters
// ABOUTME: Exposes the function-level contract consumed by the workout logging application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Smart Suggestion Engine
//!
//! Before a session: extract → analyze → generate. After each completed set the
//! caller may run [`SmartSuggestionEngine::adapt_next_set`] for the simple ladder
//! and/or [`SmartSuggestionEngine::detect_pattern_shift`] for a full re-plan.
//!
//! The engine is synchronous and stateless. Callers hand in an already-fetched
//! snapshot of the history store and must not mutate it during a call.

use chrono::{DateTime, Utc};
use pierre_core::models::{SetLog, WeightIncrement, WorkoutSession};

use crate::config::SmartSuggestionConfig;
use crate::data_extractor::{self, ExerciseDataPoint, SetDetail};
use crate::intra_session::{self, NextSetTarget};
use crate::pattern_analyzer::{self, PatternAnalysis};
use crate::pattern_shift::{self, PatternShift};
use crate::suggestion_generator::{self, SmartSuggestionResult, SuggestionContext};

/// Everything needed to plan the next session of one exercise
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRequest<'a> {
    /// Exercise name as logged
    pub exercise_name: &'a str,
    /// Snapshot of the athlete's workout history
    pub history: &'a [WorkoutSession],
    /// Compound movements get stricter trend detection and larger jumps
    pub is_compound: bool,
    /// Equipment identifiers used for rounding (e.g. `"barbell"`)
    pub equipment: &'a [String],
    /// Last actual sets of this exercise, reused by the fallback pattern
    pub most_recent_sets: &'a [SetLog],
    /// How many sets the UI wants planned
    pub requested_set_count: usize,
    /// In-progress session that must not count as history
    pub exclude_session_id: Option<&'a str>,
}

/// Stateless suggestion engine bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct SmartSuggestionEngine {
    config: SmartSuggestionConfig,
}

impl SmartSuggestionEngine {
    /// Engine with an explicit configuration
    #[must_use]
    pub const fn new(config: SmartSuggestionConfig) -> Self {
        Self { config }
    }

    /// Engine using the process-wide configuration (defaults plus env overrides)
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(SmartSuggestionConfig::global().clone())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &SmartSuggestionConfig {
        &self.config
    }

    /// Ordered, windowed data points for one exercise
    #[must_use]
    pub fn extract_data_points(
        &self,
        exercise_name: &str,
        history: &[WorkoutSession],
        exclude_session_id: Option<&str>,
        as_of: DateTime<Utc>,
    ) -> Vec<ExerciseDataPoint> {
        data_extractor::extract_data_points(
            exercise_name,
            history,
            exclude_session_id,
            as_of,
            &self.config.history,
        )
    }

    /// Classify the training pattern behind a data-point series
    #[must_use]
    pub fn analyze_pattern(
        &self,
        data_points: &[ExerciseDataPoint],
        is_compound: bool,
        as_of: DateTime<Utc>,
    ) -> PatternAnalysis {
        pattern_analyzer::analyze_pattern(data_points, is_compound, as_of, &self.config)
    }

    /// Plan the next session's sets
    #[must_use]
    pub fn create_smart_suggestion_sets(
        &self,
        request: &SuggestionRequest<'_>,
        as_of: DateTime<Utc>,
    ) -> SmartSuggestionResult {
        let data_points = self.extract_data_points(
            request.exercise_name,
            request.history,
            request.exclude_session_id,
            as_of,
        );
        let analysis = self.analyze_pattern(&data_points, request.is_compound, as_of);
        let ctx = SuggestionContext {
            increment: WeightIncrement::for_equipment(request.equipment),
            is_compound: request.is_compound,
            config: &self.config,
        };
        suggestion_generator::generate_suggestions(
            &analysis,
            request.most_recent_sets,
            request.requested_set_count,
            ctx,
        )
    }

    /// Next set's target from the set just performed
    #[must_use]
    pub fn adapt_next_set<S: AsRef<str>>(
        &self,
        suggested: SetDetail,
        actual: SetDetail,
        equipment: &[S],
        is_compound: bool,
    ) -> NextSetTarget {
        intra_session::adapt_next_set(
            suggested.weight,
            suggested.reps,
            actual.weight,
            actual.reps,
            WeightIncrement::for_equipment(equipment),
            is_compound,
            &self.config,
        )
    }

    /// Re-plan the remaining sets when the athlete deviates significantly
    // Long signature: mirrors the call made by the logging UI after every set
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn detect_pattern_shift<S: AsRef<str>>(
        &self,
        completed_set_index: usize,
        actual: SetDetail,
        original_suggested_sets: &[SetLog],
        data_points: &[ExerciseDataPoint],
        remaining_set_count: usize,
        equipment: &[S],
        is_compound: bool,
    ) -> PatternShift {
        pattern_shift::detect_pattern_shift(
            completed_set_index,
            actual,
            original_suggested_sets,
            data_points,
            remaining_set_count,
            WeightIncrement::for_equipment(equipment),
            is_compound,
            &self.config,
        )
    }
}

/// Ordered data points for `exercise_name` as of now, using the global configuration
#[must_use]
pub fn extract_data_points(
    exercise_name: &str,
    history: &[WorkoutSession],
    exclude_session_id: Option<&str>,
) -> Vec<ExerciseDataPoint> {
    data_extractor::extract_data_points(
        exercise_name,
        history,
        exclude_session_id,
        Utc::now(),
        &SmartSuggestionConfig::global().history,
    )
}

/// Classify `data_points` as of now, using the global configuration
#[must_use]
pub fn analyze_pattern(data_points: &[ExerciseDataPoint], is_compound: bool) -> PatternAnalysis {
    pattern_analyzer::analyze_pattern(
        data_points,
        is_compound,
        Utc::now(),
        SmartSuggestionConfig::global(),
    )
}

/// Plan the next session as of now, using the global configuration
#[must_use]
pub fn create_smart_suggestion_sets(
    exercise_name: &str,
    history: &[WorkoutSession],
    is_compound: bool,
    equipment: &[String],
    most_recent_sets: &[SetLog],
    requested_set_count: usize,
    exclude_session_id: Option<&str>,
) -> SmartSuggestionResult {
    let request = SuggestionRequest {
        exercise_name,
        history,
        is_compound,
        equipment,
        most_recent_sets,
        requested_set_count,
        exclude_session_id,
    };
    SmartSuggestionEngine::from_global().create_smart_suggestion_sets(&request, Utc::now())
}

/// Next set's target, using the global configuration
#[must_use]
pub fn adapt_next_set<S: AsRef<str>>(
    suggested_weight: f64,
    suggested_reps: u32,
    actual_weight: f64,
    actual_reps: u32,
    equipment: &[S],
    is_compound: bool,
) -> NextSetTarget {
    intra_session::adapt_next_set(
        suggested_weight,
        suggested_reps,
        actual_weight,
        actual_reps,
        WeightIncrement::for_equipment(equipment),
        is_compound,
        SmartSuggestionConfig::global(),
    )
}

/// Pattern-shift check, using the global configuration
// Long signature: mirrors the call made by the logging UI after every set
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn detect_pattern_shift<S: AsRef<str>>(
    completed_set_index: usize,
    actual_weight: f64,
    actual_reps: u32,
    original_suggested_sets: &[SetLog],
    data_points: &[ExerciseDataPoint],
    remaining_set_count: usize,
    equipment: &[S],
    is_compound: bool,
) -> PatternShift {
    pattern_shift::detect_pattern_shift(
        completed_set_index,
        SetDetail {
            weight: actual_weight,
            reps: actual_reps,
        },
        original_suggested_sets,
        data_points,
        remaining_set_count,
        WeightIncrement::for_equipment(equipment),
        is_compound,
        SmartSuggestionConfig::global(),
    )
}
