// ABOUTME: Command implementations for the Pierre Strength CLI
// ABOUTME: Wires parsed arguments into the smart suggestion engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::Utc;
use pierre_strength::intelligence::{SetDetail, SmartSuggestionEngine, SuggestionRequest};
use serde_json::json;

use crate::helpers::{load_history, to_json};
use crate::ExerciseArgs;

/// Classify the training pattern and print the analysis
pub fn analyze(target: &ExerciseArgs) -> Result<String> {
    let history = load_history(&target.history)?;
    let engine = SmartSuggestionEngine::from_global();
    let as_of = target.as_of.unwrap_or_else(Utc::now);

    let points = engine.extract_data_points(
        &target.exercise,
        &history,
        target.exclude_session.as_deref(),
        as_of,
    );
    let analysis = engine.analyze_pattern(&points, target.compound, as_of);

    to_json(&json!({
        "exercise": target.exercise,
        "pattern": analysis.kind(),
        "confidence": analysis.confidence,
        "set_arrangement": analysis.set_arrangement,
        "description": analysis.pattern.description(),
        "sessions_analyzed": analysis.data_points.len(),
        "details": analysis.pattern,
    }))
}

/// Plan the next session and print the suggested sets
pub fn suggest(target: &ExerciseArgs, sets: usize, equipment: &[String]) -> Result<String> {
    let history = load_history(&target.history)?;
    let engine = SmartSuggestionEngine::from_global();
    let as_of = target.as_of.unwrap_or_else(Utc::now);

    let request = SuggestionRequest {
        exercise_name: &target.exercise,
        history: &history,
        is_compound: target.compound,
        equipment,
        most_recent_sets: &[],
        requested_set_count: sets,
        exclude_session_id: target.exclude_session.as_deref(),
    };
    let result = engine.create_smart_suggestion_sets(&request, as_of);
    to_json(&result)
}

/// Compute and print the next set's target
pub fn adapt(
    suggested_weight: f64,
    suggested_reps: u32,
    actual_weight: f64,
    actual_reps: u32,
    equipment: &[String],
    compound: bool,
) -> Result<String> {
    let engine = SmartSuggestionEngine::from_global();
    let target = engine.adapt_next_set(
        SetDetail {
            weight: suggested_weight,
            reps: suggested_reps,
        },
        SetDetail {
            weight: actual_weight,
            reps: actual_reps,
        },
        equipment,
        compound,
    );
    to_json(&target)
}
