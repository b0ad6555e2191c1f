// ABOUTME: Integration tests for training pattern classification
// ABOUTME: Covers fallback gating, overload, rep cycling, deload, stable, and set arrangement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use common::{as_of, history, points, session, straight_history, BENCH};
use pierre_strength::intelligence::{
    FallbackReason, PatternAnalysis, PatternKind, SetArrangement, SmartSuggestionEngine,
    TrainingPattern,
};
use pierre_strength::models::WorkoutSession;

fn analyze(history: &[WorkoutSession], is_compound: bool) -> PatternAnalysis {
    common::init_test_logging();
    SmartSuggestionEngine::default().analyze_pattern(&points(history), is_compound, as_of())
}

#[test]
fn test_insufficient_history_falls_back() {
    let analysis = analyze(&straight_history(3, &[100.0, 105.0], &[8, 8], 3), true);

    assert_eq!(
        analysis.pattern,
        TrainingPattern::Fallback {
            reason: FallbackReason::InsufficientHistory {
                sessions: 2,
                required: 3
            }
        }
    );
    assert!(analysis.confidence.abs() < f64::EPSILON);
}

#[test]
fn test_stale_history_falls_back() {
    let history = vec![
        session("a", as_of() - Duration::days(40), BENCH, &[(100.0, 8)]),
        session("b", as_of() - Duration::days(35), BENCH, &[(105.0, 8)]),
        session("c", as_of() - Duration::days(30), BENCH, &[(110.0, 8)]),
    ];

    let analysis = analyze(&history, true);

    assert_eq!(
        analysis.pattern,
        TrainingPattern::Fallback {
            reason: FallbackReason::StaleHistory {
                days_since_last: 30
            }
        }
    );
    assert_eq!(analysis.kind(), PatternKind::Fallback);
}

#[test]
fn test_linear_top_set_growth_is_progressive_overload() {
    let history = straight_history(3, &[100.0, 105.0, 110.0, 115.0, 120.0], &[8; 5], 3);

    let analysis = analyze(&history, true);

    let TrainingPattern::ProgressiveOverload { slope, r_squared } = analysis.pattern else {
        panic!("expected progressive overload, got {:?}", analysis.pattern);
    };
    assert!((slope - 5.0).abs() < 1e-9);
    assert!(r_squared > 0.99);
    assert!((analysis.confidence - r_squared).abs() < f64::EPSILON);
    assert_eq!(analysis.set_arrangement, SetArrangement::StraightAcross);
    assert_eq!(analysis.data_points.len(), 5);
}

#[test]
fn test_declining_weights_are_not_progressive_overload() {
    let history = straight_history(3, &[120.0, 115.0, 110.0, 105.0, 100.0], &[8; 5], 3);

    let analysis = analyze(&history, true);

    assert_eq!(analysis.kind(), PatternKind::Stable);
    assert!((analysis.confidence - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_noisy_trend_needs_stricter_fit_for_compound() {
    // R² of this series sits between the isolation and compound thresholds
    let weights = [100.0, 112.5, 107.5, 115.0, 120.0];
    let history = straight_history(3, &weights, &[8; 5], 3);

    let compound = analyze(&history, true);
    let isolation = analyze(&history, false);

    assert_eq!(compound.kind(), PatternKind::Stable);
    assert_eq!(isolation.kind(), PatternKind::ProgressiveOverload);
}

#[test]
fn test_alternating_reps_are_rep_cycling() {
    let heavy = vec![(80.0, 6); 3];
    let light = vec![(60.0, 12); 3];
    let sessions = vec![
        light.clone(),
        heavy.clone(),
        light.clone(),
        heavy.clone(),
        light,
        heavy,
    ];

    let analysis = analyze(&history(BENCH, 3, &sessions), true);

    let TrainingPattern::RepCycling {
        clusters,
        alternation_rate,
    } = &analysis.pattern
    else {
        panic!("expected rep cycling, got {:?}", analysis.pattern);
    };
    assert_eq!(clusters.heavy.len(), 3);
    assert_eq!(clusters.light.len(), 3);
    assert!(clusters.heavy.iter().all(|p| (p.average_reps - 6.0).abs() < 1e-9));
    assert!(clusters.light.iter().all(|p| (p.average_reps - 12.0).abs() < 1e-9));
    assert!((alternation_rate - 1.0).abs() < 1e-9);
    // Last session was heavy, so the next one is light
    assert!(!clusters.next_is_heavy);
    assert!((analysis.confidence - 1.0).abs() < 1e-9);
}

#[test]
fn test_small_rep_variation_is_not_rep_cycling() {
    let sessions: Vec<Vec<(f64, u32)>> = [8, 10, 8, 10, 8, 10]
        .iter()
        .map(|&reps| vec![(100.0, reps); 3])
        .collect();

    let analysis = analyze(&history(BENCH, 3, &sessions), true);

    assert_ne!(analysis.kind(), PatternKind::RepCycling);
}

#[test]
fn test_monotonic_reps_are_not_rep_cycling() {
    let sessions: Vec<Vec<(f64, u32)>> = [4, 6, 8, 10, 12, 14]
        .iter()
        .map(|&reps| vec![(80.0, reps); 3])
        .collect();

    let analysis = analyze(&history(BENCH, 3, &sessions), true);

    assert_ne!(analysis.kind(), PatternKind::RepCycling);
}

#[test]
fn test_final_volume_drop_is_deload() {
    let mut sessions = vec![vec![(100.0, 8); 3]; 5];
    sessions.push(vec![(60.0, 8); 3]);

    let analysis = analyze(&history(BENCH, 7, &sessions), true);

    assert_eq!(
        analysis.pattern,
        TrainingPattern::Deload {
            deload_events: 1,
            last_session_is_deload: true
        }
    );
    assert!((analysis.confidence - 0.6).abs() < 1e-9);
}

#[test]
fn test_mid_history_deload_is_detected() {
    let mut sessions = vec![vec![(100.0, 8); 3]; 7];
    sessions[3] = vec![(60.0, 8); 3];

    let analysis = analyze(&history(BENCH, 7, &sessions), true);

    assert_eq!(
        analysis.pattern,
        TrainingPattern::Deload {
            deload_events: 1,
            last_session_is_deload: false
        }
    );
}

#[test]
fn test_deload_needs_enough_weeks_of_history() {
    // Same shape as a deload but compressed into a fortnight
    let mut sessions = vec![vec![(100.0, 8); 3]; 5];
    sessions.push(vec![(60.0, 8); 3]);

    let analysis = analyze(&history(BENCH, 2, &sessions), true);

    assert_eq!(analysis.kind(), PatternKind::Stable);
}

#[test]
fn test_pyramid_arrangements() {
    let up = vec![vec![(60.0, 10), (70.0, 8), (80.0, 6)]; 4];
    let down = vec![vec![(80.0, 6), (70.0, 8), (60.0, 10)]; 4];

    assert_eq!(
        analyze(&history(BENCH, 3, &up), true).set_arrangement,
        SetArrangement::PyramidUp
    );
    assert_eq!(
        analyze(&history(BENCH, 3, &down), true).set_arrangement,
        SetArrangement::PyramidDown
    );
}

#[test]
fn test_single_set_sessions_are_straight_across() {
    let analysis = analyze(&straight_history(3, &[100.0, 100.0, 100.0], &[5; 3], 1), true);

    assert_eq!(analysis.set_arrangement, SetArrangement::StraightAcross);
}

#[test]
fn test_pattern_serializes_with_tag() {
    let history = straight_history(3, &[100.0, 105.0, 110.0, 115.0, 120.0], &[8; 5], 3);
    let analysis = analyze(&history, true);

    let json = serde_json::to_value(&analysis.pattern).unwrap();

    assert_eq!(json["pattern"], "progressive_overload");
    assert_eq!(analysis.kind().to_string(), "progressive_overload");
    assert!(analysis.pattern.description().contains("5.0 kg"));
}
