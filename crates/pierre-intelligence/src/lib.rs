// ABOUTME: Training-load suggestion engine for strength exercises
// ABOUTME: Classifies training patterns and plans per-set weight/rep targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Given an athlete's history for one exercise, the engine classifies the
//! training pattern in use and proposes weight/rep targets for the next
//! session, then adapts them live as sets are completed.
//!
//! ## Modules
//!
//! - **`data_extractor`**: history → ordered per-exercise data points
//! - **`pattern_analyzer`**: data points → [`PatternAnalysis`]
//! - **`clustering`**: heavy/light split for rep cycling
//! - **`suggestion_generator`**: analysis → [`SmartSuggestionResult`]
//! - **`intra_session`**: next-set ladder after each set
//! - **`pattern_shift`**: live re-planning on large deviations
//! - **`statistics`**: regression and descriptive statistics
//! - **`config`**: every threshold in one [`SmartSuggestionConfig`]

/// Heavy/light session clustering
pub mod clustering;

/// Engine thresholds and environment overrides
pub mod config;

/// History to data-point extraction
pub mod data_extractor;

/// Engine facade and function-level API
pub mod engine;

/// In-session next-set ladder
pub mod intra_session;

/// Training pattern classification
pub mod pattern_analyzer;

/// Live deviation detection and re-planning
pub mod pattern_shift;

/// Regression and descriptive statistics
pub mod statistics;

/// Per-set target generation
pub mod suggestion_generator;

pub use clustering::ClusterData;
pub use config::{ConfigError, SmartSuggestionConfig};
pub use data_extractor::{ExerciseDataPoint, SetDetail};
pub use engine::{
    adapt_next_set, analyze_pattern, create_smart_suggestion_sets, detect_pattern_shift,
    extract_data_points, SmartSuggestionEngine, SuggestionRequest,
};
pub use intra_session::{NextSetTarget, SetAdjustment};
pub use pattern_analyzer::{
    FallbackReason, PatternAnalysis, PatternKind, SetArrangement, TrainingPattern,
};
pub use pattern_shift::PatternShift;
pub use statistics::LinearRegression;
pub use suggestion_generator::{SmartSuggestionResult, SuggestionContext};
