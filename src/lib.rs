// ABOUTME: Main library entry point for the Pierre strength suggestion engine
// ABOUTME: Re-exports core models and the intelligence engine, and owns logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Training-load suggestions for strength exercises. Given an athlete's logged
//! sessions, the engine classifies the training pattern in use (progressive
//! overload, heavy/light cycling, deload, stable, or fallback) and plans the
//! next session's per-set weight and rep targets, then adapts them live as
//! sets are completed.
//!
//! ## Architecture
//!
//! - **`pierre-core`**: workout history models and the equipment catalog
//! - **`pierre-intelligence`**: extraction, classification, generation, adaptation
//! - **logging**: `tracing-subscriber` setup for the CLI and host applications
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use pierre_strength::intelligence::{SmartSuggestionEngine, SuggestionRequest};
//! use pierre_strength::models::{ExerciseLog, SetLog, WorkoutSession};
//!
//! let now = Utc::now();
//! let history: Vec<WorkoutSession> = (0..5_u32)
//!     .map(|i| {
//!         let weight = 100.0 + 5.0 * f64::from(i);
//!         WorkoutSession::new(
//!             format!("session-{i}"),
//!             now - Duration::days(i64::from(5 - i) * 3),
//!             vec![ExerciseLog::new("Squat", vec![SetLog::completed(weight, 8); 3])],
//!         )
//!     })
//!     .collect();
//!
//! let equipment = vec!["barbell".to_owned()];
//! let request = SuggestionRequest {
//!     exercise_name: "Squat",
//!     history: &history,
//!     is_compound: true,
//!     equipment: &equipment,
//!     most_recent_sets: &[],
//!     requested_set_count: 3,
//!     exclude_session_id: None,
//! };
//!
//! let result = SmartSuggestionEngine::default().create_smart_suggestion_sets(&request, now);
//! assert_eq!(result.sets.len(), 3);
//! ```

/// Structured logging configuration
pub mod logging;

/// Workout history models and equipment catalog
pub use pierre_core::models;

/// Shared constants (rep ranges, equipment increments)
pub use pierre_core::constants;

/// Core model errors
pub use pierre_core::errors;

/// Suggestion engine
pub use pierre_intelligence as intelligence;
