// ABOUTME: Workout history models consumed by the strength suggestion engine
// ABOUTME: Sessions contain exercise logs, which contain individually logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged (or planned) set
///
/// Suggestions produced by the engine reuse this type with `completed = false`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetLog {
    /// Load lifted in kilograms
    #[serde(default)]
    pub weight: f64,
    /// Repetitions performed (or targeted)
    #[serde(default)]
    pub reps: u32,
    /// Whether the athlete actually finished this set
    #[serde(default)]
    pub completed: bool,
}

impl SetLog {
    /// A completed set, as logged by the athlete
    #[must_use]
    pub const fn completed(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            completed: true,
        }
    }

    /// A planned target that has not been performed yet
    #[must_use]
    pub const fn planned(weight: f64, reps: u32) -> Self {
        Self {
            weight,
            reps,
            completed: false,
        }
    }

    /// Whether this set counts as real weighted work
    #[must_use]
    pub fn is_weighted_work(&self) -> bool {
        self.completed && self.weight.is_finite() && self.weight > 0.0
    }

    /// Weight times reps
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// All sets logged for one exercise inside a session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Exercise name as shown in the logging UI (e.g. "Bench Press")
    pub name: String,
    /// Sets in the order they were performed
    #[serde(default)]
    pub sets: Vec<SetLog>,
}

impl ExerciseLog {
    /// Create an exercise log from its sets
    #[must_use]
    pub fn new(name: impl Into<String>, sets: Vec<SetLog>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }

    /// Case-insensitive exercise name comparison, ignoring surrounding whitespace
    #[must_use]
    pub fn matches(&self, exercise_name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(exercise_name.trim())
    }
}

/// A past (or in-progress) workout session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Stable identifier assigned by the history store
    pub id: String,
    /// When the session took place
    pub date: DateTime<Utc>,
    /// Exercises performed during the session
    #[serde(default)]
    pub exercises: Vec<ExerciseLog>,
}

impl WorkoutSession {
    /// Create a session
    #[must_use]
    pub fn new(id: impl Into<String>, date: DateTime<Utc>, exercises: Vec<ExerciseLog>) -> Self {
        Self {
            id: id.into(),
            date,
            exercises,
        }
    }

    /// Every set logged for `exercise_name`, in performed order
    ///
    /// An exercise logged more than once in the same session contributes all of its
    /// entries, concatenated in the order they appear.
    pub fn sets_for<'a>(&'a self, exercise_name: &'a str) -> impl Iterator<Item = &'a SetLog> + 'a {
        self.exercises
            .iter()
            .filter(move |exercise| exercise.matches(exercise_name))
            .flat_map(|exercise| exercise.sets.iter())
    }
}
