// ABOUTME: Core data models for the Pierre strength training engine
// ABOUTME: Re-exports workout history and equipment catalog types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! These models are the contract between the workout logging application and the
//! suggestion engine. The application owns persistence; the engine only ever reads
//! a snapshot of [`WorkoutSession`] values and hands back planned [`SetLog`] entries.
//!
//! ## Design Principles
//!
//! - **Lenient input**: missing fields deserialize as zero/absent instead of failing
//! - **Serializable**: all models round-trip through JSON for the logging UI
//! - **Type Safe**: equipment is a closed enum with a known rounding increment

mod equipment;
mod workout;

// Workout history domain
pub use workout::{ExerciseLog, SetLog, WorkoutSession};

// Equipment domain
pub use equipment::{Equipment, WeightIncrement};
