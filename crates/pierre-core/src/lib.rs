// ABOUTME: Core types and constants for Pierre strength training intelligence
// ABOUTME: Foundation crate with workout history models, equipment catalog, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre strength
//! training engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Model-level error types (`ModelError`)
//! - **constants**: Rep ranges and equipment increments
//! - **models**: Workout history (`WorkoutSession`, `ExerciseLog`, `SetLog`) and
//!   the equipment catalog (`Equipment`, `WeightIncrement`)

/// Model parsing and validation errors
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (workout sessions, sets, equipment)
pub mod models;
