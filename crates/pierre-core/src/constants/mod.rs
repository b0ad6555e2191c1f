// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for rep ranges and equipment weight increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Rep range limits applied to every suggested set
pub mod reps {
    /// Lowest rep target ever suggested
    pub const MIN_REPS: u32 = 1;
    /// Highest rep target ever suggested
    pub const MAX_REPS: u32 = 30;
    /// Rep target used when no history exists at all
    pub const FALLBACK_REPS: u32 = 8;
}

/// Smallest adjustable weight step per equipment type (kg)
pub mod increments {
    /// Used when the equipment list is empty or unrecognized
    pub const DEFAULT: f64 = 2.5;
    /// Barbell with fractional plates
    pub const BARBELL: f64 = 2.5;
    /// Fixed dumbbell rack
    pub const DUMBBELL: f64 = 2.0;
    /// Kettlebell sizes
    pub const KETTLEBELL: f64 = 4.0;
    /// Selectorized machine stack
    pub const MACHINE: f64 = 5.0;
    /// Cable stack
    pub const CABLE: f64 = 2.5;
    /// Smith machine bar
    pub const SMITH_MACHINE: f64 = 2.5;
    /// EZ curl bar
    pub const EZ_BAR: f64 = 2.5;
}
