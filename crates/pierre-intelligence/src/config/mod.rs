// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports smart suggestion configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Smart suggestion engine configuration (history window, pattern thresholds, adaptation)
pub mod suggestion;

pub use suggestion::{ConfigError, SmartSuggestionConfig};
