// ABOUTME: Helper functions for the Pierre Strength CLI
// ABOUTME: Loads workout history JSON exports and renders engine output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use pierre_strength::models::WorkoutSession;
use serde::Serialize;
use tracing::info;

/// Read a JSON array of workout sessions
pub fn load_history(path: &Path) -> Result<Vec<WorkoutSession>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read history file {}: {e}", path.display()))?;
    let sessions: Vec<WorkoutSession> = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("Invalid history JSON in {}: {e}", path.display()))?;
    info!(
        sessions = sessions.len(),
        path = %path.display(),
        "Loaded workout history"
    );
    Ok(sessions)
}

/// Pretty-print a value as JSON
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| anyhow!("Failed to serialize output: {e}"))
}
