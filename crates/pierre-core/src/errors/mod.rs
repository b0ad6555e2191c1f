// ABOUTME: Error types for core workout model parsing
// ABOUTME: Raised when external identifiers cannot be mapped onto core types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors produced while building core models from external input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Equipment identifier is not part of the catalog
    #[error("Unknown equipment: {0}")]
    UnknownEquipment(String),
}
