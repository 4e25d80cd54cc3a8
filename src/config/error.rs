// ABOUTME: Configuration error types for goal derivation validation
// ABOUTME: Defines error variants for invalid ranges, split weights, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use macro_goals_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., non-positive activity factor)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Carbs and fat fractions of a diet split don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    /// Failed to parse a serialized configuration
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
