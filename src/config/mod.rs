// ABOUTME: Configuration module for goal derivation parameters
// ABOUTME: Exposes the nutrition formula configuration and its validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Every constant the goal derivation formula uses lives in
//! [`GoalDerivationConfig`]. Defaults match the published Mifflin-St Jeor
//! coefficients and activity factors; hosts may deserialize their own copy and
//! pass it to `derive_goals_with_config`.

/// Configuration validation errors
pub mod error;
/// Goal derivation formula configuration
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, DietSplit, DietSplitConfig, FallbackGoalsConfig,
    GoalDerivationConfig, TargetConfig, WeightGoalAdjustmentConfig,
};
