// ABOUTME: Goal computation engines for nutrition targets
// ABOUTME: Derivation from biometrics and resolution of percent-of-calories goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure goal computations. Neither engine returns errors: incomplete inputs
//! fall back to defaults and division edge cases resolve to zero.

/// Daily calorie and macro targets from biometrics
pub mod goal_derivation;
/// Conversion between stored goal representations and absolute values
pub mod goal_resolution;

pub use goal_derivation::{
    derive_goals, derive_goals_with_config, explain_derivation, round_half_up,
    DerivationBreakdown, DerivationSource, DerivedGoals,
};
pub use goal_resolution::{
    convert_amount, macro_percentages, resolve_absolute, resolve_amount, resolve_goals,
    resolve_percent,
};
