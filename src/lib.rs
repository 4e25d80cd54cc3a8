// ABOUTME: Main library entry point for the daily calorie and macro goal engine
// ABOUTME: Goal derivation, goal resolution, goal history, editing, onboarding, and daily progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Goals
//!
//! Computes a user's daily calorie and macronutrient goals and keeps them
//! consistent wherever they are shown or edited.
//!
//! ## Features
//!
//! - **Goal derivation**: Mifflin-St Jeor BMR, activity-scaled TDEE, weight goal
//!   adjustment and diet-type macro split, with protein anchored to body weight
//! - **Goal resolution**: macro goals stored as grams or as a percentage of the
//!   calorie goal, resolved to grams on demand
//! - **Goal history**: append-only, best-effort audit of goal changes after onboarding
//! - **Onboarding**: explicit state and reducer, with auto recalculation
//! - **Daily progress**: food log totals against resolved goals
//!
//! ## Architecture
//!
//! - **`macro_goals_core`**: errors, constants and models shared by every module
//! - **`intelligence`**: pure derivation and resolution engines
//! - **`goal_history`**: store port and recorder for goal change records
//! - **`goal_editor`** / **`onboarding`**: workflows built on the engines
//!
//! ## Example
//!
//! ```rust
//! use macro_goals::intelligence::derive_goals;
//! use macro_goals::models::BiometricProfile;
//!
//! let profile = BiometricProfile::from_codes(30, 175.0, 70.0, "male", 3, 3, 4);
//! let goals = derive_goals(&profile);
//! assert_eq!(goals.calories, 2556);
//! assert_eq!(goals.protein_g, 140);
//! ```

/// Goal derivation configuration
pub mod config;

/// Food log totals against resolved goals
pub mod daily_progress;

/// Goal editing workflow
pub mod goal_editor;

/// Goal change audit records and history store
pub mod goal_history;

/// Goal derivation and resolution engines
pub mod intelligence;

/// Logging configuration and domain log helpers
pub mod logging;

/// Onboarding state and reducer
pub mod onboarding;

pub use macro_goals_core::{constants, errors, models};
