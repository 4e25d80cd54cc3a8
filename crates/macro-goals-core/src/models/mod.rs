// ABOUTME: Core data models for biometrics, goals, goal history, and food logging
// ABOUTME: Re-exports BiometricProfile, DailyGoals, GoalChangeRecord and food log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain records exchanged between the goal engine and the surrounding
//! application (profile store, history store, dashboard).
//!
//! ## Design Principles
//!
//! - **Invalid states are unrepresentable**: a calorie goal is a bare kcal amount,
//!   only macros carry a `GoalAmount` that may be a percentage
//! - **Serializable**: every record round-trips through serde for storage layers
//! - **Lossy inputs stay at the edge**: raw onboarding codes are mapped once by
//!   `BiometricProfile::from_codes`

mod biometrics;
mod goal_history;
mod goals;
mod nutrition;

pub use biometrics::{ActivityLevel, BiometricProfile, DietType, Sex, WeightGoal};
pub use goal_history::{ChangeSource, GoalChangeRecord};
pub use goals::{DailyGoals, Goal, GoalAmount, InputMode, Nutrient, ResolvedGoals};
pub use nutrition::{FoodItem, FoodLogEntry, MealType};
