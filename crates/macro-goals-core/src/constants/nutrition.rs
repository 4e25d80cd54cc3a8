// ABOUTME: Nutrition constants for calorie and macronutrient goal computation
// ABOUTME: Energy densities per gram, fallback goal set, and the daily calorie safety floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Energy density of protein (kcal per gram)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram)
pub const CARBS_KCAL_PER_G: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Calorie goal used when biometrics are incomplete
pub const DEFAULT_CALORIES: u32 = 2000;

/// Protein goal (g) used when biometrics are incomplete
pub const DEFAULT_PROTEIN_G: u32 = 150;

/// Carbohydrate goal (g) used when biometrics are incomplete
pub const DEFAULT_CARBS_G: u32 = 200;

/// Fat goal (g) used when biometrics are incomplete
pub const DEFAULT_FAT_G: u32 = 67;

/// Never recommend fewer calories than this per day
pub const MIN_DAILY_CALORIES: u32 = 1200;

/// Protein anchored to body weight (g per kg)
pub const PROTEIN_G_PER_KG: f64 = 2.0;

/// Serving size assumed for food items that do not declare one
pub const DEFAULT_SERVING_SIZE: f64 = 100.0;

/// Upper bound of a percent-of-calories goal (percentage points)
pub const MAX_GOAL_PERCENT: f64 = 100.0;
