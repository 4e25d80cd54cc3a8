// ABOUTME: Food logging models for daily intake tracking against goals
// ABOUTME: MealType, FoodItem per-serving nutrients, and portion-scaled FoodLogEntry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::nutrition::DEFAULT_SERVING_SIZE;

/// Meal a food entry is logged against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Fuel before training
    PreWorkout,
    /// Recovery after training
    PostWorkout,
}

impl MealType {
    /// Display order of meals in a day
    pub const ORDER: [Self; 6] = [
        Self::Breakfast,
        Self::Lunch,
        Self::Dinner,
        Self::Snack,
        Self::PreWorkout,
        Self::PostWorkout,
    ];

    /// Parse meal type from string, defaulting to breakfast
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" => Self::Snack,
            "pre_workout" => Self::PreWorkout,
            "post_workout" => Self::PostWorkout,
            _ => Self::Breakfast,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::PreWorkout => "Pre-Workout",
            Self::PostWorkout => "Post-Workout",
        }
    }
}

/// Food as found in the catalogue, with nutrients per serving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Catalogue identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Food name
    pub name: String,
    /// Brand name (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Serving size amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Serving unit (g, oz, cup, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_unit: Option<String>,
    /// Calories per serving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Fiber per serving (grams)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
}

impl FoodItem {
    /// Declared serving size, or 100 when the catalogue has none
    #[must_use]
    pub fn serving_size_or_default(&self) -> f64 {
        self.serving_size
            .filter(|size| size.is_finite() && *size > 0.0)
            .unwrap_or(DEFAULT_SERVING_SIZE)
    }
}

/// A portion of food logged against a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Food name at logging time
    pub food_name: String,
    /// Meal the portion belongs to
    pub meal_type: MealType,
    /// Portion amount in `portion_unit`
    pub portion: f64,
    /// Portion unit
    pub portion_unit: String,
    /// Multiple of the serving size eaten
    pub servings: f64,
    /// Calories eaten (whole kcal)
    pub calories: f64,
    /// Protein eaten (g, one decimal)
    pub protein_g: f64,
    /// Carbohydrates eaten (g, one decimal)
    pub carbs_g: f64,
    /// Fat eaten (g, one decimal)
    pub fat_g: f64,
    /// Fiber eaten (g)
    pub fiber_g: f64,
    /// When the portion was eaten
    pub logged_at: DateTime<Utc>,
}

impl FoodLogEntry {
    /// Scale a food's per-serving nutrients to the logged portion.
    ///
    /// Non-numeric or negative portions count as zero.
    #[must_use]
    pub fn from_portion(
        food: &FoodItem,
        portion: f64,
        portion_unit: impl Into<String>,
        meal_type: MealType,
        logged_at: DateTime<Utc>,
    ) -> Self {
        let portion = if portion.is_finite() && portion > 0.0 {
            portion
        } else {
            0.0
        };
        let servings = portion / food.serving_size_or_default();
        let scaled = |per_serving: Option<f64>| per_serving.unwrap_or(0.0) * servings;

        Self {
            id: Uuid::new_v4(),
            food_name: food.name.clone(),
            meal_type,
            portion,
            portion_unit: portion_unit.into(),
            servings,
            calories: scaled(food.calories).round(),
            protein_g: round_tenth(scaled(food.protein_g)),
            carbs_g: round_tenth(scaled(food.carbs_g)),
            fat_g: round_tenth(scaled(food.fat_g)),
            fiber_g: scaled(food.fiber_g),
            logged_at,
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
