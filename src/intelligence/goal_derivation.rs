// ABOUTME: Goal derivation engine computing daily calorie and macro targets from biometrics
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, weight goal adjustment, and diet-type macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Derivation Engine
//!
//! Turns a [`BiometricProfile`] into an absolute-mode goal set:
//!
//! 1. BMR from the Mifflin-St Jeor equation
//! 2. TDEE = BMR x activity factor
//! 3. Calorie target = round(TDEE + weight goal adjustment), floored at the minimum daily calories
//! 4. Protein anchored to body weight, independent of diet type
//! 5. Remaining calories split between carbs and fat by diet type
//!
//! Incomplete biometrics are not an error: the fallback goal set is returned.
//!
//! # Rounding
//!
//! Intermediate energy math stays in floating point. Only final calories and
//! grams are rounded, half away from zero for the positive values involved
//! (`round_half_up`), so 274.5 g becomes 275 g.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use macro_goals_core::constants::nutrition::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use macro_goals_core::models::{
    ActivityLevel, BiometricProfile, DailyGoals, DietType, Sex, WeightGoal,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{
    ActivityFactorsConfig, BmrConfig, DietSplitConfig, GoalDerivationConfig,
    WeightGoalAdjustmentConfig,
};

/// Round to the nearest integer with halves rounded up
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// How a derived goal set was produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DerivationSource {
    /// Computed from complete biometrics
    Biometrics,
    /// Fallback goal set because biometrics were incomplete
    Fallback,
}

/// Absolute daily targets produced by derivation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedGoals {
    /// Daily calories (kcal)
    pub calories: u32,
    /// Protein (g)
    pub protein_g: u32,
    /// Carbohydrates (g)
    pub carbs_g: u32,
    /// Fat (g)
    pub fat_g: u32,
    /// Whether the targets came from biometrics or the fallback
    pub source: DerivationSource,
}

impl DerivedGoals {
    /// Convert to a stored goal set with every macro in absolute mode
    #[must_use]
    pub fn into_daily_goals(self) -> DailyGoals {
        DailyGoals::absolute(
            f64::from(self.calories),
            f64::from(self.protein_g),
            f64::from(self.carbs_g),
            f64::from(self.fat_g),
        )
    }

    fn fallback(config: &GoalDerivationConfig) -> Self {
        let fallback = &config.fallback_goals;
        Self {
            calories: fallback.calories,
            protein_g: fallback.protein_g,
            carbs_g: fallback.carbs_g,
            fat_g: fallback.fat_g,
            source: DerivationSource::Fallback,
        }
    }
}

/// Intermediate values of a derivation, useful for explaining a target
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DerivationBreakdown {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Calorie target before the safety floor
    pub unfloored_calories: f64,
    /// Calories left after protein, before the carbs/fat split
    pub remaining_calories: f64,
    /// Final targets
    pub goals: DerivedGoals,
}

/// Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
    };

    config.weight_coef.mul_add(
        weight_kg,
        config
            .height_coef
            .mul_add(height_cm, config.age_coef * f64::from(age)),
    ) + sex_constant
}

/// Total Daily Energy Expenditure; a missing level uses the sedentary factor
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: Option<ActivityLevel>,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level.unwrap_or(ActivityLevel::Sedentary))
}

/// Calorie target before the safety floor: TDEE plus the weight goal adjustment, rounded
#[must_use]
pub fn calorie_target(
    tdee: f64,
    weight_goal: Option<WeightGoal>,
    config: &WeightGoalAdjustmentConfig,
) -> f64 {
    round_half_up(tdee + config.adjustment(weight_goal))
}

/// Apply the minimum daily calorie floor
#[must_use]
pub fn apply_calorie_floor(target: f64, min_daily_calories: u32) -> u32 {
    let floor = f64::from(min_daily_calories);
    if target.is_finite() && target > floor {
        target as u32
    } else {
        min_daily_calories
    }
}

/// Protein anchored to body weight (grams)
#[must_use]
pub fn protein_for_weight(weight_kg: f64, protein_g_per_kg: f64) -> u32 {
    round_half_up(weight_kg * protein_g_per_kg).max(0.0) as u32
}

/// Split calories left after protein into carbs and fat grams.
///
/// Returns `(carbs_g, fat_g, remaining_kcal)`. When protein alone exceeds the
/// calorie target the remaining budget is floored at zero so no macro target
/// goes negative.
#[must_use]
pub fn split_remaining_calories(
    calories: u32,
    protein_g: u32,
    diet_type: Option<DietType>,
    config: &DietSplitConfig,
) -> (u32, u32, f64) {
    let protein_calories = f64::from(protein_g) * PROTEIN_KCAL_PER_G;
    let mut remaining = f64::from(calories) - protein_calories;

    if remaining < 0.0 {
        warn!(
            calories,
            protein_g,
            shortfall_kcal = -remaining,
            "Protein target exceeds calorie target, carbs and fat set to zero"
        );
        remaining = 0.0;
    }

    let split = config.split(diet_type);
    let carbs = round_half_up(remaining * split.carbs_fraction / CARBS_KCAL_PER_G);
    let fat = round_half_up(remaining * split.fat_fraction / FAT_KCAL_PER_G);

    (carbs as u32, fat as u32, remaining)
}

/// Derive goals from a profile using the global configuration
#[must_use]
pub fn derive_goals(profile: &BiometricProfile) -> DerivedGoals {
    derive_goals_with_config(profile, GoalDerivationConfig::global())
}

/// Derive goals from a profile using an explicit configuration
#[must_use]
pub fn derive_goals_with_config(
    profile: &BiometricProfile,
    config: &GoalDerivationConfig,
) -> DerivedGoals {
    explain_derivation(profile, config).map_or_else(
        || {
            debug!("Biometrics incomplete, using fallback goals");
            DerivedGoals::fallback(config)
        },
        |breakdown| breakdown.goals,
    )
}

/// Full derivation with intermediate values; `None` when biometrics are incomplete
#[must_use]
pub fn explain_derivation(
    profile: &BiometricProfile,
    config: &GoalDerivationConfig,
) -> Option<DerivationBreakdown> {
    if !profile.has_required_biometrics() {
        return None;
    }
    let (age, height_cm, weight_kg, sex) = (
        profile.age?,
        profile.height_cm?,
        profile.weight_kg?,
        profile.sex?,
    );

    let bmr = calculate_mifflin_st_jeor(weight_kg, height_cm, age, sex, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let unfloored_calories = calorie_target(
        tdee,
        profile.weight_goal,
        &config.weight_goal_adjustments,
    );
    let calories = apply_calorie_floor(unfloored_calories, config.targets.min_daily_calories);
    let protein_g = protein_for_weight(weight_kg, config.targets.protein_g_per_kg);
    let (carbs_g, fat_g, remaining_calories) =
        split_remaining_calories(calories, protein_g, profile.diet_type, &config.diet_splits);

    debug!(
        bmr,
        tdee,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        "Derived goals from biometrics"
    );

    Some(DerivationBreakdown {
        bmr,
        tdee,
        unfloored_calories,
        remaining_calories,
        goals: DerivedGoals {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            source: DerivationSource::Biometrics,
        },
    })
}
