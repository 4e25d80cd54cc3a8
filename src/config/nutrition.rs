// ABOUTME: Goal derivation configuration for calorie and macro target computation
// ABOUTME: Configures BMR coefficients, activity factors, weight goal adjustments, and diet splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Derivation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use std::sync::OnceLock;

use macro_goals_core::constants::nutrition::{
    DEFAULT_CALORIES, DEFAULT_CARBS_G, DEFAULT_FAT_G, DEFAULT_PROTEIN_G, MIN_DAILY_CALORIES,
    PROTEIN_G_PER_KG,
};
use macro_goals_core::models::{ActivityLevel, DailyGoals, DietType, WeightGoal};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Tolerance when checking that a diet split sums to one
const SPLIT_SUM_TOLERANCE: f64 = 1e-9;

/// Complete goal derivation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalDerivationConfig {
    /// Mifflin-St Jeor coefficients
    #[serde(default)]
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    #[serde(default)]
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per weight goal
    #[serde(default)]
    pub weight_goal_adjustments: WeightGoalAdjustmentConfig,
    /// Carbs/fat split of non-protein calories per diet type
    #[serde(default)]
    pub diet_splits: DietSplitConfig,
    /// Protein anchor and calorie floor
    #[serde(default)]
    pub targets: TargetConfig,
    /// Goal set returned when biometrics are incomplete
    #[serde(default)]
    pub fallback_goals: FallbackGoalsConfig,
}

/// Mifflin-St Jeor BMR coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0 per kg)
    pub weight_coef: f64,
    /// Height coefficient (6.25 per cm)
    pub height_coef: f64,
    /// Age coefficient (-5.0 per year)
    pub age_coef: f64,
    /// Male constant (+5)
    pub male_constant: f64,
    /// Female constant (-161)
    pub female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Active: 1.55
    pub active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Extra active: 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for a level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

/// Daily calorie adjustment per weight goal (kcal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightGoalAdjustmentConfig {
    /// Lose weight: -500
    pub lose: f64,
    /// Gain weight: +500
    pub gain: f64,
    /// Maintain weight: 0
    pub maintain: f64,
}

impl Default for WeightGoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose: -500.0,
            gain: 500.0,
            maintain: 0.0,
        }
    }
}

impl WeightGoalAdjustmentConfig {
    /// Adjustment for a weight goal; no goal means no adjustment
    #[must_use]
    pub fn adjustment(&self, goal: Option<WeightGoal>) -> f64 {
        match goal {
            Some(WeightGoal::Lose) => self.lose,
            Some(WeightGoal::Gain) => self.gain,
            Some(WeightGoal::Maintain) => self.maintain,
            None => 0.0,
        }
    }
}

/// Fractions of the non-protein calories given to carbs and fat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DietSplit {
    /// Share of remaining calories from carbohydrate (0.0-1.0)
    pub carbs_fraction: f64,
    /// Share of remaining calories from fat (0.0-1.0)
    pub fat_fraction: f64,
}

impl DietSplit {
    /// Create a split
    #[must_use]
    pub const fn new(carbs_fraction: f64, fat_fraction: f64) -> Self {
        Self {
            carbs_fraction,
            fat_fraction,
        }
    }
}

/// Diet type split table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietSplitConfig {
    /// Low carb: 25% carbs / 75% fat
    pub low_carb: DietSplit,
    /// High protein: 45% carbs / 55% fat
    pub high_protein: DietSplit,
    /// Keto: 10% carbs / 90% fat
    pub keto: DietSplit,
    /// Balanced (and unspecified): 55% carbs / 45% fat
    pub balanced: DietSplit,
}

impl Default for DietSplitConfig {
    fn default() -> Self {
        Self {
            low_carb: DietSplit::new(0.25, 0.75),
            high_protein: DietSplit::new(0.45, 0.55),
            keto: DietSplit::new(0.10, 0.90),
            balanced: DietSplit::new(0.55, 0.45),
        }
    }
}

impl DietSplitConfig {
    /// Split for a diet type; no diet type uses the balanced split
    #[must_use]
    pub const fn split(&self, diet: Option<DietType>) -> DietSplit {
        match diet {
            Some(DietType::LowCarb) => self.low_carb,
            Some(DietType::HighProtein) => self.high_protein,
            Some(DietType::Keto) => self.keto,
            Some(DietType::Balanced) | None => self.balanced,
        }
    }

    fn named(&self) -> [(&'static str, DietSplit); 4] {
        [
            ("low_carb", self.low_carb),
            ("high_protein", self.high_protein),
            ("keto", self.keto),
            ("balanced", self.balanced),
        ]
    }
}

/// Protein anchor and safety floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Protein per kg of body weight, independent of diet type (2.0)
    pub protein_g_per_kg: f64,
    /// Minimum recommended daily calories (1200)
    pub min_daily_calories: u32,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: PROTEIN_G_PER_KG,
            min_daily_calories: MIN_DAILY_CALORIES,
        }
    }
}

/// Goal set used when derivation inputs are incomplete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackGoalsConfig {
    /// Calories (2000)
    pub calories: u32,
    /// Protein grams (150)
    pub protein_g: u32,
    /// Carbohydrate grams (200)
    pub carbs_g: u32,
    /// Fat grams (67)
    pub fat_g: u32,
}

impl Default for FallbackGoalsConfig {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES,
            protein_g: DEFAULT_PROTEIN_G,
            carbs_g: DEFAULT_CARBS_G,
            fat_g: DEFAULT_FAT_G,
        }
    }
}

impl FallbackGoalsConfig {
    /// Fallback as an absolute-mode goal set
    #[must_use]
    pub fn to_daily_goals(&self) -> DailyGoals {
        DailyGoals::absolute(
            f64::from(self.calories),
            f64::from(self.protein_g),
            f64::from(self.carbs_g),
            f64::from(self.fat_g),
        )
    }
}

/// Global configuration singleton
static GOAL_DERIVATION_CONFIG: OnceLock<GoalDerivationConfig> = OnceLock::new();

impl GoalDerivationConfig {
    /// Get the global configuration instance (defaults)
    pub fn global() -> &'static Self {
        GOAL_DERIVATION_CONFIG.get_or_init(Self::default)
    }

    /// Parse and validate a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or fails validation
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when a diet split does not sum to 1.0 or
    /// has a negative share, and `ConfigError::InvalidRange` for non-positive
    /// activity factors, protein anchor, or calorie floor
    pub fn validate(&self) -> Result<(), ConfigError> {
        for level in ActivityLevel::ALL {
            let factor = self.activity_factors.factor(level);
            if !(factor.is_finite() && factor > 0.0) {
                return Err(ConfigError::InvalidRange(format!(
                    "activity factor for {} must be positive, got {factor}",
                    level.label()
                )));
            }
        }

        for (name, split) in self.diet_splits.named() {
            if split.carbs_fraction < 0.0 || split.fat_fraction < 0.0 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} split fractions must not be negative"
                )));
            }
            let sum = split.carbs_fraction + split.fat_fraction;
            if (sum - 1.0).abs() > SPLIT_SUM_TOLERANCE {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} carbs and fat fractions must sum to 1.0, got {sum}"
                )));
            }
        }

        let protein = self.targets.protein_g_per_kg;
        if !(protein.is_finite() && protein > 0.0) {
            return Err(ConfigError::InvalidRange(format!(
                "protein_g_per_kg must be positive, got {protein}"
            )));
        }

        if self.targets.min_daily_calories == 0 {
            return Err(ConfigError::InvalidRange(
                "min_daily_calories must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}
