// ABOUTME: Biometric profile models used to derive personalized nutrition targets
// ABOUTME: Sex, ActivityLevel, WeightGoal, DietType enums and the BiometricProfile record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Sex used for the BMR constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal BMR constant)
    Male,
    /// Female (-161 kcal BMR constant)
    Female,
}

impl Sex {
    /// Parse free-form sex text.
    ///
    /// Empty text is absent, "male" in any case is male, anything else is female.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else {
            Some(Self::Female)
        }
    }

    /// Lower-case profile value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Activity level for the TDEE multiplier (onboarding codes 1-5)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    Sedentary,
    /// Light exercise or sports 1-3 days/week
    LightlyActive,
    /// Moderate exercise or sports 3-5 days/week
    Active,
    /// Hard exercise or sports 6-7 days a week
    VeryActive,
    /// Very hard exercise and a physical job
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in onboarding order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::Active,
        Self::VeryActive,
        Self::ExtraActive,
    ];

    /// Map an onboarding code (1-5) to a level
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Sedentary),
            2 => Some(Self::LightlyActive),
            3 => Some(Self::Active),
            4 => Some(Self::VeryActive),
            5 => Some(Self::ExtraActive),
            _ => None,
        }
    }

    /// Onboarding code (1-5)
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Sedentary => 1,
            Self::LightlyActive => 2,
            Self::Active => 3,
            Self::VeryActive => 4,
            Self::ExtraActive => 5,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::Active => "Active",
            Self::VeryActive => "Very Active",
            Self::ExtraActive => "Extra Active",
        }
    }

    /// Display description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Sedentary => "Desk job, little or no exercise",
            Self::LightlyActive => "Light exercise or sports 1-3 days/week",
            Self::Active => "Moderate exercise or sports 3-5 days/week",
            Self::VeryActive => "Hard exercise or sports 6-7 days a week",
            Self::ExtraActive => "Very hard exercise & physical job",
        }
    }

    /// Profile schema value; the schema has four levels so extra active folds into very active
    #[must_use]
    pub const fn schema_value(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "light",
            Self::Active => "active",
            Self::VeryActive | Self::ExtraActive => "very_active",
        }
    }
}

/// Weight goal driving the calorie adjustment (onboarding codes 1-3)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WeightGoal {
    /// Lose weight (calorie deficit)
    Lose,
    /// Gain weight (calorie surplus)
    Gain,
    /// Maintain weight
    Maintain,
}

impl WeightGoal {
    /// Map an onboarding code (1 lose, 2 gain, 3 maintain)
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Lose),
            2 => Some(Self::Gain),
            3 => Some(Self::Maintain),
            _ => None,
        }
    }

    /// Onboarding code
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Lose => 1,
            Self::Gain => 2,
            Self::Maintain => 3,
        }
    }

    /// Profile schema value
    #[must_use]
    pub const fn schema_value(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Gain => "gain",
            Self::Maintain => "maintain",
        }
    }
}

/// Diet type driving the carbs/fat split (onboarding codes 1-4)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Low carb
    LowCarb,
    /// High protein
    HighProtein,
    /// Ketogenic
    Keto,
    /// Balanced (no particular diet)
    Balanced,
}

impl DietType {
    /// Map an onboarding code (1 low carb, 2 high protein, 3 keto, 4 balanced)
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::LowCarb),
            2 => Some(Self::HighProtein),
            3 => Some(Self::Keto),
            4 => Some(Self::Balanced),
            _ => None,
        }
    }

    /// Onboarding code
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::LowCarb => 1,
            Self::HighProtein => 2,
            Self::Keto => 3,
            Self::Balanced => 4,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LowCarb => "Low Carb",
            Self::HighProtein => "High Protein",
            Self::Keto => "Keto",
            Self::Balanced => "Balanced Diet",
        }
    }

    /// Profile schema value; balanced is stored as "none"
    #[must_use]
    pub const fn schema_value(&self) -> &'static str {
        match self {
            Self::LowCarb => "low_carb",
            Self::HighProtein => "high_protein",
            Self::Keto => "keto",
            Self::Balanced => "none",
        }
    }
}

/// Biometric inputs for goal derivation.
///
/// Every field is optional because onboarding fills them in one step at a time.
/// Derivation requires age, height, weight, sex and activity level; weight goal
/// and diet type fall back to maintain and balanced.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BiometricProfile {
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Sex for the BMR constant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Activity level for the TDEE multiplier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Weight goal for the calorie adjustment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_goal: Option<WeightGoal>,
    /// Diet type for the carbs/fat split
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<DietType>,
}

impl BiometricProfile {
    /// Build a profile from raw onboarding values.
    ///
    /// Zero (or empty text) means "not provided". Unknown positive codes keep the
    /// field present with its neutral value: sedentary activity, maintain weight,
    /// balanced diet.
    #[must_use]
    pub fn from_codes(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        sex: &str,
        activity_code: u8,
        weight_goal_code: u8,
        diet_code: u8,
    ) -> Self {
        Self {
            age: (age > 0).then_some(age),
            height_cm: positive(height_cm),
            weight_kg: positive(weight_kg),
            sex: Sex::from_str_lossy(sex),
            activity_level: (activity_code > 0)
                .then(|| ActivityLevel::from_code(activity_code).unwrap_or(ActivityLevel::Sedentary)),
            weight_goal: (weight_goal_code > 0)
                .then(|| WeightGoal::from_code(weight_goal_code).unwrap_or(WeightGoal::Maintain)),
            diet_type: (diet_code > 0)
                .then(|| DietType::from_code(diet_code).unwrap_or(DietType::Balanced)),
        }
    }

    /// Whether the fields the BMR/TDEE formula needs are all present and positive
    #[must_use]
    pub fn has_required_biometrics(&self) -> bool {
        self.age.is_some_and(|age| age > 0)
            && self.height_cm.is_some_and(is_positive)
            && self.weight_kg.is_some_and(is_positive)
            && self.sex.is_some()
            && self.activity_level.is_some()
    }

    /// Whether every onboarding answer, including weight goal and diet type, is present
    #[must_use]
    pub fn is_fully_specified(&self) -> bool {
        self.has_required_biometrics() && self.weight_goal.is_some() && self.diet_type.is_some()
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn positive(value: f64) -> Option<f64> {
    is_positive(value).then_some(value)
}
