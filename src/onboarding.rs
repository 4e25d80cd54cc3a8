// ABOUTME: Onboarding workflow state with an explicit reducer over user actions
// ABOUTME: Step gating, auto goal recalculation, and the profile update written on completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Onboarding
//!
//! The in-progress answers live in an [`OnboardingState`] value that each step
//! receives and returns. All mutation goes through [`apply`], which takes the
//! current state and an [`OnboardingAction`] and produces the next state.
//!
//! In auto goal-setting mode the goal set is re-derived from biometrics when
//! the daily goals step is entered and whenever an input changes while on it.
//! Goal changes made during onboarding are not audited individually; the
//! settled set is recorded once as a baseline on completion.

use macro_goals_core::errors::{AppError, AppResult};
use macro_goals_core::models::{
    ActivityLevel, BiometricProfile, ChangeSource, DailyGoals, DietType, GoalAmount, Nutrient,
    ResolvedGoals, Sex, WeightGoal,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GoalDerivationConfig;
use crate::goal_history::{GoalHistoryRecorder, RecordOutcome};
use crate::intelligence::goal_derivation::derive_goals_with_config;
use crate::intelligence::goal_resolution::resolve_goals;
use crate::logging::AppLogger;

/// How the user wants daily goals set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalSettingPreference {
    /// Derive goals from biometrics
    Auto,
    /// User enters goals by hand
    Manual,
}

/// Onboarding steps in order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Weight goal and diet type
    Motivations,
    /// Auto or manual goal setting
    GoalSetting,
    /// Age, height, weight, sex
    Biometrics,
    /// Activity level
    ActivityLevel,
    /// Review and edit daily goals
    DailyGoals,
}

impl OnboardingStep {
    /// Steps in display order
    pub const ALL: [Self; 5] = [
        Self::Motivations,
        Self::GoalSetting,
        Self::Biometrics,
        Self::ActivityLevel,
        Self::DailyGoals,
    ];

    /// One-based step number
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Motivations => 1,
            Self::GoalSetting => 2,
            Self::Biometrics => 3,
            Self::ActivityLevel => 4,
            Self::DailyGoals => 5,
        }
    }

    /// Following step, if any
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Motivations => Some(Self::GoalSetting),
            Self::GoalSetting => Some(Self::Biometrics),
            Self::Biometrics => Some(Self::ActivityLevel),
            Self::ActivityLevel => Some(Self::DailyGoals),
            Self::DailyGoals => None,
        }
    }

    /// Preceding step, if any
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Motivations => None,
            Self::GoalSetting => Some(Self::Motivations),
            Self::Biometrics => Some(Self::GoalSetting),
            Self::ActivityLevel => Some(Self::Biometrics),
            Self::DailyGoals => Some(Self::ActivityLevel),
        }
    }
}

/// Answers collected so far
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingState {
    /// Weight goal
    pub weight_goal: Option<WeightGoal>,
    /// Diet type
    pub diet_type: Option<DietType>,
    /// Goal-setting preference
    pub goal_setting_preference: Option<GoalSettingPreference>,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Sex
    pub sex: Option<Sex>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Goal set being built
    pub daily_goals: DailyGoals,
    /// Current step
    pub step: OnboardingStep,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            weight_goal: None,
            diet_type: None,
            goal_setting_preference: None,
            age: None,
            height_cm: None,
            weight_kg: None,
            sex: None,
            activity_level: None,
            daily_goals: DailyGoals::default(),
            step: OnboardingStep::Motivations,
        }
    }
}

impl OnboardingState {
    /// Biometric profile assembled from the answers
    #[must_use]
    pub const fn profile(&self) -> BiometricProfile {
        BiometricProfile {
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            sex: self.sex,
            activity_level: self.activity_level,
            weight_goal: self.weight_goal,
            diet_type: self.diet_type,
        }
    }

    /// Whether auto goal setting is selected
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.goal_setting_preference == Some(GoalSettingPreference::Auto)
    }

    /// Whether the current step has what it needs to move on
    #[must_use]
    pub const fn can_proceed(&self) -> bool {
        match self.step {
            OnboardingStep::Motivations => self.weight_goal.is_some() || self.diet_type.is_some(),
            OnboardingStep::GoalSetting => self.goal_setting_preference.is_some(),
            OnboardingStep::Biometrics => self.age.is_some(),
            OnboardingStep::ActivityLevel => self.activity_level.is_some(),
            OnboardingStep::DailyGoals => true,
        }
    }

    /// Re-derive the goal set when auto mode is on and every answer is present
    #[must_use]
    pub fn recalculated(self, config: &GoalDerivationConfig) -> Self {
        let profile = self.profile();
        if !(self.is_auto() && profile.is_fully_specified()) {
            return self;
        }
        let derived = derive_goals_with_config(&profile, config);
        debug!(
            calories = derived.calories,
            protein_g = derived.protein_g,
            carbs_g = derived.carbs_g,
            fat_g = derived.fat_g,
            "Onboarding goals recalculated"
        );
        Self {
            daily_goals: derived.into_daily_goals(),
            ..self
        }
    }
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum OnboardingAction {
    /// Set or clear the weight goal
    SetWeightGoal(Option<WeightGoal>),
    /// Set or clear the diet type
    SetDietType(Option<DietType>),
    /// Choose auto or manual goal setting
    SetGoalSettingPreference(Option<GoalSettingPreference>),
    /// Set age; zero clears it
    SetAge(u32),
    /// Set height; non-positive clears it
    SetHeight(f64),
    /// Set weight; non-positive clears it
    SetWeight(f64),
    /// Set or clear sex
    SetSex(Option<Sex>),
    /// Set or clear activity level
    SetActivityLevel(Option<ActivityLevel>),
    /// Replace one goal line; calories are always stored as absolute
    UpdateDailyGoal {
        /// Goal line
        nutrient: Nutrient,
        /// New stored amount
        amount: GoalAmount,
    },
    /// Re-derive goals from biometrics if auto mode allows it
    RecalculateGoals,
    /// Advance when the current step is satisfied
    NextStep,
    /// Go back one step
    PreviousStep,
    /// Start over
    Reset,
}

fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Apply an action using the global derivation configuration
#[must_use]
pub fn apply(state: OnboardingState, action: OnboardingAction) -> OnboardingState {
    apply_with_config(state, action, GoalDerivationConfig::global())
}

/// Apply an action with an explicit derivation configuration
#[must_use]
pub fn apply_with_config(
    state: OnboardingState,
    action: OnboardingAction,
    config: &GoalDerivationConfig,
) -> OnboardingState {
    let input_changed = matches!(
        action,
        OnboardingAction::SetWeightGoal(_)
            | OnboardingAction::SetDietType(_)
            | OnboardingAction::SetGoalSettingPreference(_)
            | OnboardingAction::SetAge(_)
            | OnboardingAction::SetHeight(_)
            | OnboardingAction::SetWeight(_)
            | OnboardingAction::SetSex(_)
            | OnboardingAction::SetActivityLevel(_)
    );

    let next = match action {
        OnboardingAction::SetWeightGoal(weight_goal) => OnboardingState {
            weight_goal,
            ..state
        },
        OnboardingAction::SetDietType(diet_type) => OnboardingState { diet_type, ..state },
        OnboardingAction::SetGoalSettingPreference(goal_setting_preference) => OnboardingState {
            goal_setting_preference,
            ..state
        },
        OnboardingAction::SetAge(age) => OnboardingState {
            age: (age > 0).then_some(age),
            ..state
        },
        OnboardingAction::SetHeight(height_cm) => OnboardingState {
            height_cm: positive(height_cm),
            ..state
        },
        OnboardingAction::SetWeight(weight_kg) => OnboardingState {
            weight_kg: positive(weight_kg),
            ..state
        },
        OnboardingAction::SetSex(sex) => OnboardingState { sex, ..state },
        OnboardingAction::SetActivityLevel(activity_level) => OnboardingState {
            activity_level,
            ..state
        },
        OnboardingAction::UpdateDailyGoal { nutrient, amount } => {
            update_daily_goal(state, nutrient, amount)
        }
        OnboardingAction::RecalculateGoals => state.recalculated(config),
        OnboardingAction::NextStep => match state.step.next() {
            Some(step) if state.can_proceed() => {
                let advanced = OnboardingState { step, ..state };
                if step == OnboardingStep::DailyGoals {
                    advanced.recalculated(config)
                } else {
                    advanced
                }
            }
            _ => state,
        },
        OnboardingAction::PreviousStep => match state.step.previous() {
            Some(step) => OnboardingState { step, ..state },
            None => state,
        },
        OnboardingAction::Reset => OnboardingState::default(),
    };

    if input_changed && next.step == OnboardingStep::DailyGoals {
        next.recalculated(config)
    } else {
        next
    }
}

fn update_daily_goal(
    mut state: OnboardingState,
    nutrient: Nutrient,
    amount: GoalAmount,
) -> OnboardingState {
    let amount = if nutrient.supports_percent() {
        amount
    } else {
        GoalAmount::Absolute(amount.value())
    };
    // Negative amounts and percentages above 100 are refused; the goal keeps its value
    if let Err(error) = state.daily_goals.set_amount(nutrient, amount) {
        debug!(
            goal.nutrient = nutrient.label(),
            error = %error,
            "Goal update refused"
        );
    }
    state
}

/// Profile columns written when onboarding completes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    /// lose | gain | maintain
    pub weight_goal: Option<String>,
    /// `low_carb` | `high_protein` | keto | none
    pub diet_type: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub current_weight_kg: Option<f64>,
    /// Lower-case sex
    pub sex: Option<String>,
    /// sedentary | light | active | `very_active`
    pub activity_level: Option<String>,
    /// Calorie goal (kcal)
    pub daily_calorie_goal: f64,
    /// Protein goal (g)
    pub daily_protein_goal: f64,
    /// Carbohydrate goal (g)
    pub daily_carbs_goal: f64,
    /// Fat goal (g)
    pub daily_fat_goal: f64,
    /// Always true once written
    pub onboarding_complete: bool,
}

/// Result of finishing onboarding
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingCompletion {
    /// Columns for the profile store
    pub profile_update: ProfileUpdate,
    /// Settled goal set, every line absolute
    pub goals: DailyGoals,
}

fn or_default(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        default
    }
}

/// Build the profile update for a finished onboarding.
///
/// Percent-mode macros are resolved to grams. A macro of zero grams is kept;
/// a negative or non-finite line, or a calorie goal of zero or less, is
/// replaced by the configured fallback.
///
/// # Errors
///
/// Returns `InvalidInput` unless the state is on the daily goals step
pub fn complete(state: &OnboardingState) -> AppResult<OnboardingCompletion> {
    if state.step != OnboardingStep::DailyGoals {
        return Err(AppError::invalid_input(format!(
            "Onboarding can only complete from the daily goals step, currently on step {}",
            state.step.number()
        )));
    }

    let fallback = GoalDerivationConfig::global().fallback_goals.to_daily_goals();
    let resolved: ResolvedGoals = resolve_goals(&state.daily_goals);
    let calories = if resolved.calories.is_finite() && resolved.calories > 0.0 {
        resolved.calories
    } else {
        fallback.calories
    };
    let goals = DailyGoals::absolute(
        calories,
        or_default(resolved.protein_g, fallback.protein.value()),
        or_default(resolved.carbs_g, fallback.carbs.value()),
        or_default(resolved.fat_g, fallback.fat.value()),
    );

    let profile_update = ProfileUpdate {
        weight_goal: state.weight_goal.map(|goal| goal.schema_value().to_owned()),
        diet_type: state.diet_type.map(|diet| diet.schema_value().to_owned()),
        age: state.age,
        height_cm: state.height_cm,
        current_weight_kg: state.weight_kg,
        sex: state.sex.map(|sex| sex.as_str().to_owned()),
        activity_level: state
            .activity_level
            .map(|level| level.schema_value().to_owned()),
        daily_calorie_goal: goals.calories,
        daily_protein_goal: goals.protein.value(),
        daily_carbs_goal: goals.carbs.value(),
        daily_fat_goal: goals.fat.value(),
        onboarding_complete: true,
    };

    Ok(OnboardingCompletion {
        profile_update,
        goals,
    })
}

/// Complete onboarding and record the settled goals as the history baseline.
///
/// Baseline write failures are reported in the outcomes and do not fail completion.
///
/// # Errors
///
/// Returns `InvalidInput` unless the state is on the daily goals step
pub async fn finish(
    state: &OnboardingState,
    user_id: Uuid,
    recorder: &GoalHistoryRecorder,
) -> AppResult<(OnboardingCompletion, Vec<RecordOutcome>)> {
    let completion = complete(state)?;
    AppLogger::log_goals_applied(user_id, completion.goals.calories, ChangeSource::Onboarding);
    let outcomes = recorder
        .record_onboarding_baseline(user_id, &completion.goals)
        .await;
    info!(
        user.id = %user_id,
        recorded = outcomes.iter().filter(|outcome| outcome.is_recorded()).count(),
        "Onboarding completed"
    );
    Ok((completion, outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motivations_step_gating() {
        let state = OnboardingState::default();
        assert!(!state.can_proceed());
        let state = apply(state, OnboardingAction::SetDietType(Some(DietType::Keto)));
        assert!(state.can_proceed());
    }

    #[test]
    fn test_next_step_blocked_until_satisfied() {
        let state = apply(OnboardingState::default(), OnboardingAction::NextStep);
        assert_eq!(state.step, OnboardingStep::Motivations);
    }

    #[test]
    fn test_calorie_update_forced_absolute() {
        let state = apply(
            OnboardingState::default(),
            OnboardingAction::UpdateDailyGoal {
                nutrient: Nutrient::Calories,
                amount: GoalAmount::Percent(2500.0),
            },
        );
        assert!((state.daily_goals.calories - 2500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_previous_step_stops_at_first() {
        let state = apply(OnboardingState::default(), OnboardingAction::PreviousStep);
        assert_eq!(state.step, OnboardingStep::Motivations);
    }

    #[test]
    fn test_complete_requires_final_step() {
        assert!(complete(&OnboardingState::default()).is_err());
    }
}
