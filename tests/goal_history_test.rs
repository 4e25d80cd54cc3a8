// ABOUTME: Integration tests for the goal change audit contract and goal history recorder
// ABOUTME: Covers change detection, onboarding gating, best-effort writes, baselines, and recalculation diffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use macro_goals::errors::ErrorCode;
use macro_goals::goal_history::{diff_goal_sets, GoalChange, RecordOutcome};
use macro_goals::intelligence::derive_goals;
use macro_goals::models::{
    BiometricProfile, ChangeSource, DailyGoals, GoalAmount, InputMode, Nutrient,
};
use uuid::Uuid;

mod common;

fn protein_change(old: GoalAmount, new: GoalAmount) -> GoalChange {
    GoalChange::new(Nutrient::Protein, old, new, 2000.0)
}

#[tokio::test]
async fn test_value_change_after_onboarding_is_recorded() {
    common::init_test_logging();
    let (store, recorder) = common::in_memory_recorder();
    let user_id = Uuid::new_v4();

    let change = protein_change(GoalAmount::Absolute(150.0), GoalAmount::Absolute(160.0));
    let outcome = recorder
        .record_goal_change(user_id, true, &change, ChangeSource::Manual)
        .await;

    let RecordOutcome::Recorded(record) = outcome else {
        panic!("expected a recorded outcome");
    };
    assert_eq!(record.user_id, user_id);
    assert_eq!(record.nutrient, Nutrient::Protein);
    assert_eq!(record.change_source, ChangeSource::Manual);
    assert_eq!(record.old_value, Some(150.0));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_mode_only_change_is_recorded_with_resolved_values() {
    let (_store, recorder) = common::in_memory_recorder();
    let change = protein_change(GoalAmount::Absolute(150.0), GoalAmount::Percent(30.0));

    let outcome = recorder
        .record_goal_change(Uuid::new_v4(), true, &change, ChangeSource::Manual)
        .await;

    let RecordOutcome::Recorded(record) = outcome else {
        panic!("mode change should be recorded");
    };
    assert_eq!(record.input_mode, InputMode::Percent);
    assert_eq!(record.resolved_old_value, Some(150.0));
    assert!((record.resolved_new_value - 150.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_no_change_writes_nothing() {
    let (store, recorder) = common::in_memory_recorder();
    let change = protein_change(GoalAmount::Percent(30.0), GoalAmount::Percent(30.0));

    let outcome = recorder
        .record_goal_change(Uuid::new_v4(), true, &change, ChangeSource::Manual)
        .await;

    assert!(matches!(outcome, RecordOutcome::Unchanged));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_nothing_written_during_onboarding() {
    let (store, recorder) = common::in_memory_recorder();
    let change = protein_change(GoalAmount::Absolute(150.0), GoalAmount::Absolute(120.0));

    let outcome = recorder
        .record_goal_change(Uuid::new_v4(), false, &change, ChangeSource::Manual)
        .await;

    assert!(matches!(outcome, RecordOutcome::OnboardingIncomplete));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_store_failure_is_reported_not_propagated() {
    common::init_test_logging();
    let recorder = common::failing_recorder();
    let change = protein_change(GoalAmount::Absolute(150.0), GoalAmount::Absolute(175.0));

    let outcome = recorder
        .record_goal_change(Uuid::new_v4(), true, &change, ChangeSource::Manual)
        .await;

    match outcome {
        RecordOutcome::PersistFailed { record, error } => {
            assert!((record.new_value - 175.0).abs() < f64::EPSILON);
            assert!(error.to_string().contains("unavailable"));
        }
        other => panic!("expected persist failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_history_read_failure_maps_to_storage_error() {
    let recorder = common::failing_recorder();
    let user_id = Uuid::new_v4();

    let error = recorder.history(user_id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(error.context.user_id, Some(user_id));
}

#[tokio::test]
async fn test_history_is_per_user_and_append_ordered() {
    let (_store, recorder) = common::in_memory_recorder();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    for grams in [160.0, 170.0] {
        let change =
            protein_change(GoalAmount::Absolute(grams - 10.0), GoalAmount::Absolute(grams));
        recorder
            .record_goal_change(alice, true, &change, ChangeSource::Manual)
            .await;
    }
    let change = protein_change(GoalAmount::Absolute(150.0), GoalAmount::Absolute(100.0));
    recorder
        .record_goal_change(bob, true, &change, ChangeSource::Manual)
        .await;

    let history = recorder.history(alice).await.unwrap();
    let values: Vec<f64> = history.iter().map(|record| record.new_value).collect();
    assert_eq!(values, vec![160.0, 170.0]);
    assert_eq!(recorder.history(bob).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_onboarding_baseline_records_every_line() {
    let (_store, recorder) = common::in_memory_recorder();
    let user_id = Uuid::new_v4();
    let goals = DailyGoals {
        fat: GoalAmount::Percent(30.0),
        ..DailyGoals::default()
    };

    let outcomes = recorder.record_onboarding_baseline(user_id, &goals).await;
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(RecordOutcome::is_recorded));

    let history = recorder.history(user_id).await.unwrap();
    assert!(history
        .iter()
        .all(|record| record.change_source == ChangeSource::Onboarding
            && record.old_value.is_none()
            && record.resolved_old_value.is_none()));
    let fat = history
        .iter()
        .find(|record| record.nutrient == Nutrient::Fat)
        .unwrap();
    assert!((fat.resolved_new_value - 67.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_recalculation_records_only_changed_lines() {
    let (_store, recorder) = common::in_memory_recorder();
    let user_id = Uuid::new_v4();
    let old = DailyGoals::default();
    let new = derive_goals(&common::reference_profile()).into_daily_goals();

    let outcomes = recorder
        .record_recalculation(user_id, true, &old, &new)
        .await;
    assert_eq!(outcomes.len(), 4);

    let history = recorder.history(user_id).await.unwrap();
    assert!(history
        .iter()
        .all(|record| record.change_source == ChangeSource::AutoRecalculation));
    let calories = history
        .iter()
        .find(|record| record.nutrient == Nutrient::Calories)
        .unwrap();
    assert_eq!(calories.old_value, Some(2000.0));
    assert!((calories.new_value - 2556.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_recalculation_before_onboarding_complete_writes_nothing() {
    let (store, recorder) = common::in_memory_recorder();
    let new = derive_goals(&common::reference_profile()).into_daily_goals();

    let outcomes = recorder
        .record_recalculation(Uuid::new_v4(), false, &DailyGoals::default(), &new)
        .await;

    assert!(outcomes
        .iter()
        .all(|outcome| matches!(outcome, RecordOutcome::OnboardingIncomplete)));
    assert!(store.is_empty().await);
}

#[test]
fn test_diff_of_identical_sets_is_empty() {
    let goals = derive_goals(&BiometricProfile::from_codes(25, 165.0, 60.0, "female", 2, 1, 1))
        .into_daily_goals();
    assert!(diff_goal_sets(&goals, &goals).is_empty());
}

#[test]
fn test_percent_line_is_unchanged_when_only_calories_move() {
    let old = DailyGoals {
        protein: GoalAmount::Percent(30.0),
        ..DailyGoals::default()
    };
    let new = DailyGoals {
        calories: 2500.0,
        ..old
    };
    let changes = diff_goal_sets(&old, &new);
    let lines: Vec<Nutrient> = changes.iter().map(|change| change.nutrient).collect();
    assert_eq!(lines, vec![Nutrient::Calories]);
}
