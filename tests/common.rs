// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, biometric profiles, goal sets, and food fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `macro_goals`

use std::env;
use std::sync::{Arc, Once};

use async_trait::async_trait;
use macro_goals::errors::history::HistoryError;
use macro_goals::goal_history::{GoalHistoryRecorder, GoalHistoryStore, InMemoryGoalHistoryStore};
use macro_goals::models::{BiometricProfile, FoodItem, GoalChangeRecord};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30 year old, 175 cm, 70 kg male, active, maintaining, balanced diet
pub fn reference_profile() -> BiometricProfile {
    BiometricProfile::from_codes(30, 175.0, 70.0, "male", 3, 3, 4)
}

/// Recorder over a fresh in-memory store, returning both
pub fn in_memory_recorder() -> (Arc<InMemoryGoalHistoryStore>, GoalHistoryRecorder) {
    let store = Arc::new(InMemoryGoalHistoryStore::new());
    let recorder = GoalHistoryRecorder::new(store.clone());
    (store, recorder)
}

/// Store that refuses every write
pub struct UnavailableHistoryStore;

#[async_trait]
impl GoalHistoryStore for UnavailableHistoryStore {
    async fn append(&self, _record: GoalChangeRecord) -> Result<(), HistoryError> {
        Err(HistoryError::unavailable("connection refused"))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<GoalChangeRecord>, HistoryError> {
        Err(HistoryError::rejected(user_id, "store offline"))
    }
}

/// Recorder whose store always fails
pub fn failing_recorder() -> GoalHistoryRecorder {
    GoalHistoryRecorder::new(Arc::new(UnavailableHistoryStore))
}

/// 40 g serving of rolled oats
pub fn oats() -> FoodItem {
    FoodItem {
        id: Some("oats".into()),
        name: "Rolled Oats".into(),
        brand: None,
        serving_size: Some(40.0),
        serving_unit: Some("g".into()),
        calories: Some(150.0),
        protein_g: Some(5.0),
        carbs_g: Some(27.0),
        fat_g: Some(2.5),
        fiber_g: Some(4.0),
    }
}

/// 100 g of cooked chicken breast
pub fn chicken_breast() -> FoodItem {
    FoodItem {
        id: Some("chicken-breast".into()),
        name: "Chicken Breast".into(),
        brand: None,
        serving_size: Some(100.0),
        serving_unit: Some("g".into()),
        calories: Some(165.0),
        protein_g: Some(31.0),
        carbs_g: Some(0.0),
        fat_g: Some(3.6),
        fiber_g: None,
    }
}
