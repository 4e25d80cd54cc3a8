// ABOUTME: Criterion benchmarks for goal derivation, resolution, and daily summaries
// ABOUTME: Measures per-profile derivation, goal set resolution, and food log aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the goal engine.
//!
//! Measures biometric goal derivation over a spread of profiles, percent goal
//! resolution, and daily summaries over growing food logs.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use macro_goals::daily_progress::DailySummary;
use macro_goals::intelligence::{derive_goals, resolve_goals};
use macro_goals::models::{
    BiometricProfile, DailyGoals, FoodItem, FoodLogEntry, GoalAmount, MealType,
};

/// Generate profiles cycling through every activity level, goal, and diet
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn generate_profiles(count: usize) -> Vec<BiometricProfile> {
    (0..count)
        .map(|index| {
            let sex = if index % 2 == 0 { "male" } else { "female" };
            BiometricProfile::from_codes(
                18 + (index % 60) as u32,
                150.0 + ((index * 7) % 50) as f64,
                50.0 + ((index * 13) % 70) as f64,
                sex,
                1 + (index % 5) as u8,
                1 + (index % 3) as u8,
                1 + (index % 4) as u8,
            )
        })
        .collect()
}

/// Generate a food log spread over a week, every meal represented
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_food_log(count: usize) -> Vec<FoodLogEntry> {
    let food = FoodItem {
        id: Some("bench-food".into()),
        name: "Benchmark Food".into(),
        brand: None,
        serving_size: Some(100.0),
        serving_unit: Some("g".into()),
        calories: Some(210.0),
        protein_g: Some(12.5),
        carbs_g: Some(24.0),
        fat_g: Some(7.2),
        fiber_g: Some(3.1),
    };
    let start = Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).single().unwrap_or_default();

    (0..count)
        .map(|index| {
            let meal_type = MealType::ORDER[index % MealType::ORDER.len()];
            let logged_at = start + Duration::hours((index % 7) as i64 * 24 + (index % 12) as i64);
            FoodLogEntry::from_portion(
                &food,
                50.0 + ((index * 17) % 200) as f64,
                "g",
                meal_type,
                logged_at,
            )
        })
        .collect()
}

/// Benchmark goal derivation across profile batches
#[allow(clippy::cast_possible_truncation)]
fn bench_goal_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_derivation");

    group.bench_function("single_profile", |b| {
        let profile = BiometricProfile::from_codes(30, 175.0, 70.0, "male", 3, 3, 4);
        b.iter(|| derive_goals(black_box(&profile)));
    });

    for count in [10, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("derive_batch", count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .map(|profile| derive_goals(black_box(profile)).calories)
                        .sum::<u32>()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark resolving absolute and percent goal sets
fn bench_goal_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_resolution");

    let absolute = DailyGoals::default();
    let percent = DailyGoals {
        calories: 2556.0,
        protein: GoalAmount::Percent(30.0),
        carbs: GoalAmount::Percent(40.0),
        fat: GoalAmount::Percent(30.0),
    };

    group.bench_function("absolute_goal_set", |b| {
        b.iter(|| resolve_goals(black_box(&absolute)));
    });
    group.bench_function("percent_goal_set", |b| {
        b.iter(|| resolve_goals(black_box(&percent)));
    });

    group.finish();
}

/// Benchmark daily summaries over growing food logs
#[allow(clippy::cast_possible_truncation)]
fn bench_daily_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_summary");
    let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default();
    let goals = DailyGoals::default();

    for count in [20, 200, 2000] {
        let entries = generate_food_log(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("build_summary", count),
            &entries,
            |b, entries| {
                b.iter(|| DailySummary::build(black_box(date), black_box(entries), &goals));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_goal_derivation,
    bench_goal_resolution,
    bench_daily_summary,
);
criterion_main!(benches);
