// ABOUTME: Core types and constants for the macro goals engine
// ABOUTME: Foundation crate with error handling, nutrition constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Goals Core
//!
//! Foundation crate providing shared types and constants for daily calorie and
//! macro goal computation. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and history store errors
//! - **constants**: Nutrition constants (energy density, default goals, safety floor)
//! - **models**: Biometric profile, goal representations, goal history, and food log models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`BiometricProfile`, `DailyGoals`, `GoalChangeRecord`, food log)
pub mod models;
