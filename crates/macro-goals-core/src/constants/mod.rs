// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Nutrition energy densities, default goal set, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Nutrition constants used by goal derivation and resolution
pub mod nutrition;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Service name reported at logging startup
    pub const MACRO_GOALS: &str = "macro-goals";
}
