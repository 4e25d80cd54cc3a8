// ABOUTME: Goal history store error types for the append-only audit trail
// ABOUTME: Provides structured errors that integrate with the main AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # History Error Types
//!
//! - `HistoryError` - failures reported by a goal history store
//! - Conversion to `AppError` for callers that want the unified error type

use std::error::Error;
use std::fmt;

use uuid::Uuid;

use super::{AppError, ErrorCode};

/// Errors raised by goal history stores.
///
/// The recorder never propagates these to the goal update; they are logged and
/// reported back as an outcome value.
#[derive(Debug, Clone)]
pub enum HistoryError {
    /// Store could not be reached
    Unavailable {
        /// Store-specific explanation
        reason: String,
    },
    /// Store refused the record
    Rejected {
        /// User the record belonged to
        user_id: Uuid,
        /// Store-specific explanation
        reason: String,
    },
    /// Record could not be encoded for the store
    Encoding {
        /// Encoder error message
        details: String,
    },
}

impl HistoryError {
    /// Create an "unavailable" error
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Create a "rejected" error
    #[must_use]
    pub fn rejected(user_id: Uuid, reason: impl Into<String>) -> Self {
        Self::Rejected {
            user_id,
            reason: reason.into(),
        }
    }

    /// Create an "encoding" error
    #[must_use]
    pub fn encoding(details: impl Into<String>) -> Self {
        Self::Encoding {
            details: details.into(),
        }
    }
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "Goal history store unavailable: {reason}"),
            Self::Rejected { user_id, reason } => {
                write!(f, "Goal history record for user {user_id} rejected: {reason}")
            }
            Self::Encoding { details } => write!(f, "Goal history record encoding failed: {details}"),
        }
    }
}

impl Error for HistoryError {}

impl From<HistoryError> for AppError {
    fn from(error: HistoryError) -> Self {
        let user_id = match &error {
            HistoryError::Rejected { user_id, .. } => Some(*user_id),
            HistoryError::Unavailable { .. } | HistoryError::Encoding { .. } => None,
        };
        let code = match &error {
            HistoryError::Encoding { .. } => ErrorCode::SerializationError,
            HistoryError::Unavailable { .. } | HistoryError::Rejected { .. } => {
                ErrorCode::StorageError
            }
        };

        let app_error = Self::new(code, error.to_string()).with_source(error);
        match user_id {
            Some(id) => app_error.with_user_id(id),
            None => app_error,
        }
    }
}
