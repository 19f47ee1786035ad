// ABOUTME: Field-level validation error raised by onboarding rules
// ABOUTME: Carries the offending field and a user-facing message, converts into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! # Validation Error Types
//!
//! Provides the structured error returned when a profile field fails a rule:
//! - `ValidationError` - names the field and carries the message shown to the user
//! - Conversion to `AppError` for callers that only deal in `AppResult`

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AppError, ErrorCode};

/// A single failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Profile field that failed (e.g. `age`, `wake_time`)
    pub field: String,
    /// User-facing message describing the expected value
    pub message: String,
    /// Error classification (missing, out of range, bad format)
    pub code: ErrorCode,
}

impl ValidationError {
    /// Field was left empty
    #[must_use]
    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: ErrorCode::MissingRequiredField,
        }
    }

    /// Numeric field outside its accepted range
    #[must_use]
    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: ErrorCode::ValueOutOfRange,
        }
    }

    /// Text field with the wrong shape
    #[must_use]
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: ErrorCode::InvalidFormat,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Error for ValidationError {}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::new(error.code, error.to_string())
    }
}
