// ABOUTME: Core types and constants for the Eatitude nutrition coaching core
// ABOUTME: Foundation crate with error handling, constants, and profile/plan data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

#![deny(unsafe_code)]

//! # Eatitude Core
//!
//! Foundation crate providing shared types and constants for the Eatitude
//! nutrition coaching core. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and field-level `ValidationError`
//! - **constants**: Storage keys, validation ranges, and default nutrition plan values
//! - **models**: `UserProfile`, `NutritionPlan`, and `AppFlowState`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `NutritionPlan`, `AppFlowState`)
pub mod models;
