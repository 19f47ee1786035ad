// ABOUTME: Validation rules and personal-plan derivations for the Eatitude core
// ABOUTME: Pure, synchronous functions shared by the onboarding controller and the personal view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

#![deny(unsafe_code)]

//! # Eatitude Intelligence
//!
//! Everything here is a pure function of profile or plan data:
//!
//! - **validation**: field predicates, `ValidationError`-returning checks, per-step profile rules
//! - **body_metrics**: BMI and its WHO category with label and color
//! - **sleep**: sleep duration across midnight
//! - **labels**: Indonesian display labels for statuses, activity levels, goals and gender

/// Field rules for the onboarding wizard
pub mod validation;

/// BMI calculation and classification
pub mod body_metrics;

/// Sleep duration derivation
pub mod sleep;

/// Display labels
pub mod labels;

pub use body_metrics::{bmi, format_bmi, BmiCategory};
pub use sleep::{format_sleep_duration, sleep_duration_minutes};
pub use validation::{
    format_time, valid_age, valid_height, valid_name, valid_time, valid_weight, validate_profile,
};
