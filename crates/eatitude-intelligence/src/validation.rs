// ABOUTME: Field rules for the onboarding wizard with user-facing messages
// ABOUTME: Age, weight, height, time and name predicates plus per-step profile checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! # Validation Rules
//!
//! Each rule comes in two forms: a `valid_*` predicate used for silent checks
//! (e.g. enabling the "next" control) and a `check_*` function returning a
//! [`ValidationError`] carrying the message shown to the user.
//!
//! The `validate_*` functions group the rules by onboarding step and report
//! the first failing field in form order.

use std::sync::OnceLock;

use eatitude_core::constants::ranges;
use eatitude_core::errors::ValidationError;
use eatitude_core::models::UserProfile;
use regex::Regex;

/// User-facing messages, one per rule
pub mod messages {
    /// Empty name
    pub const NAME: &str = "Silakan masukkan nama Anda.";
    /// Missing or out-of-range age
    pub const AGE: &str = "Silakan masukkan usia yang valid (1-120 tahun).";
    /// No gender selected
    pub const GENDER: &str = "Silakan pilih jenis kelamin Anda.";
    /// Missing or out-of-range weight
    pub const WEIGHT: &str = "Silakan masukkan berat badan yang valid (20-500 kg).";
    /// Missing or out-of-range height
    pub const HEIGHT: &str = "Silakan masukkan tinggi badan yang valid (50-250 cm).";
    /// No activity level selected
    pub const ACTIVITY_LEVEL: &str = "Silakan pilih tingkat aktivitas Anda.";
    /// Malformed wake-up time
    pub const WAKE_TIME: &str = "Silakan masukkan waktu bangun yang valid (format HH:MM).";
    /// Malformed bedtime
    pub const SLEEP_TIME: &str = "Silakan masukkan waktu tidur yang valid (format HH:MM).";
    /// No goal selected
    pub const GOAL: &str = "Silakan pilih tujuan kesehatan Anda.";
}

/// Profile field identifiers reported in [`ValidationError::field`]
pub mod fields {
    /// `UserProfile::name`
    pub const NAME: &str = "name";
    /// `UserProfile::age`
    pub const AGE: &str = "age";
    /// `UserProfile::gender`
    pub const GENDER: &str = "gender";
    /// `UserProfile::weight_kg`
    pub const WEIGHT: &str = "weight_kg";
    /// `UserProfile::height_cm`
    pub const HEIGHT: &str = "height_cm";
    /// `UserProfile::activity_level`
    pub const ACTIVITY_LEVEL: &str = "activity_level";
    /// `UserProfile::wake_time`
    pub const WAKE_TIME: &str = "wake_time";
    /// `UserProfile::sleep_time`
    pub const SLEEP_TIME: &str = "sleep_time";
    /// `UserProfile::goal`
    pub const GOAL: &str = "goal";
}

/// Get compiled `HH:MM` regex (cached)
///
/// Returns None if regex compilation fails (should never happen with hardcoded pattern)
fn time_regex() -> Option<&'static Regex> {
    static TIME_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    TIME_REGEX
        .get_or_init(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").ok())
        .as_ref()
}

/// Age in whole years within [1, 120]
#[must_use]
pub fn valid_age(age: u32) -> bool {
    (ranges::MIN_AGE..=ranges::MAX_AGE).contains(&age)
}

/// Weight within [20, 500] kg
#[must_use]
pub fn valid_weight(weight_kg: f64) -> bool {
    (ranges::MIN_WEIGHT_KG..=ranges::MAX_WEIGHT_KG).contains(&weight_kg)
}

/// Height within [50, 250] cm
#[must_use]
pub fn valid_height(height_cm: f64) -> bool {
    (ranges::MIN_HEIGHT_CM..=ranges::MAX_HEIGHT_CM).contains(&height_cm)
}

/// Zero-padded 24-hour `HH:MM`
#[must_use]
pub fn valid_time(time: &str) -> bool {
    time_regex().is_some_and(|re| re.is_match(time))
}

/// Name that is not blank
#[must_use]
pub fn valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Normalize free-form digit input into `HH:MM`
///
/// Non-digits are dropped. Three digits read as `H MM` ("630" becomes
/// "06:30"), four or more as `HH MM` with extra digits ignored. Shorter
/// input is returned unchanged so the user can keep typing.
#[must_use]
pub fn format_time(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    match digits.as_slice() {
        [h, m1, m2] => format!("0{h}:{m1}{m2}"),
        [h1, h2, m1, m2, ..] => format!("{h1}{h2}:{m1}{m2}"),
        _ => input.to_owned(),
    }
}

/// Parse raw age input, rejecting fractions and non-numbers
///
/// # Errors
///
/// Returns a [`ValidationError`] when the input is blank, not a whole number,
/// or outside the accepted range.
pub fn parse_age_input(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::missing(fields::AGE, messages::AGE));
    }
    let age = trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::invalid_format(fields::AGE, messages::AGE))?;
    check_age(Some(age))?;
    Ok(age)
}

/// Parse raw weight or height input
///
/// Accepts a comma as decimal separator. Blank input yields `Ok(None)`.
///
/// # Errors
///
/// Returns a [`ValidationError`] for the given field when the input is not a number.
pub fn parse_measurement_input(
    field: &str,
    message: &str,
    input: &str,
) -> Result<Option<f64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ValidationError::invalid_format(field, message))
}

/// Check the name field
///
/// # Errors
///
/// Returns a [`ValidationError`] when the name is blank.
pub fn check_name(name: &str) -> Result<(), ValidationError> {
    if valid_name(name) {
        Ok(())
    } else {
        Err(ValidationError::missing(fields::NAME, messages::NAME))
    }
}

/// Check the age field
///
/// # Errors
///
/// Returns a [`ValidationError`] when the age is absent or out of range.
pub fn check_age(age: Option<u32>) -> Result<(), ValidationError> {
    match age {
        None => Err(ValidationError::missing(fields::AGE, messages::AGE)),
        Some(age) if !valid_age(age) => {
            Err(ValidationError::out_of_range(fields::AGE, messages::AGE))
        }
        Some(_) => Ok(()),
    }
}

/// Check the weight field
///
/// # Errors
///
/// Returns a [`ValidationError`] when the weight is absent or out of range.
pub fn check_weight(weight_kg: Option<f64>) -> Result<(), ValidationError> {
    match weight_kg {
        None => Err(ValidationError::missing(fields::WEIGHT, messages::WEIGHT)),
        Some(weight) if !valid_weight(weight) => Err(ValidationError::out_of_range(
            fields::WEIGHT,
            messages::WEIGHT,
        )),
        Some(_) => Ok(()),
    }
}

/// Check the height field
///
/// # Errors
///
/// Returns a [`ValidationError`] when the height is absent or out of range.
pub fn check_height(height_cm: Option<f64>) -> Result<(), ValidationError> {
    match height_cm {
        None => Err(ValidationError::missing(fields::HEIGHT, messages::HEIGHT)),
        Some(height) if !valid_height(height) => Err(ValidationError::out_of_range(
            fields::HEIGHT,
            messages::HEIGHT,
        )),
        Some(_) => Ok(()),
    }
}

/// Check a time field against `HH:MM`
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` carrying `message` when the time is malformed.
pub fn check_time(field: &str, message: &str, time: &str) -> Result<(), ValidationError> {
    if valid_time(time) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, message))
    }
}

/// Step 0: name, age, gender
///
/// # Errors
///
/// Returns the first failing field in form order.
pub fn validate_personal_info(profile: &UserProfile) -> Result<(), ValidationError> {
    check_name(&profile.name)?;
    check_age(profile.age)?;
    if profile.gender.is_none() {
        return Err(ValidationError::missing(fields::GENDER, messages::GENDER));
    }
    Ok(())
}

/// Step 1: weight, height
///
/// # Errors
///
/// Returns the first failing field in form order.
pub fn validate_body_metrics(profile: &UserProfile) -> Result<(), ValidationError> {
    check_weight(profile.weight_kg)?;
    check_height(profile.height_cm)
}

/// Step 2: activity level, wake-up time, bedtime
///
/// # Errors
///
/// Returns the first failing field in form order.
pub fn validate_activity_rest(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.activity_level.is_none() {
        return Err(ValidationError::missing(
            fields::ACTIVITY_LEVEL,
            messages::ACTIVITY_LEVEL,
        ));
    }
    check_time(fields::WAKE_TIME, messages::WAKE_TIME, &profile.wake_time)?;
    check_time(fields::SLEEP_TIME, messages::SLEEP_TIME, &profile.sleep_time)
}

/// Step 3: goal
///
/// # Errors
///
/// Returns a [`ValidationError`] when no goal is selected.
pub fn validate_goals(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.goal.is_none() {
        return Err(ValidationError::missing(fields::GOAL, messages::GOAL));
    }
    Ok(())
}

/// All four steps in order
///
/// # Errors
///
/// Returns the first failing field of the first incomplete step.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    validate_personal_info(profile)?;
    validate_body_metrics(profile)?;
    validate_activity_rest(profile)?;
    validate_goals(profile)
}
