// ABOUTME: User profile model collected by the onboarding wizard
// ABOUTME: UserProfile, ProfileUpdate partial merge, Gender, ActivityLevel and HealthGoal enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use serde::{Deserialize, Serialize};

use crate::constants::profile_defaults;

/// Biological sex used for nutrition targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// Weekly physical activity level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 1-3 times per week
    Light,
    /// Exercise 3-5 times per week
    Moderate,
    /// Exercise 6-7 times per week
    Active,
    /// Heavy exercise and physical work
    VeryActive,
}

impl ActivityLevel {
    /// All levels in display order
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];
}

/// Health objective selected in the last onboarding step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Improve overall health
    ImproveHealth,
    /// Keep current weight
    MaintainWeight,
    /// Reduce weight
    LoseWeight,
    /// Increase weight
    GainWeight,
    /// Manage a medical condition through diet
    ManageDisease,
}

impl HealthGoal {
    /// All goals in display order
    pub const ALL: [Self; 5] = [
        Self::ImproveHealth,
        Self::MaintainWeight,
        Self::LoseWeight,
        Self::GainWeight,
        Self::ManageDisease,
    ];
}

/// Profile accumulated across the onboarding steps
///
/// Optional fields stay `None` until the user fills them in; the onboarding
/// controller decides when the profile is complete enough to advance.
/// Missing keys deserialize to the `Default` values, so the usual wake and
/// sleep times apply to records and CLI input that omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Display name (required, non-empty after trim)
    pub name: String,
    /// Age in years
    pub age: Option<u32>,
    /// Biological sex
    pub gender: Option<Gender>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weekly activity level
    pub activity_level: Option<ActivityLevel>,
    /// Free-text description of the user's activities
    pub activity_notes: String,
    /// Usual wake-up time (`HH:MM`)
    pub wake_time: String,
    /// Usual bedtime (`HH:MM`)
    pub sleep_time: String,
    /// Free-text food preferences
    pub food_preferences: String,
    /// Free-text food allergies
    pub allergies: String,
    /// Free-text health conditions
    pub health_conditions: String,
    /// Selected health goal
    pub goal: Option<HealthGoal>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: None,
            gender: None,
            weight_kg: None,
            height_cm: None,
            activity_level: None,
            activity_notes: String::new(),
            wake_time: profile_defaults::WAKE_TIME.to_owned(),
            sleep_time: profile_defaults::SLEEP_TIME.to_owned(),
            food_preferences: String::new(),
            allergies: String::new(),
            health_conditions: String::new(),
            goal: None,
        }
    }
}

impl UserProfile {
    /// Merge a partial update into this profile
    ///
    /// No validation is performed; rules run separately before a step advances.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level,
            activity_notes,
            wake_time,
            sleep_time,
            food_preferences,
            allergies,
            health_conditions,
            goal,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(weight_kg) = weight_kg {
            self.weight_kg = weight_kg;
        }
        if let Some(height_cm) = height_cm {
            self.height_cm = height_cm;
        }
        if let Some(activity_level) = activity_level {
            self.activity_level = activity_level;
        }
        if let Some(activity_notes) = activity_notes {
            self.activity_notes = activity_notes;
        }
        if let Some(wake_time) = wake_time {
            self.wake_time = wake_time;
        }
        if let Some(sleep_time) = sleep_time {
            self.sleep_time = sleep_time;
        }
        if let Some(food_preferences) = food_preferences {
            self.food_preferences = food_preferences;
        }
        if let Some(allergies) = allergies {
            self.allergies = allergies;
        }
        if let Some(health_conditions) = health_conditions {
            self.health_conditions = health_conditions;
        }
        if let Some(goal) = goal {
            self.goal = goal;
        }
    }
}

/// Partial profile merged by `UserProfile::apply`
///
/// Outer `None` leaves a field untouched. For optional profile fields the
/// inner `Option` distinguishes "set" from "clear" (an emptied numeric input).
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
#[allow(clippy::option_option)] // Some(None) clears a field, None leaves it untouched
pub struct ProfileUpdate {
    /// New name
    pub name: Option<String>,
    /// New age
    pub age: Option<Option<u32>>,
    /// New gender
    pub gender: Option<Option<Gender>>,
    /// New weight
    pub weight_kg: Option<Option<f64>>,
    /// New height
    pub height_cm: Option<Option<f64>>,
    /// New activity level
    pub activity_level: Option<Option<ActivityLevel>>,
    /// New activity notes
    pub activity_notes: Option<String>,
    /// New wake-up time
    pub wake_time: Option<String>,
    /// New bedtime
    pub sleep_time: Option<String>,
    /// New food preferences
    pub food_preferences: Option<String>,
    /// New allergies
    pub allergies: Option<String>,
    /// New health conditions
    pub health_conditions: Option<String>,
    /// New goal
    pub goal: Option<Option<HealthGoal>>,
}

impl ProfileUpdate {
    /// Empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set or clear the age
    pub fn age(mut self, age: impl Into<Option<u32>>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Set or clear the gender
    pub fn gender(mut self, gender: impl Into<Option<Gender>>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Set or clear the weight
    pub fn weight_kg(mut self, weight_kg: impl Into<Option<f64>>) -> Self {
        self.weight_kg = Some(weight_kg.into());
        self
    }

    /// Set or clear the height
    pub fn height_cm(mut self, height_cm: impl Into<Option<f64>>) -> Self {
        self.height_cm = Some(height_cm.into());
        self
    }

    /// Set or clear the activity level
    pub fn activity_level(mut self, level: impl Into<Option<ActivityLevel>>) -> Self {
        self.activity_level = Some(level.into());
        self
    }

    /// Set the activity notes
    pub fn activity_notes(mut self, notes: impl Into<String>) -> Self {
        self.activity_notes = Some(notes.into());
        self
    }

    /// Set the wake-up time
    pub fn wake_time(mut self, time: impl Into<String>) -> Self {
        self.wake_time = Some(time.into());
        self
    }

    /// Set the bedtime
    pub fn sleep_time(mut self, time: impl Into<String>) -> Self {
        self.sleep_time = Some(time.into());
        self
    }

    /// Set food preferences
    pub fn food_preferences(mut self, text: impl Into<String>) -> Self {
        self.food_preferences = Some(text.into());
        self
    }

    /// Set allergies
    pub fn allergies(mut self, text: impl Into<String>) -> Self {
        self.allergies = Some(text.into());
        self
    }

    /// Set health conditions
    pub fn health_conditions(mut self, text: impl Into<String>) -> Self {
        self.health_conditions = Some(text.into());
        self
    }

    /// Set or clear the goal
    pub fn goal(mut self, goal: impl Into<Option<HealthGoal>>) -> Self {
        self.goal = Some(goal.into());
        self
    }
}

impl From<UserProfile> for ProfileUpdate {
    /// Update that overwrites every field with the given profile's values
    fn from(profile: UserProfile) -> Self {
        Self {
            name: Some(profile.name),
            age: Some(profile.age),
            gender: Some(profile.gender),
            weight_kg: Some(profile.weight_kg),
            height_cm: Some(profile.height_cm),
            activity_level: Some(profile.activity_level),
            activity_notes: Some(profile.activity_notes),
            wake_time: Some(profile.wake_time),
            sleep_time: Some(profile.sleep_time),
            food_preferences: Some(profile.food_preferences),
            allergies: Some(profile.allergies),
            health_conditions: Some(profile.health_conditions),
            goal: Some(profile.goal),
        }
    }
}
