// ABOUTME: Explicit state machine for the four-step onboarding wizard
// ABOUTME: Steps advance one at a time, retreat freely and end in a terminal Complete state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::models::UserProfile;
use eatitude_intelligence::validation;

/// Number of wizard steps before completion
pub const STEP_COUNT: usize = 4;

/// Position in the onboarding wizard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    /// Step 0: name, age, gender
    #[default]
    PersonalInfo,
    /// Step 1: weight, height
    BodyMetrics,
    /// Step 2: activity level, notes, wake and sleep time
    ActivityRest,
    /// Step 3: goal and optional dietary notes
    Goals,
    /// Terminal state after completion
    Complete,
}

impl OnboardingStep {
    /// Wizard steps in order, excluding `Complete`
    pub const STEPS: [Self; STEP_COUNT] = [
        Self::PersonalInfo,
        Self::BodyMetrics,
        Self::ActivityRest,
        Self::Goals,
    ];

    /// Zero-based index; `Complete` reports `STEP_COUNT`
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::PersonalInfo => 0,
            Self::BodyMetrics => 1,
            Self::ActivityRest => 2,
            Self::Goals => 3,
            Self::Complete => STEP_COUNT,
        }
    }

    /// Wizard step at `index`
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::STEPS.get(index).copied()
    }

    /// Header shown above the step
    #[must_use]
    pub const fn title(self) -> Option<&'static str> {
        match self {
            Self::PersonalInfo => Some("Personal Info"),
            Self::BodyMetrics => Some("Body Metrics"),
            Self::ActivityRest => Some("Activity & Rest"),
            Self::Goals => Some("Goals & Objectives"),
            Self::Complete => None,
        }
    }

    /// Whether this is the last wizard step
    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Goals)
    }

    /// Whether onboarding has finished
    #[must_use]
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Next wizard step; `None` on the last step and once complete
    #[must_use]
    pub const fn advance(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::BodyMetrics),
            Self::BodyMetrics => Some(Self::ActivityRest),
            Self::ActivityRest => Some(Self::Goals),
            Self::Goals | Self::Complete => None,
        }
    }

    /// Previous wizard step; `None` on the first step and once complete
    #[must_use]
    pub const fn retreat(self) -> Option<Self> {
        match self {
            Self::BodyMetrics => Some(Self::PersonalInfo),
            Self::ActivityRest => Some(Self::BodyMetrics),
            Self::Goals => Some(Self::ActivityRest),
            Self::PersonalInfo | Self::Complete => None,
        }
    }

    /// `Complete`, reachable only from the last step
    #[must_use]
    pub const fn complete(self) -> Option<Self> {
        match self {
            Self::Goals => Some(Self::Complete),
            _ => None,
        }
    }

    /// Progress bar fill in percent, counting the current step as reached
    #[must_use]
    pub fn progress_percent(self) -> u8 {
        ((self.index() + 1).min(STEP_COUNT) * 100 / STEP_COUNT) as u8
    }

    /// "n of 4" label
    #[must_use]
    pub fn position_label(self) -> String {
        format!("{} of {STEP_COUNT}", (self.index() + 1).min(STEP_COUNT))
    }

    /// Run the rules for the fields this step collects
    ///
    /// # Errors
    ///
    /// Returns the first failing field in form order; `Complete` always passes
    pub fn validate(self, profile: &UserProfile) -> Result<(), ValidationError> {
        match self {
            Self::PersonalInfo => validation::validate_personal_info(profile),
            Self::BodyMetrics => validation::validate_body_metrics(profile),
            Self::ActivityRest => validation::validate_activity_rest(profile),
            Self::Goals => validation::validate_goals(profile),
            Self::Complete => Ok(()),
        }
    }
}
