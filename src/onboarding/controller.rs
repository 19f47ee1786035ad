// ABOUTME: Onboarding controller owning the step, the profile accumulator and the generation guard
// ABOUTME: Validates before advancing, persists on completion and always leaves the user unblocked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use tracing::{error, info, warn};

use super::step::OnboardingStep;
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::gateway::PlanOutcome;
use crate::models::{HealthGoal, ProfileUpdate, UserProfile};
use crate::personal::PersonalPlanService;
use crate::storage::AppStorage;

/// Result of `next_step`
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Moved to the given step
    Advanced(OnboardingStep),
    /// Current step failed validation; nothing changed
    Invalid(ValidationError),
    /// Last step passed and onboarding completed
    Completed(CompletionOutcome),
    /// Onboarding had already completed; nothing changed
    AlreadyComplete,
}

/// How profile persistence went during completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
    /// Profile and flags stored
    Saved,
    /// Storage failed; flags were forced and the user may continue
    Recovered {
        /// Storage error message
        error: String,
    },
}

/// Result of `complete_onboarding`
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    /// Persistence result
    pub status: CompletionStatus,
    /// Generated or fallback plan
    pub plan: PlanOutcome,
}

impl CompletionOutcome {
    /// Whether the user should see a recoverable-error notice
    #[must_use]
    pub const fn is_recovered(&self) -> bool {
        matches!(self.status, CompletionStatus::Recovered { .. })
    }
}

/// Four-step onboarding wizard
pub struct OnboardingController {
    step: OnboardingStep,
    profile: UserProfile,
    is_generating: bool,
    storage: AppStorage,
    personal: PersonalPlanService,
}

impl OnboardingController {
    /// Start a fresh wizard with an empty profile
    #[must_use]
    pub fn new(personal: PersonalPlanService) -> Self {
        Self {
            step: OnboardingStep::default(),
            profile: UserProfile::default(),
            is_generating: false,
            storage: personal.storage().clone(),
            personal,
        }
    }

    /// Current step
    #[must_use]
    pub const fn current_step(&self) -> OnboardingStep {
        self.step
    }

    /// Profile collected so far
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Whether completion is running; the advance control is disabled meanwhile
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Merge partial fields without validating
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        self.profile.apply(update);
    }

    /// Select the health goal
    pub fn select_goal(&mut self, goal: HealthGoal) {
        self.profile.goal = Some(goal);
    }

    /// Silent check of the current step
    #[must_use]
    pub fn validate_current_step(&self) -> bool {
        self.step.validate(&self.profile).is_ok()
    }

    /// First failing field of the current step, if any
    #[must_use]
    pub fn current_step_error(&self) -> Option<ValidationError> {
        self.step.validate(&self.profile).err()
    }

    /// Validate and move forward, completing after the last step
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` while a completion is already running
    pub async fn next_step(&mut self) -> AppResult<StepOutcome> {
        self.ensure_idle()?;

        if self.step.is_complete() {
            return Ok(StepOutcome::AlreadyComplete);
        }

        if let Err(reason) = self.step.validate(&self.profile) {
            info!(step = ?self.step, field = %reason.field, "Onboarding step invalid");
            return Ok(StepOutcome::Invalid(reason));
        }

        if let Some(next) = self.step.advance() {
            info!(from = ?self.step, to = ?next, "Onboarding step advanced");
            self.step = next;
            return Ok(StepOutcome::Advanced(next));
        }

        self.complete_onboarding().await.map(StepOutcome::Completed)
    }

    /// Move back one step; no-op on the first step and once complete
    pub fn prev_step(&mut self) {
        if let Some(previous) = self.step.retreat() {
            self.step = previous;
        }
    }

    /// Persist the profile, set the app-flow flags and request the first plan
    ///
    /// Storage failures never block the user: the flags are written again as a
    /// best effort and the outcome is marked recovered. Plan generation
    /// failures degrade to the default plan.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` while another completion is running
    pub async fn complete_onboarding(&mut self) -> AppResult<CompletionOutcome> {
        self.ensure_idle()?;
        let _generating = GeneratingGuard::engage(&mut self.is_generating);

        let status = match Self::persist_completion(&self.storage, &self.profile).await {
            Ok(()) => CompletionStatus::Saved,
            Err(e) => {
                error!(error = %e, "Failed to persist onboarding, forcing completion flags");
                Self::force_completion_flags(&self.storage).await;
                CompletionStatus::Recovered {
                    error: e.to_string(),
                }
            }
        };

        let plan = self.personal.generate_for_profile(&self.profile).await;

        self.step = OnboardingStep::Complete;

        info!(
            recovered = matches!(status, CompletionStatus::Recovered { .. }),
            fallback_plan = plan.is_fallback(),
            "Onboarding completed"
        );
        Ok(CompletionOutcome { status, plan })
    }

    fn ensure_idle(&self) -> AppResult<()> {
        if self.is_generating {
            return Err(AppError::locked("Nutrition plan generation already in progress"));
        }
        Ok(())
    }

    async fn persist_completion(storage: &AppStorage, profile: &UserProfile) -> AppResult<()> {
        storage.save_profile(profile).await?;
        storage
            .set_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
            .await?;
        storage.set_flag(storage_keys::HAS_SEEN_WELCOME).await
    }

    async fn force_completion_flags(storage: &AppStorage) {
        for key in [
            storage_keys::HAS_COMPLETED_ONBOARDING,
            storage_keys::HAS_SEEN_WELCOME,
        ] {
            if let Err(e) = storage.set_flag(key).await {
                warn!(key, error = %e, "Failed to force app-flow flag");
            }
        }
    }
}

/// Holds the generation flag for the duration of a completion
///
/// Clearing happens on drop, so a completion future cancelled mid-await
/// still leaves the controller usable.
struct GeneratingGuard<'a>(&'a mut bool);

impl<'a> GeneratingGuard<'a> {
    fn engage(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for GeneratingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
