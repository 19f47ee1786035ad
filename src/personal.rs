// ABOUTME: Personal view service reading the stored profile and plan and deriving display values
// ABOUTME: Ensures a plan exists, regenerates it on request and resets all app data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! # Personal Plan Service
//!
//! Backs the "Personal" tab: it loads the profile and plan written by the
//! onboarding flow, fills in the default plan for first-time users without a
//! profile, regenerates the plan through the [`PlanGenerator`] and builds a
//! [`PersonalSummary`] with BMI, sleep duration and status labels.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::gateway::{generate_with_fallback, PlanGenerator, PlanOutcome, RetryPolicy};
use crate::models::{NutritionPlan, UserProfile};
use crate::storage::AppStorage;
use eatitude_intelligence::{body_metrics, labels, sleep, validate_profile, BmiCategory};

/// Values derived for the personal view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalSummary {
    /// Stored profile
    pub profile: Option<UserProfile>,
    /// Stored plan
    pub plan: Option<NutritionPlan>,
    /// BMI to one decimal, "0.0" when unknown
    pub bmi: String,
    /// BMI band, when weight and height are known
    pub bmi_category: Option<BmiCategory>,
    /// Label of the BMI band
    pub bmi_label: Option<&'static str>,
    /// Color of the BMI band
    pub bmi_color: Option<&'static str>,
    /// "H jam M menit" or "-"
    pub sleep_duration: String,
    /// Gender label
    pub gender_label: Option<&'static str>,
    /// Activity level label
    pub activity_label: Option<&'static str>,
    /// Activity level explanation
    pub activity_description: Option<&'static str>,
    /// Goal label
    pub goal_label: Option<&'static str>,
    /// Plan review status label
    pub status_label: Option<&'static str>,
    /// Plan review status color
    pub status_color: Option<&'static str>,
}

impl PersonalSummary {
    /// Derive display values from whatever is stored
    #[must_use]
    pub fn build(profile: Option<UserProfile>, plan: Option<NutritionPlan>) -> Self {
        let (weight, height) = profile
            .as_ref()
            .map_or((None, None), |p| (p.weight_kg, p.height_cm));
        let bmi_category = body_metrics::bmi(weight, height).map(BmiCategory::from_bmi);
        let sleep_duration = profile.as_ref().map_or_else(
            || sleep::UNKNOWN_DURATION.to_owned(),
            |p| sleep::format_sleep_duration(&p.wake_time, &p.sleep_time),
        );

        Self {
            bmi: body_metrics::format_bmi(weight, height),
            bmi_category,
            bmi_label: bmi_category.map(BmiCategory::label),
            bmi_color: bmi_category.map(BmiCategory::color),
            sleep_duration,
            gender_label: profile
                .as_ref()
                .and_then(|p| p.gender)
                .map(labels::gender_label),
            activity_label: profile
                .as_ref()
                .and_then(|p| p.activity_level)
                .map(labels::activity_label),
            activity_description: profile
                .as_ref()
                .and_then(|p| p.activity_level)
                .map(labels::activity_description),
            goal_label: profile
                .as_ref()
                .and_then(|p| p.goal)
                .map(labels::goal_label),
            status_label: plan.as_ref().map(|p| labels::status_label(&p.status)),
            status_color: plan.as_ref().map(|p| labels::status_color(&p.status)),
            profile,
            plan,
        }
    }
}

/// Personal view operations over storage and the plan generator
#[derive(Clone)]
pub struct PersonalPlanService {
    storage: AppStorage,
    generator: Arc<dyn PlanGenerator>,
    retry: RetryPolicy,
}

impl PersonalPlanService {
    /// Create the service
    #[must_use]
    pub fn new(storage: AppStorage, generator: Arc<dyn PlanGenerator>, retry: RetryPolicy) -> Self {
        Self {
            storage,
            generator,
            retry,
        }
    }

    /// Storage shared with the other controllers
    #[must_use]
    pub const fn storage(&self) -> &AppStorage {
        &self.storage
    }

    /// Stored profile; unreadable records count as absent
    pub async fn load_profile(&self) -> Option<UserProfile> {
        self.storage.load_profile().await.unwrap_or_else(|e| {
            warn!(error = %e, "Stored profile unreadable, treating as absent");
            None
        })
    }

    /// Stored plan; unreadable records count as absent
    pub async fn load_plan(&self) -> Option<NutritionPlan> {
        self.storage.load_plan().await.unwrap_or_else(|e| {
            warn!(error = %e, "Stored plan unreadable, treating as absent");
            None
        })
    }

    /// Plan to display when the personal view opens
    ///
    /// A stored plan is returned as is. Without a plan or a profile the
    /// default plan is stored and returned. A profile without a plan yields
    /// `None` so the user can trigger generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the default plan cannot be stored
    pub async fn ensure_plan(&self) -> AppResult<Option<NutritionPlan>> {
        if let Some(plan) = self.load_plan().await {
            return Ok(Some(plan));
        }
        if self.load_profile().await.is_some() {
            info!("Profile present without a plan, waiting for generation");
            return Ok(None);
        }

        let plan = NutritionPlan::fallback();
        self.storage.save_plan(&plan).await?;
        info!("No profile or plan stored, default plan saved");
        Ok(Some(plan))
    }

    /// Regenerate the plan for the stored profile
    ///
    /// # Errors
    ///
    /// Returns a validation error when no profile is stored or it is incomplete
    pub async fn generate_plan(&self) -> AppResult<PlanOutcome> {
        let profile = self.load_profile().await.ok_or_else(|| {
            AppError::invalid_input("Profil belum lengkap. Silakan selesaikan onboarding terlebih dahulu.")
        })?;
        validate_profile(&profile)?;
        Ok(self.generate_for_profile(&profile).await)
    }

    /// Generate and store a plan for `profile`, falling back to the default plan
    ///
    /// A storage failure is logged; the returned plan is still usable.
    pub async fn generate_for_profile(&self, profile: &UserProfile) -> PlanOutcome {
        let outcome = generate_with_fallback(self.generator.as_ref(), profile, self.retry).await;
        if let Err(e) = self.storage.save_plan(&outcome.plan).await {
            warn!(error = %e, fallback = outcome.is_fallback(), "Failed to store nutrition plan");
        }
        outcome
    }

    /// Derived values for the current stored state
    pub async fn summary(&self) -> PersonalSummary {
        PersonalSummary::build(self.load_profile().await, self.load_plan().await)
    }

    /// Delete the profile, plan and all app-flow flags
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be cleared
    pub async fn reset_app(&self) -> AppResult<()> {
        self.storage.clear().await
    }
}
