// ABOUTME: Command implementations for eatitude-cli
// ABOUTME: Each command runs one app action and returns the JSON value printed by main
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use anyhow::{bail, Context, Result};
use eatitude::gateway::{PlanOutcome, PlanSource};
use eatitude::models::{ProfileUpdate, UserProfile};
use eatitude::onboarding::{CompletionOutcome, CompletionStatus, OnboardingController, StepOutcome};
use eatitude::personal::PersonalPlanService;
use eatitude::router::StartupRouter;
use eatitude::storage::AppStorage;
use serde_json::{json, Value};

fn plan_outcome_json(outcome: &PlanOutcome) -> Value {
    let fallback_reason = match &outcome.source {
        PlanSource::Generated => None,
        PlanSource::Fallback { reason } => Some(reason.as_str()),
    };
    json!({
        "plan": outcome.plan,
        "fallback": outcome.is_fallback(),
        "fallbackReason": fallback_reason,
    })
}

fn completion_json(outcome: &CompletionOutcome) -> Value {
    let storage_error = match &outcome.status {
        CompletionStatus::Saved => None,
        CompletionStatus::Recovered { error } => Some(error.as_str()),
    };
    json!({
        "saved": !outcome.is_recovered(),
        "storageError": storage_error,
        "nutritionPlan": plan_outcome_json(&outcome.plan),
    })
}

pub async fn status(storage: AppStorage, personal: &PersonalPlanService) -> Value {
    let router = StartupRouter::load(storage).await;
    json!({
        "route": router.route(),
        "flags": router.state(),
        "personal": personal.summary().await,
    })
}

pub async fn welcome(storage: AppStorage) -> Result<Value> {
    let mut router = StartupRouter::load(storage).await;
    let route = router.acknowledge_welcome().await?;
    Ok(json!({ "route": route }))
}

pub async fn acknowledge_personal(storage: AppStorage) -> Result<Value> {
    let mut router = StartupRouter::load(storage).await;
    if !router.state().has_completed_onboarding {
        bail!("Onboarding has not been completed yet");
    }
    let route = router.acknowledge_personal().await?;
    Ok(json!({ "route": route }))
}

pub async fn onboard(personal: PersonalPlanService, profile_json: &str) -> Result<Value> {
    let profile: UserProfile =
        serde_json::from_str(profile_json).context("Profile is not valid JSON")?;

    let mut controller = OnboardingController::new(personal);
    controller.update_profile(ProfileUpdate::from(profile));

    loop {
        let step = controller.current_step();
        match controller.next_step().await? {
            StepOutcome::Advanced(_) => {}
            StepOutcome::Invalid(reason) => {
                bail!(
                    "{} (step {}, field '{}')",
                    reason.message,
                    step.position_label(),
                    reason.field
                );
            }
            StepOutcome::Completed(outcome) => return Ok(completion_json(&outcome)),
            StepOutcome::AlreadyComplete => bail!("Onboarding already completed"),
        }
    }
}

pub async fn plan(personal: &PersonalPlanService) -> Result<Value> {
    let plan = personal.ensure_plan().await?;
    Ok(json!({
        "nutritionPlan": plan,
        "personal": personal.summary().await,
    }))
}

pub async fn generate(personal: &PersonalPlanService) -> Result<Value> {
    let outcome = personal.generate_plan().await?;
    Ok(plan_outcome_json(&outcome))
}

pub async fn reset(personal: &PersonalPlanService) -> Result<Value> {
    personal.reset_app().await?;
    Ok(json!({ "reset": true }))
}
