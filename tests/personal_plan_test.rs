// ABOUTME: Integration tests for the personal plan service and summary
// ABOUTME: Covers default plan seeding, regeneration with fallback, derived display values and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{complete_profile, generated_plan, personal_service, StubGenerator};
use eatitude::constants::{colors, storage_keys};
use eatitude::errors::ErrorCode;
use eatitude::gateway::PlanSource;
use eatitude::models::{NutritionPlan, PlanStatus, UserProfile};
use eatitude::personal::PersonalSummary;
use eatitude::storage::AppStorage;
use eatitude_intelligence::BmiCategory;

#[tokio::test]
async fn test_ensure_plan_seeds_default_for_first_time_user() -> Result<()> {
    let storage = AppStorage::in_memory();
    let service = personal_service(storage.clone(), StubGenerator::succeeding());

    let plan = service.ensure_plan().await?;

    assert_eq!(plan, Some(NutritionPlan::fallback()));
    assert_eq!(storage.load_plan().await?, Some(NutritionPlan::fallback()));
    Ok(())
}

#[tokio::test]
async fn test_ensure_plan_waits_when_profile_has_no_plan() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_profile(&complete_profile()).await?;
    let service = personal_service(storage.clone(), StubGenerator::succeeding());

    assert_eq!(service.ensure_plan().await?, None);
    assert_eq!(storage.load_plan().await?, None);
    Ok(())
}

#[tokio::test]
async fn test_ensure_plan_returns_stored_plan() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_plan(&generated_plan()).await?;
    let service = personal_service(storage, StubGenerator::succeeding());

    assert_eq!(service.ensure_plan().await?, Some(generated_plan()));
    Ok(())
}

#[tokio::test]
async fn test_unreadable_records_count_as_absent() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage
        .backend()
        .set(storage_keys::NUTRITION_PLAN, "garbage")
        .await?;
    let service = personal_service(storage, StubGenerator::succeeding());

    assert_eq!(service.load_plan().await, None);
    assert_eq!(service.load_profile().await, None);
    Ok(())
}

#[tokio::test]
async fn test_generate_plan_without_profile_is_rejected() {
    let generator = StubGenerator::succeeding();
    let service = personal_service(AppStorage::in_memory(), generator.clone());

    let error = service.generate_plan().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("Profil belum lengkap"));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_generate_plan_with_incomplete_profile_is_rejected() -> Result<()> {
    let storage = AppStorage::in_memory();
    let mut profile = complete_profile();
    profile.goal = None;
    storage.save_profile(&profile).await?;
    let generator = StubGenerator::succeeding();
    let service = personal_service(storage, generator.clone());

    let error = service.generate_plan().await.unwrap_err();

    assert!(error.code.is_validation());
    assert_eq!(generator.calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_generate_plan_stores_generated_plan() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_profile(&complete_profile()).await?;
    let service = personal_service(storage.clone(), StubGenerator::succeeding());

    let outcome = service.generate_plan().await?;

    assert_eq!(outcome.source, PlanSource::Generated);
    assert_eq!(storage.load_plan().await?, Some(generated_plan()));
    Ok(())
}

#[tokio::test]
async fn test_generate_plan_falls_back_on_service_failure() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_profile(&complete_profile()).await?;
    storage.save_plan(&generated_plan()).await?;
    let generator = StubGenerator::failing(ErrorCode::ExternalServiceError);
    let service = personal_service(storage.clone(), generator.clone());

    let outcome = service.generate_plan().await?;

    assert!(outcome.is_fallback());
    assert_eq!(storage.load_plan().await?, Some(NutritionPlan::fallback()));
    assert_eq!(generator.calls(), 1);
    Ok(())
}

#[tokio::test]
async fn test_reset_clears_profile_plan_and_flags() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_profile(&complete_profile()).await?;
    storage.save_plan(&generated_plan()).await?;
    storage
        .set_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
        .await?;
    let service = personal_service(storage.clone(), StubGenerator::succeeding());

    service.reset_app().await?;

    assert_eq!(storage.load_profile().await?, None);
    assert_eq!(storage.load_plan().await?, None);
    assert!(!storage.flag(storage_keys::HAS_COMPLETED_ONBOARDING).await?);
    Ok(())
}

#[tokio::test]
async fn test_summary_derives_display_values() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_profile(&complete_profile()).await?;
    storage.save_plan(&NutritionPlan::fallback()).await?;
    let service = personal_service(storage, StubGenerator::succeeding());

    let summary = service.summary().await;

    assert_eq!(summary.bmi, "22.9");
    assert_eq!(summary.bmi_category, Some(BmiCategory::Normal));
    assert_eq!(summary.bmi_label, Some("Normal"));
    assert_eq!(summary.bmi_color, Some(colors::GREEN));
    assert_eq!(summary.sleep_duration, "8 jam 0 menit");
    assert_eq!(summary.status_label, Some("Menunggu Persetujuan"));
    assert_eq!(summary.status_color, Some(colors::AMBER));
    assert_eq!(summary.gender_label, Some("Perempuan"));
    assert_eq!(summary.activity_label, Some("Sedang"));
    assert_eq!(summary.activity_description, Some("Olahraga 3-5 kali/minggu"));
    assert_eq!(summary.goal_label, Some("Menjaga Berat Badan"));
    Ok(())
}

#[test]
fn test_summary_without_data_uses_placeholders() {
    let summary = PersonalSummary::build(None, None);

    assert_eq!(summary.bmi, "0.0");
    assert_eq!(summary.bmi_category, None);
    assert_eq!(summary.sleep_duration, "-");
    assert_eq!(summary.status_label, None);
}

#[test]
fn test_summary_unknown_status_and_missing_height() {
    let profile = UserProfile {
        height_cm: None,
        ..complete_profile()
    };
    let mut plan = NutritionPlan::fallback();
    plan.status = PlanStatus::from("ditinjau");

    let summary = PersonalSummary::build(Some(profile), Some(plan));

    assert_eq!(summary.bmi, "0.0");
    assert_eq!(summary.bmi_label, None);
    assert_eq!(summary.status_label, Some("Tidak Diketahui"));
    assert_eq!(summary.status_color, Some(colors::GRAY));
}
