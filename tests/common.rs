// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides sample profiles, stub plan generators and a storage backend that fails on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `eatitude`

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use eatitude::errors::{AppError, AppResult, ErrorCode};
use eatitude::gateway::{PlanGenerator, RetryPolicy};
use eatitude::models::{
    ActivityLevel, Gender, HealthGoal, NutritionPlan, PlanStatus, UserProfile,
};
use eatitude::personal::PersonalPlanService;
use eatitude::storage::{AppStorage, InMemoryStore, KeyValueStore};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Profile that passes every onboarding step
pub fn complete_profile() -> UserProfile {
    UserProfile {
        name: "Ana".to_owned(),
        age: Some(30),
        gender: Some(Gender::Female),
        weight_kg: Some(70.0),
        height_cm: Some(175.0),
        activity_level: Some(ActivityLevel::Moderate),
        activity_notes: "Jogging tiga kali seminggu".to_owned(),
        wake_time: "06:00".to_owned(),
        sleep_time: "22:00".to_owned(),
        food_preferences: "Sayur".to_owned(),
        allergies: String::new(),
        health_conditions: String::new(),
        goal: Some(HealthGoal::MaintainWeight),
    }
}

/// Plan distinguishable from the default plan
pub fn generated_plan() -> NutritionPlan {
    let mut plan = NutritionPlan::fallback();
    plan.calories = 1850.0;
    plan.status = PlanStatus::Approved;
    plan.generated_by = "Test generator".to_owned();
    plan
}

/// What a `StubGenerator` answers
#[derive(Debug, Clone)]
pub enum StubResponse {
    /// Return this plan
    Plan(NutritionPlan),
    /// Fail with this code
    Fail(ErrorCode),
}

/// Plan generator that answers from a fixed response and counts calls
pub struct StubGenerator {
    response: StubResponse,
    delay: Duration,
    calls: AtomicU32,
}

impl StubGenerator {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::Plan(generated_plan()),
            delay: Duration::ZERO,
            calls: AtomicU32::new(0),
        })
    }

    /// Succeeds only after sleeping for `delay`
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::Plan(generated_plan()),
            delay,
            calls: AtomicU32::new(0),
        })
    }

    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::Fail(code),
            delay: Duration::ZERO,
            calls: AtomicU32::new(0),
        })
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, _profile: &UserProfile) -> AppResult<NutritionPlan> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.response {
            StubResponse::Plan(plan) => Ok(plan.clone()),
            StubResponse::Fail(code) => Err(AppError::new(*code, "stubbed failure")),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(matches!(self.response, StubResponse::Plan(_)))
    }
}

/// Retry policy that never sleeps
pub fn fast_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        delay: Duration::ZERO,
    }
}

/// Personal service over the given storage and generator
pub fn personal_service(storage: AppStorage, generator: Arc<dyn PlanGenerator>) -> PersonalPlanService {
    PersonalPlanService::new(storage, generator, fast_retry(0))
}

/// In-memory store whose writes fail for one key, or for every key
pub struct FailingStore {
    inner: InMemoryStore,
    fail_key: Option<&'static str>,
}

impl FailingStore {
    /// Fail writes of `key` only
    pub fn failing_key(key: &'static str) -> Self {
        Self {
            inner: InMemoryStore::new(),
            fail_key: Some(key),
        }
    }

    /// Fail every write
    pub fn failing_all() -> Self {
        Self {
            inner: InMemoryStore::new(),
            fail_key: None,
        }
    }

    fn should_fail(&self, key: &str) -> bool {
        self.fail_key.is_none() || self.fail_key == Some(key)
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.should_fail(key) {
            return Err(AppError::storage(format!("disk full writing '{key}'")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    async fn clear(&self) -> AppResult<()> {
        self.inner.clear().await
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
