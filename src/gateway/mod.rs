// ABOUTME: Plan generation gateway producing a nutrition plan from a user profile
// ABOUTME: PlanGenerator trait, fixed-delay retry policy and fallback to the default plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! # Plan Generation Gateway
//!
//! [`PlanGenerator`] is the seam between the flow controllers and the remote
//! plan service. [`generate_with_fallback`] wraps any generator with the retry
//! policy and guarantees a plan: failures degrade to
//! [`NutritionPlan::fallback`] and are reported through [`PlanSource`].

/// HTTP client for the remote plan service
pub mod http;
/// Remote request/response format
pub mod wire;

pub use http::HttpPlanGenerator;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::PlanServiceConfig;
use crate::errors::AppResult;
use crate::models::{NutritionPlan, UserProfile};

/// Produces a nutrition plan for a profile
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generator name for logs
    fn name(&self) -> &'static str;

    /// Request a plan for `profile`
    ///
    /// # Errors
    ///
    /// Returns a validation error for incomplete profiles, and an external
    /// service or serialization error when the service fails
    async fn generate(&self, profile: &UserProfile) -> AppResult<NutritionPlan>;

    /// Whether the backing service is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be contacted at all
    async fn health_check(&self) -> AppResult<bool>;
}

/// Fixed-delay retry policy for plan generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure
    pub max_retries: u32,
    /// Delay before each extra attempt
    pub delay: Duration,
}

impl RetryPolicy {
    /// Single attempt, no waiting
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }

    /// Total number of attempts including the first
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

impl From<&PlanServiceConfig> for RetryPolicy {
    fn from(config: &PlanServiceConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.retry_delay,
        }
    }
}

/// Where a plan came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    /// Produced by the generator
    Generated,
    /// Default plan substituted after a failure
    Fallback {
        /// Last error message
        reason: String,
    },
}

/// Result of a generation that never fails
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOutcome {
    /// The plan to persist and display
    pub plan: NutritionPlan,
    /// Whether the plan is the fallback
    pub source: PlanSource,
}

impl PlanOutcome {
    /// Whether the default plan was substituted
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, PlanSource::Fallback { .. })
    }
}

/// Call the generator, retrying with a fixed delay
///
/// Only transient service failures are retried; validation and malformed
/// responses are returned immediately.
///
/// # Errors
///
/// Returns the last error once all attempts have failed
pub async fn generate_with_retry(
    generator: &dyn PlanGenerator,
    profile: &UserProfile,
    policy: RetryPolicy,
) -> AppResult<NutritionPlan> {
    let attempts = policy.attempts();
    let mut attempt = 1;
    loop {
        info!(
            generator = generator.name(),
            attempt, attempts, "Requesting nutrition plan"
        );
        match generator.generate(profile).await {
            Ok(plan) => {
                info!(generator = generator.name(), attempt, "Nutrition plan generated");
                return Ok(plan);
            }
            Err(e) if e.code.is_validation() => {
                warn!(error = %e, "Plan request rejected by validation, not retrying");
                return Err(e);
            }
            Err(e) if !e.code.is_retryable() => {
                warn!(error = %e, code = ?e.code, "Plan generation failed permanently, not retrying");
                return Err(e);
            }
            Err(e) if attempt >= attempts => {
                warn!(error = %e, attempts, "All plan generation attempts failed");
                return Err(e);
            }
            Err(e) => {
                warn!(
                    error = %e,
                    attempt,
                    attempts,
                    delay_ms = policy.delay.as_millis(),
                    "Plan generation attempt failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

/// Generate a plan, substituting the default plan on any failure
pub async fn generate_with_fallback(
    generator: &dyn PlanGenerator,
    profile: &UserProfile,
    policy: RetryPolicy,
) -> PlanOutcome {
    match generate_with_retry(generator, profile, policy).await {
        Ok(plan) => PlanOutcome {
            plan,
            source: PlanSource::Generated,
        },
        Err(e) => {
            warn!(error = %e, "Using default nutrition plan");
            PlanOutcome {
                plan: NutritionPlan::fallback(),
                source: PlanSource::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}
