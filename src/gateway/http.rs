// ABOUTME: reqwest client for the remote plan service
// ABOUTME: Posts the mapped profile to /generate_personal_plan and maps error responses to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, instrument, warn};

use super::wire::{PlanRequest, RemotePlan};
use super::PlanGenerator;
use crate::config::PlanServiceConfig;
use crate::constants::api;
use crate::errors::{AppError, AppResult};
use crate::models::{NutritionPlan, UserProfile};

/// FastAPI-style error body
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: serde_json::Value,
}

/// Plan generator backed by the HTTP plan service
#[derive(Debug, Clone)]
pub struct HttpPlanGenerator {
    client: Client,
    base_url: String,
}

impl HttpPlanGenerator {
    /// Create a generator with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: &PlanServiceConfig) -> AppResult<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Map a non-2xx response to an error
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<ErrorResponse>(body).map_or_else(
            |_| body.chars().take(200).collect::<String>(),
            |response| match response.detail {
                serde_json::Value::String(message) => message,
                other => other.to_string(),
            },
        );

        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::invalid_input(format!("Plan request rejected ({status}): {detail}"))
            }
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                AppError::external_unavailable(api::SERVICE_NAME, format!("{status}: {detail}"))
            }
            _ => AppError::external_service(api::SERVICE_NAME, format!("API error ({status}): {detail}")),
        }
    }
}

#[async_trait]
impl PlanGenerator for HttpPlanGenerator {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self, profile), fields(url = %self.base_url))]
    async fn generate(&self, profile: &UserProfile) -> AppResult<NutritionPlan> {
        let request = PlanRequest::from_profile(profile)?;
        debug!(
            activity = %request.tingkat_aktivitas,
            goal = %request.tujuan,
            "Sending plan generation request"
        );

        let response = self
            .client
            .post(self.api_url(api::GENERATE_PERSONAL_PLAN))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to plan service: {e}");
                AppError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read plan service response: {e}");
            AppError::external_service(api::SERVICE_NAME, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &body));
        }

        let plan = RemotePlan::parse(&body)?.into_plan();
        debug!(calories = plan.calories, "Plan service response mapped");
        Ok(plan)
    }

    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn health_check(&self) -> AppResult<bool> {
        let response = self
            .client
            .get(self.api_url(api::HEALTH))
            .send()
            .await
            .map_err(|e| {
                error!("Plan service health check failed: {e}");
                AppError::from(e)
            })?;

        let healthy = response.status().is_success();
        if healthy {
            debug!("Plan service health check passed");
        } else {
            warn!(
                "Plan service health check failed with status: {}",
                response.status()
            );
        }
        Ok(healthy)
    }
}
