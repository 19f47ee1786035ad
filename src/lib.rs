// ABOUTME: Main library entry point for the Eatitude nutrition coaching core
// ABOUTME: Onboarding flow, startup routing, plan generation and personal plan presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # Eatitude
//!
//! Core of the Eatitude nutrition app: a four-step onboarding wizard that
//! collects a user profile, a startup router driven by three persisted
//! flags, a gateway to the remote plan service and the derived values shown
//! on the personal plan view.
//!
//! ## Architecture
//!
//! - **Storage**: string key-value store with in-memory and JSON file backends
//! - **Gateway**: `PlanGenerator` trait, HTTP client, retry and default-plan fallback
//! - **Onboarding**: step state machine and the controller driving it
//! - **Router**: first-screen decision from `AppFlowState`
//! - **Personal**: plan loading, regeneration, reset and display values
//! - **Config**: environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use eatitude::config::EatitudeConfig;
//! use eatitude::gateway::{HttpPlanGenerator, RetryPolicy};
//! use eatitude::personal::PersonalPlanService;
//! use eatitude::router::StartupRouter;
//! use eatitude::storage::AppStorage;
//!
//! #[tokio::main]
//! async fn main() -> eatitude::errors::AppResult<()> {
//!     let config = EatitudeConfig::from_env()?;
//!     let storage = AppStorage::from_config(&config.storage);
//!     let generator = Arc::new(HttpPlanGenerator::new(&config.plan_service)?);
//!     let personal = PersonalPlanService::new(
//!         storage.clone(),
//!         generator,
//!         RetryPolicy::from(&config.plan_service),
//!     );
//!
//!     let router = StartupRouter::load(storage).await;
//!     println!("start at {}", router.route().as_str());
//!     println!("{:?}", personal.ensure_plan().await?);
//!     Ok(())
//! }
//! ```

/// Error types, storage keys, ranges and default plan values
pub use eatitude_core::{constants, errors, models};

/// Environment-only configuration
pub mod config;

/// Remote plan service gateway
pub mod gateway;

/// Structured logging setup
pub mod logging;

/// Onboarding wizard
pub mod onboarding;

/// Personal plan view service
pub mod personal;

/// Startup screen selection
pub mod router;

/// Key-value persistence
pub mod storage;
