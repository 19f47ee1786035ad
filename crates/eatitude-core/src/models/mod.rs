// ABOUTME: Core data models for the Eatitude onboarding and nutrition plan flow
// ABOUTME: Re-exports UserProfile, NutritionPlan, AppFlowState and their component types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

//! # Data Models
//!
//! This module contains the records persisted by the Eatitude core:
//!
//! - `UserProfile`: personal, body, activity and goal attributes collected during onboarding
//! - `ProfileUpdate`: partial profile merged into the onboarding accumulator
//! - `NutritionPlan`: daily energy, macro, micro, limit and hydration targets
//! - `AppFlowState`: the three app-flow flags read at startup

// Domain modules
mod app_flow;
mod nutrition_plan;
mod profile;

// Re-export all public types for convenience
pub use app_flow::AppFlowState;
pub use nutrition_plan::{
    ConsumptionLimits, Hydration, Macronutrients, Minerals, NutritionPlan, PlanStatus, Vitamins,
};
pub use profile::{ActivityLevel, Gender, HealthGoal, ProfileUpdate, UserProfile};
