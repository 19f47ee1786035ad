// ABOUTME: Onboarding wizard that collects the user profile before the first plan
// ABOUTME: Step state machine plus the controller that validates, persists and triggers generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

/// Wizard controller
pub mod controller;
/// Step state machine
pub mod step;

pub use controller::{CompletionOutcome, CompletionStatus, OnboardingController, StepOutcome};
pub use step::OnboardingStep;
