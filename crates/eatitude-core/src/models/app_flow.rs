// ABOUTME: App-flow flags value object read once at startup
// ABOUTME: Replaces scattered key lookups with a single AppFlowState passed to the root controller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use serde::{Deserialize, Serialize};

/// Where the user is in the first-run flow
///
/// The three flags are independent; the startup router decides which screen
/// they map to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppFlowState {
    /// Welcome screen acknowledged
    pub has_seen_welcome: bool,
    /// Onboarding wizard finished
    pub has_completed_onboarding: bool,
    /// Personal tab acknowledged after onboarding
    pub has_seen_personal: bool,
}

impl AppFlowState {
    /// State of a fresh install
    #[must_use]
    pub const fn first_launch() -> Self {
        Self {
            has_seen_welcome: false,
            has_completed_onboarding: false,
            has_seen_personal: false,
        }
    }

    /// Copy of this state with onboarding marked complete
    ///
    /// Completing onboarding implies the welcome screen was seen.
    #[must_use]
    pub const fn with_onboarding_completed(self) -> Self {
        Self {
            has_seen_welcome: true,
            has_completed_onboarding: true,
            has_seen_personal: self.has_seen_personal,
        }
    }
}
