// ABOUTME: Startup router choosing the first screen from the app-flow flags
// ABOUTME: Reads the flags once into an AppFlowState and records welcome and personal acknowledgements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use serde::Serialize;
use tracing::info;

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::AppFlowState;
use crate::storage::AppStorage;

/// First screen shown at launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupRoute {
    /// Regular tabbed app
    MainTabs,
    /// Personal tab showing the freshly generated plan
    PersonalTab,
    /// Onboarding wizard
    Onboarding,
    /// Welcome screen
    Welcome,
}

impl StartupRoute {
    /// Decision table over the three flags
    #[must_use]
    pub const fn for_state(state: AppFlowState) -> Self {
        match (
            state.has_completed_onboarding,
            state.has_seen_personal,
            state.has_seen_welcome,
        ) {
            (true, true, _) => Self::MainTabs,
            (true, false, _) => Self::PersonalTab,
            (false, _, true) => Self::Onboarding,
            (false, _, false) => Self::Welcome,
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainTabs => "main_tabs",
            Self::PersonalTab => "personal_tab",
            Self::Onboarding => "onboarding",
            Self::Welcome => "welcome",
        }
    }
}

/// Root controller holding the flags read at launch
#[derive(Clone)]
pub struct StartupRouter {
    storage: AppStorage,
    state: AppFlowState,
}

impl StartupRouter {
    /// Read the flags once; failed reads count as unset
    pub async fn load(storage: AppStorage) -> Self {
        let state = storage.load_flow_state().await;
        info!(?state, route = StartupRoute::for_state(state).as_str(), "App-flow state loaded");
        Self { storage, state }
    }

    /// Flags as read at launch plus acknowledgements since
    #[must_use]
    pub const fn state(&self) -> AppFlowState {
        self.state
    }

    /// Screen to show for the current state
    #[must_use]
    pub const fn route(&self) -> StartupRoute {
        StartupRoute::for_state(self.state)
    }

    /// Welcome screen "start" action
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be stored
    pub async fn acknowledge_welcome(&mut self) -> AppResult<StartupRoute> {
        self.storage.set_flag(storage_keys::HAS_SEEN_WELCOME).await?;
        self.state.has_seen_welcome = true;
        Ok(self.route())
    }

    /// Personal tab "continue to app" action
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be stored
    pub async fn acknowledge_personal(&mut self) -> AppResult<StartupRoute> {
        self.storage.set_flag(storage_keys::HAS_SEEN_PERSONAL).await?;
        self.state.has_seen_personal = true;
        Ok(self.route())
    }

    /// Record a finished onboarding without re-reading storage
    pub fn mark_onboarding_completed(&mut self) {
        self.state = self.state.with_onboarding_completed();
    }
}
