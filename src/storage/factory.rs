// ABOUTME: Storage facade selecting a backend from configuration
// ABOUTME: Typed JSON records and boolean flags layered over the raw key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use super::{FileStore, InMemoryStore, KeyValueStore};
use crate::config::{StorageBackend, StorageConfig};
use crate::constants::storage_keys;
use crate::errors::{AppError, AppResult};
use crate::models::{AppFlowState, NutritionPlan, UserProfile};

/// Unified storage interface shared by the controllers
#[derive(Clone)]
pub struct AppStorage {
    inner: Arc<dyn KeyValueStore>,
}

impl AppStorage {
    /// Wrap an existing backend
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// Ephemeral in-memory storage
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }

    /// Create storage based on configuration
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        let inner: Arc<dyn KeyValueStore> = match config.backend {
            StorageBackend::File => Arc::new(FileStore::new(&config.data_dir)),
            StorageBackend::Memory => Arc::new(InMemoryStore::new()),
        };
        info!(
            backend = inner.backend_name(),
            data_dir = %config.data_dir.display(),
            "Initializing storage"
        );
        Self { inner }
    }

    /// Underlying backend
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.inner
    }

    /// Read and deserialize a JSON record
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored text is not valid JSON for `T`
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.inner.get(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            AppError::serialization(format!("Stored record '{key}' is unreadable: {e}"))
                .with_source(e)
        })
    }

    /// Serialize and store a JSON record
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails
    pub async fn set_json<T: Serialize + Sync>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.inner.set(key, &raw).await
    }

    /// Stored profile, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or parsed
    pub async fn load_profile(&self) -> AppResult<Option<UserProfile>> {
        self.get_json(storage_keys::USER_PROFILE).await
    }

    /// Replace the stored profile
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written
    pub async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        self.set_json(storage_keys::USER_PROFILE, profile).await
    }

    /// Stored nutrition plan, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read or parsed
    pub async fn load_plan(&self) -> AppResult<Option<NutritionPlan>> {
        self.get_json(storage_keys::NUTRITION_PLAN).await
    }

    /// Replace the stored nutrition plan
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written
    pub async fn save_plan(&self, plan: &NutritionPlan) -> AppResult<()> {
        self.set_json(storage_keys::NUTRITION_PLAN, plan).await
    }

    /// Whether a flag key holds `"true"`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub async fn flag(&self, key: &str) -> AppResult<bool> {
        Ok(self.inner.get(key).await?.as_deref() == Some(storage_keys::FLAG_TRUE))
    }

    /// Set a flag key to `"true"`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub async fn set_flag(&self, key: &str) -> AppResult<()> {
        self.inner.set(key, storage_keys::FLAG_TRUE).await
    }

    /// Read the three app-flow flags, treating any read failure as unset
    pub async fn load_flow_state(&self) -> AppFlowState {
        AppFlowState {
            has_seen_welcome: self.flag_or_unset(storage_keys::HAS_SEEN_WELCOME).await,
            has_completed_onboarding: self
                .flag_or_unset(storage_keys::HAS_COMPLETED_ONBOARDING)
                .await,
            has_seen_personal: self.flag_or_unset(storage_keys::HAS_SEEN_PERSONAL).await,
        }
    }

    async fn flag_or_unset(&self, key: &str) -> bool {
        self.flag(key).await.unwrap_or_else(|e| {
            warn!(key, error = %e, "Failed to read app-flow flag, treating as unset");
            false
        })
    }

    /// Delete every stored key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be cleared
    pub async fn clear(&self) -> AppResult<()> {
        self.inner.clear().await?;
        info!(backend = self.inner.backend_name(), "All app data cleared");
        Ok(())
    }
}
