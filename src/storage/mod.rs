// ABOUTME: Persistence gateway over a string key-value store with pluggable backends
// ABOUTME: Typed helpers for the stored profile, nutrition plan and app-flow flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

/// Backend selection from configuration
pub mod factory;
/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use factory::AppStorage;
pub use file::FileStore;
pub use memory::InMemoryStore;

use crate::errors::AppResult;

/// String key-value store holding serialized records
///
/// Implementations must be safe to share behind `Arc` and treat a missing key
/// as `Ok(None)`, never as an error.
///
/// # Examples
///
/// ```rust,no_run
/// use eatitude::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> Result<(), eatitude::errors::AppError> {
/// let store = InMemoryStore::new();
/// store.set("hasSeenWelcome", "true").await?;
/// assert_eq!(store.get("hasSeenWelcome").await?.as_deref(), Some("true"));
/// store.clear().await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key` if present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Delete every key
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn clear(&self) -> AppResult<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}
