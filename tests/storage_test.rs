// ABOUTME: Integration tests for the key-value storage backends and the AppStorage facade
// ABOUTME: Exercises in-memory and JSON file stores, typed records, flags and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use common::{complete_profile, generated_plan, FailingStore};
use eatitude::config::{StorageBackend, StorageConfig};
use eatitude::constants::storage_keys;
use eatitude::errors::ErrorCode;
use eatitude::models::{AppFlowState, HealthGoal};
use eatitude::storage::{AppStorage, FileStore, InMemoryStore, KeyValueStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_memory_store_set_get_remove() -> Result<()> {
    let store = InMemoryStore::new();
    assert!(store.is_empty().await);
    assert_eq!(store.get("missing").await?, None);

    store.set("hasSeenWelcome", "true").await?;
    store.set("hasSeenWelcome", "true").await?;
    assert_eq!(store.len().await, 1);
    assert_eq!(store.get("hasSeenWelcome").await?.as_deref(), Some("true"));

    store.remove("hasSeenWelcome").await?;
    store.remove("hasSeenWelcome").await?;
    assert_eq!(store.get("hasSeenWelcome").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_memory_store_clones_share_entries() -> Result<()> {
    let store = InMemoryStore::new();
    let clone = store.clone();

    clone.set("userProfile", "{}").await?;

    assert_eq!(store.get("userProfile").await?.as_deref(), Some("{}"));
    Ok(())
}

#[tokio::test]
async fn test_file_store_persists_across_instances() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());
    store.set("a", "1").await?;
    store.set("b", "2").await?;

    let reopened = FileStore::new(dir.path());

    assert_eq!(reopened.get("a").await?.as_deref(), Some("1"));
    assert_eq!(reopened.get("b").await?.as_deref(), Some("2"));
    assert!(reopened.path().exists());
    Ok(())
}

#[tokio::test]
async fn test_file_store_missing_file_reads_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path().join("nested").join("eatitude"));

    assert_eq!(store.get("userProfile").await?, None);
    store.remove("userProfile").await?;
    store.clear().await?;

    store.set("userProfile", "{}").await?;
    assert_eq!(store.get("userProfile").await?.as_deref(), Some("{}"));
    Ok(())
}

#[tokio::test]
async fn test_file_store_clear_removes_document() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());
    store.set("hasSeenWelcome", "true").await?;

    store.clear().await?;

    assert!(!store.path().exists());
    assert_eq!(store.get("hasSeenWelcome").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_file_store_corrupt_document_is_serialization_error() -> Result<()> {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path());
    std::fs::write(store.path(), "not json")?;

    let error = store.get("userProfile").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
    Ok(())
}

#[tokio::test]
async fn test_app_storage_round_trips_profile_and_plan_on_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let config = StorageConfig {
        backend: StorageBackend::File,
        data_dir: dir.path().to_path_buf(),
    };
    let storage = AppStorage::from_config(&config);
    assert_eq!(storage.backend().backend_name(), "file");

    storage.save_profile(&complete_profile()).await?;
    storage.save_plan(&generated_plan()).await?;

    let reopened = AppStorage::from_config(&config);
    assert_eq!(reopened.load_profile().await?, Some(complete_profile()));
    assert_eq!(reopened.load_plan().await?, Some(generated_plan()));
    Ok(())
}

#[tokio::test]
async fn test_app_storage_unreadable_record_is_error() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage
        .backend()
        .set(storage_keys::USER_PROFILE, "{\"name\":")
        .await?;

    let error = storage.load_profile().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
    Ok(())
}

#[tokio::test]
async fn test_profile_record_without_times_uses_defaults() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage
        .backend()
        .set(
            storage_keys::USER_PROFILE,
            r#"{"name":"Ana","age":30,"gender":"female","weight_kg":70,"height_cm":175,"activity_level":"moderate","goal":"lose_weight"}"#,
        )
        .await?;

    let profile = storage.load_profile().await?.unwrap();

    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.goal, Some(HealthGoal::LoseWeight));
    assert_eq!(profile.wake_time, "06:00");
    assert_eq!(profile.sleep_time, "22:00");
    assert!(profile.allergies.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_flags_only_accept_true() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage
        .backend()
        .set(storage_keys::HAS_SEEN_WELCOME, "yes")
        .await?;
    assert!(!storage.flag(storage_keys::HAS_SEEN_WELCOME).await?);

    storage.set_flag(storage_keys::HAS_SEEN_WELCOME).await?;
    assert!(storage.flag(storage_keys::HAS_SEEN_WELCOME).await?);
    assert_eq!(
        storage
            .backend()
            .get(storage_keys::HAS_SEEN_WELCOME)
            .await?
            .as_deref(),
        Some(storage_keys::FLAG_TRUE)
    );
    Ok(())
}

#[tokio::test]
async fn test_flow_state_reflects_stored_flags() -> Result<()> {
    let storage = AppStorage::in_memory();
    assert_eq!(storage.load_flow_state().await, AppFlowState::first_launch());

    storage.set_flag(storage_keys::HAS_SEEN_WELCOME).await?;
    storage
        .set_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
        .await?;

    let state = storage.load_flow_state().await;
    assert!(state.has_seen_welcome);
    assert!(state.has_completed_onboarding);
    assert!(!state.has_seen_personal);
    Ok(())
}

#[tokio::test]
async fn test_clear_removes_every_key() -> Result<()> {
    let storage = AppStorage::in_memory();
    storage.save_profile(&complete_profile()).await?;
    storage.save_plan(&generated_plan()).await?;
    storage.set_flag(storage_keys::HAS_SEEN_PERSONAL).await?;

    storage.clear().await?;

    assert_eq!(storage.load_profile().await?, None);
    assert_eq!(storage.load_plan().await?, None);
    assert_eq!(storage.load_flow_state().await, AppFlowState::first_launch());
    Ok(())
}

#[tokio::test]
async fn test_write_failure_surfaces_storage_error() {
    let storage = AppStorage::new(Arc::new(FailingStore::failing_all()));

    let error = storage.set_flag(storage_keys::HAS_SEEN_WELCOME).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
}
