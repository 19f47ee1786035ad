// ABOUTME: Integration tests for the startup router
// ABOUTME: Checks the first-screen decision table and the welcome and personal acknowledgements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use anyhow::Result;
use common::FailingStore;
use eatitude::constants::storage_keys;
use eatitude::errors::ErrorCode;
use eatitude::models::AppFlowState;
use eatitude::router::{StartupRoute, StartupRouter};
use eatitude::storage::AppStorage;

fn state(welcome: bool, completed: bool, personal: bool) -> AppFlowState {
    AppFlowState {
        has_seen_welcome: welcome,
        has_completed_onboarding: completed,
        has_seen_personal: personal,
    }
}

#[test]
fn test_route_decision_table() {
    let cases = [
        (state(false, false, false), StartupRoute::Welcome),
        (state(true, false, false), StartupRoute::Onboarding),
        (state(true, true, false), StartupRoute::PersonalTab),
        (state(true, true, true), StartupRoute::MainTabs),
        (state(false, true, false), StartupRoute::PersonalTab),
        (state(false, true, true), StartupRoute::MainTabs),
        (state(true, false, true), StartupRoute::Onboarding),
        (state(false, false, true), StartupRoute::Welcome),
    ];

    for (flags, expected) in cases {
        assert_eq!(StartupRoute::for_state(flags), expected, "flags: {flags:?}");
    }
}

#[test]
fn test_route_serializes_as_snake_case() {
    let json = serde_json::to_string(&StartupRoute::PersonalTab).unwrap();
    assert_eq!(json, "\"personal_tab\"");
    assert_eq!(StartupRoute::MainTabs.as_str(), "main_tabs");
}

#[tokio::test]
async fn test_fresh_install_walks_welcome_to_main_tabs() -> Result<()> {
    let storage = AppStorage::in_memory();
    let mut router = StartupRouter::load(storage.clone()).await;
    assert_eq!(router.route(), StartupRoute::Welcome);

    assert_eq!(router.acknowledge_welcome().await?, StartupRoute::Onboarding);
    assert!(storage.flag(storage_keys::HAS_SEEN_WELCOME).await?);

    storage
        .set_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
        .await?;
    router.mark_onboarding_completed();
    assert_eq!(router.route(), StartupRoute::PersonalTab);

    assert_eq!(router.acknowledge_personal().await?, StartupRoute::MainTabs);

    let relaunched = StartupRouter::load(storage).await;
    assert_eq!(relaunched.route(), StartupRoute::MainTabs);
    assert_eq!(relaunched.state(), state(true, true, true));
    Ok(())
}

#[tokio::test]
async fn test_router_reads_flags_once() -> Result<()> {
    let storage = AppStorage::in_memory();
    let router = StartupRouter::load(storage.clone()).await;

    storage.set_flag(storage_keys::HAS_SEEN_WELCOME).await?;

    assert_eq!(router.route(), StartupRoute::Welcome);
    Ok(())
}

#[tokio::test]
async fn test_acknowledge_failure_leaves_state_unchanged() {
    let storage = AppStorage::new(Arc::new(FailingStore::failing_all()));
    let mut router = StartupRouter::load(storage).await;

    let error = router.acknowledge_welcome().await.unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(router.route(), StartupRoute::Welcome);
}
