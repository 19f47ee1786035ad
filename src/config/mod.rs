// ABOUTME: Configuration management module for the Eatitude core
// ABOUTME: Environment-only configuration of the plan service client and storage backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

/// Environment variable parsing
pub mod environment;

pub use environment::{
    EatitudeConfig, Environment, PlanServiceConfig, StorageBackend, StorageConfig,
};
