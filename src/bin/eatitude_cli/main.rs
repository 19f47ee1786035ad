// ABOUTME: Eatitude CLI - drives the onboarding, routing and personal plan flows from a terminal
// ABOUTME: Loads configuration from the environment and prints JSON results on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude
//!
//! Usage:
//! ```bash
//! # Show the startup route and derived personal values
//! eatitude-cli status
//!
//! # Leave the welcome screen
//! eatitude-cli welcome
//!
//! # Run the onboarding wizard with a complete profile
//! eatitude-cli onboard --profile '{"name":"Ana","age":30,"gender":"female",...}'
//!
//! # Show the stored plan, storing the default one for first-time users
//! eatitude-cli plan
//!
//! # Regenerate the plan for the stored profile
//! eatitude-cli generate
//!
//! # Leave the personal tab for the main app
//! eatitude-cli continue
//!
//! # Delete all stored data
//! eatitude-cli reset
//! ```

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eatitude::config::{EatitudeConfig, StorageBackend};
use eatitude::gateway::{HttpPlanGenerator, RetryPolicy};
use eatitude::logging::LoggingConfig;
use eatitude::personal::PersonalPlanService;
use eatitude::storage::AppStorage;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "eatitude-cli",
    about = "Eatitude nutrition coaching CLI",
    long_about = "Command-line shell over the Eatitude onboarding flow, startup router and personal nutrition plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Plan service URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Keep everything in memory for this invocation
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the startup route, app-flow flags and personal summary
    Status,

    /// Mark the welcome screen as seen
    Welcome,

    /// Run the onboarding wizard with a full profile and generate the first plan
    Onboard {
        /// Profile as JSON
        #[arg(long)]
        profile: String,
    },

    /// Show the plan for the personal view
    Plan,

    /// Regenerate the plan for the stored profile
    Generate,

    /// Mark the personal tab as seen
    Continue,

    /// Delete the profile, plan and app-flow flags
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let mut config = EatitudeConfig::from_env().context("Invalid configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(api_url) = cli.api_url {
        config.plan_service.base_url = api_url.trim_end_matches('/').to_owned();
    }
    if cli.ephemeral {
        config.storage.backend = StorageBackend::Memory;
    }

    info!(environment = %config.environment, "Eatitude CLI");

    let storage = AppStorage::from_config(&config.storage);
    let generator = Arc::new(
        HttpPlanGenerator::new(&config.plan_service).context("Failed to build plan service client")?,
    );
    let personal = PersonalPlanService::new(
        storage.clone(),
        generator,
        RetryPolicy::from(&config.plan_service),
    );

    let output = match cli.command {
        Command::Status => commands::status(storage, &personal).await,
        Command::Welcome => commands::welcome(storage).await?,
        Command::Onboard { profile } => commands::onboard(personal, &profile).await?,
        Command::Plan => commands::plan(&personal).await?,
        Command::Generate => commands::generate(&personal).await?,
        Command::Continue => commands::acknowledge_personal(storage).await?,
        Command::Reset => commands::reset(&personal).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
