// ABOUTME: HTTP API server binary for the smoothie macro nutrition service
// ABOUTME: Loads configuration and datasets, then serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! # Smoothie Macros API Server
//!
//! Starts the HTTP API with the nutrition table and recipe dataset loaded
//! once at startup. All request handling is read-only against that state.

use anyhow::Result;
use clap::Parser;
use smoothie_macros::{
    config::environment::ServerConfig,
    datasets::{NutritionTable, SmoothieDataset},
    logging, server,
    server::ServerResources,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "smoothie-macros-server")]
#[command(about = "Smoothie macro nutrition API - macro totals from free-text ingredients")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the nutrition table path
    #[arg(long)]
    ingredients: Option<PathBuf>,

    /// Override the recipe dataset path
    #[arg(long)]
    recipes: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment, then apply CLI overrides
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(ingredients) = args.ingredients {
        config.datasets.ingredients_path = ingredients;
    }
    if let Some(recipes) = args.recipes {
        config.datasets.recipes_path = recipes;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Smoothie Macros API");
    info!("{}", config.summary());

    let nutrition = NutritionTable::load(&config.datasets.ingredients_path)?;
    let smoothies = SmoothieDataset::load(&config.datasets.recipes_path)?;
    info!(
        ingredients = nutrition.len(),
        recipes = smoothies.len(),
        "datasets loaded"
    );

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(nutrition, smoothies, config));

    info!("Ready to serve smoothie macros!");
    server::run(resources, http_port).await?;

    Ok(())
}
