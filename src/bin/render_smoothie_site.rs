// ABOUTME: Batch static-site generator binary for the smoothie recipe catalog
// ABOUTME: Loads the datasets, renders every recipe card, and writes one HTML document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! # Smoothie Site Renderer
//!
//! One-shot batch process: reads the nutrition table and recipe dataset,
//! computes macros per recipe, and writes a self-contained HTML document.
//! A recipe that fails to parse is reported and skipped.

use anyhow::Result;
use clap::Parser;
use smoothie_macros::{
    datasets::{NutritionTable, SmoothieDataset},
    logging, render,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "render-smoothie-site")]
#[command(about = "Render the smoothie recipe catalog to a static HTML page")]
struct Args {
    /// Path to the nutrition table
    #[arg(long, default_value = "./data/ingredients.json")]
    ingredients: PathBuf,

    /// Path to the recipe dataset
    #[arg(long, default_value = "./data/recipes.json")]
    recipes: PathBuf,

    /// Output file for the rendered document
    #[arg(short, long, default_value = "index.html")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let nutrition = NutritionTable::load(&args.ingredients)?;
    let smoothies = SmoothieDataset::load(&args.recipes)?;
    info!(
        ingredients = nutrition.len(),
        recipes = smoothies.len(),
        "datasets loaded"
    );

    let html = render::render_site(&smoothies, &nutrition);
    render::write_site(&args.output, &html)?;

    info!(output = %args.output.display(), "site rendered");
    Ok(())
}
