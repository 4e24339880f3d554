// ABOUTME: Main library entry point for the smoothie macro nutrition service
// ABOUTME: Provides ingredient parsing, macro aggregation, an HTTP API, and a static site renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

#![deny(unsafe_code)]

//! # Smoothie Macros
//!
//! Computes nutritional macro totals (calories, protein, fat, carbohydrates)
//! for smoothie recipes from free-text ingredient strings such as
//! `"1/2 cup spinach"` or `"2 tbsp almond butter"`, and presents the results
//! either through an HTTP API or as a static HTML page of recipe cards.
//!
//! ## Features
//!
//! - **Ingredient parsing**: amount (integer, decimal, or `a/b` fraction),
//!   optional unit (`tsp`, `tbsp`, `cup`, `whole`, or a bare count), and a
//!   name resolved against a static nutrition reference table
//! - **Macro aggregation**: recipe-level totals plus mass-share and
//!   calorie-weighted percentages for presentation
//! - **HTTP API**: `POST /calculate-macros` and `GET /smoothies` with
//!   structured JSON errors, CORS, and static asset serving
//! - **Static renderer**: one-shot batch generation of a self-contained
//!   HTML document with a card and macro bar per recipe
//!
//! ## Quick Start
//!
//! 1. Start the API with `smoothie-macros-server`
//! 2. Or render the static site with `render-smoothie-site`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smoothie_macros::config::environment::ServerConfig;
//! use smoothie_macros::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Smoothie macros server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by binary crates (src/bin/) and integration tests
// (tests/). They must remain `pub` so external consumers can access them.

/// Configuration management from environment variables
pub mod config;

/// Static dataset loading for nutrition facts and smoothie recipes
pub mod datasets;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Common data models for smoothies and nutrition reference entries
pub mod models;

/// Ingredient parsing, unit conversion, and macro aggregation
pub mod nutrition;

/// Static HTML site generation for the recipe catalog
pub mod render;

/// `HTTP` routes for macro calculation, recipes, health, and assets
pub mod routes;

/// Router assembly, shared server state, and server lifecycle
pub mod server;
