// ABOUTME: Route module organization for the smoothie macros HTTP API
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Route modules for the smoothie macros API
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the nutrition core.

/// Static asset routes with compressed-variant preference
pub mod assets;

/// Health check and system status routes
pub mod health;

/// Macro calculation routes
pub mod macros;

/// Smoothie recipe catalog routes
pub mod smoothies;

pub use assets::AssetRoutes;
pub use health::HealthRoutes;
pub use macros::{CalculateMacrosRequest, CalculateMacrosResponse, MacroRoutes};
pub use smoothies::SmoothieRoutes;
