// ABOUTME: Smoothie catalog route returning the static recipe dataset as JSON
// ABOUTME: Read-only view over the dataset loaded at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Smoothie recipe catalog routes

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::Smoothie;
use crate::server::ServerResources;

/// Smoothie catalog routes
pub struct SmoothieRoutes;

impl SmoothieRoutes {
    /// Create all smoothie catalog routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/smoothies", get(Self::handle_list_smoothies))
            .with_state(resources)
    }

    /// Return the full recipe list
    async fn handle_list_smoothies(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<Vec<Smoothie>> {
        Json(resources.smoothies.smoothies().to_vec())
    }
}
