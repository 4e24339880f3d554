// ABOUTME: Macro calculation route accepting raw ingredient strings and returning totals
// ABOUTME: Parses every entry against the reference table; one bad entry fails the request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Macro calculation routes
//!
//! `POST /calculate-macros` takes a list of raw ingredient strings and
//! returns the aggregated totals plus the per-ingredient detail. A
//! malformed or unknown entry fails the whole request with a structured
//! 400; there is no partial aggregation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::nutrition::{aggregate, parse_ingredients, Ingredient, MacroTotals};
use crate::server::ServerResources;

/// Request payload: raw ingredient strings
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateMacrosRequest {
    pub ingredients: Vec<String>,
}

/// Response payload: rounded totals plus per-ingredient detail
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateMacrosResponse {
    pub macros: MacroTotals,
    pub ingredients: Vec<Ingredient>,
}

/// Macro calculation routes
pub struct MacroRoutes;

impl MacroRoutes {
    /// Create all macro calculation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/calculate-macros", post(Self::handle_calculate_macros))
            .with_state(resources)
    }

    /// Handle macro calculation for a list of raw ingredient strings
    async fn handle_calculate_macros(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CalculateMacrosRequest>,
    ) -> Result<Response, AppError> {
        let ingredients = parse_ingredients(&request.ingredients, &resources.nutrition)?;
        let macros = aggregate(&ingredients).rounded();

        info!(
            entries = ingredients.len(),
            calories = macros.calories,
            "calculated macro totals"
        );

        Ok((
            StatusCode::OK,
            Json(CalculateMacrosResponse {
                macros,
                ingredients,
            }),
        )
            .into_response())
    }
}
