// ABOUTME: Router assembly, shared read-only server state, and server lifecycle
// ABOUTME: Wires route modules together with tracing and CORS layers and runs axum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Server state and lifecycle
//!
//! All shared state is read-only after startup: the nutrition table and the
//! recipe dataset are loaded once and shared behind an `Arc`. Requests are
//! handled independently with no cross-request coordination.

use axum::Router;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::datasets::{NutritionTable, SmoothieDataset};
use crate::errors::{AppError, AppResult};
use crate::routes::{AssetRoutes, HealthRoutes, MacroRoutes, SmoothieRoutes};

/// Read-only resources shared by every request handler
#[derive(Debug)]
pub struct ServerResources {
    /// Static nutrition reference table
    pub nutrition: NutritionTable,
    /// Static smoothie recipe dataset
    pub smoothies: SmoothieDataset,
    /// Server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the loaded datasets and configuration
    #[must_use]
    pub const fn new(
        nutrition: NutritionTable,
        smoothies: SmoothieDataset,
        config: ServerConfig,
    ) -> Self {
        Self {
            nutrition,
            smoothies,
            config,
        }
    }
}

/// Assemble the application router with all routes and middleware
///
/// # Errors
///
/// Returns a configuration error if the CORS origin is not a valid header
/// value.
pub fn router(resources: Arc<ServerResources>) -> AppResult<Router> {
    let origin: HeaderValue = resources
        .config
        .cors_origin
        .parse()
        .map_err(|_| AppError::config(format!("invalid CORS origin: {}", resources.config.cors_origin)))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let app = Router::new()
        .merge(HealthRoutes::routes())
        .merge(MacroRoutes::routes(resources.clone()))
        .merge(SmoothieRoutes::routes(resources.clone()))
        .merge(AssetRoutes::routes(resources.config.assets_dir.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// Run the HTTP server until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the router cannot be assembled, the port cannot be
/// bound, or the server fails while serving.
pub async fn run(resources: Arc<ServerResources>, port: u16) -> AppResult<()> {
    let app = router(resources)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => error!("failed to listen for shutdown signal: {e}"),
    }
}
