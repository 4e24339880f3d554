// ABOUTME: Static asset routes serving images and other files under /assets
// ABOUTME: Prefers a sibling _compressed.webp variant when one exists on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Static asset serving
//!
//! Assets are served from the configured directory via `tower-http`'s
//! `ServeDir`. For `.webp` requests, a pre-generated
//! `<stem>_compressed.webp` sibling takes precedence over the original when
//! present; generating those variants is an offline concern outside this
//! service.

use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    http::{Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tracing::debug;

const WEBP_EXT: &str = ".webp";
const COMPRESSED_WEBP_SUFFIX: &str = "_compressed.webp";

/// Static asset routes
pub struct AssetRoutes;

impl AssetRoutes {
    /// Create the asset routes rooted at the given directory
    #[must_use]
    pub fn routes(assets_dir: PathBuf) -> Router {
        Router::new()
            .route("/assets/*path", get(handle_asset))
            .with_state(Arc::new(assets_dir))
    }
}

/// Serve one asset, preferring the compressed webp variant when present
async fn handle_asset(
    State(dir): State<Arc<PathBuf>>,
    UrlPath(decoded): UrlPath<String>,
    uri: Uri,
) -> Response {
    let encoded = uri.path().strip_prefix("/assets").unwrap_or(uri.path());

    let serve_path = if has_compressed_variant(&dir, &decoded).await {
        debug!(asset = %decoded, "serving compressed webp variant");
        rewrite_to_compressed(encoded)
    } else {
        encoded.to_owned()
    };

    let request = match Request::builder().uri(serve_path).body(Body::empty()) {
        Ok(request) => request,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };

    match ServeDir::new(dir.as_path()).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(infallible) => match infallible {},
    }
}

/// Check whether a `<stem>_compressed.webp` sibling exists for this request
async fn has_compressed_variant(dir: &Path, decoded: &str) -> bool {
    if !decoded.ends_with(WEBP_EXT) || decoded.ends_with(COMPRESSED_WEBP_SUFFIX) {
        return false;
    }
    let Some(stem) = decoded.strip_suffix(WEBP_EXT) else {
        return false;
    };
    tokio::fs::try_exists(dir.join(format!("{stem}{COMPRESSED_WEBP_SUFFIX}")))
        .await
        .unwrap_or(false)
}

/// Rewrite an encoded request path to its compressed variant
fn rewrite_to_compressed(encoded: &str) -> String {
    encoded.strip_suffix(WEBP_EXT).map_or_else(
        || encoded.to_owned(),
        |stem| format!("{stem}{COMPRESSED_WEBP_SUFFIX}"),
    )
}
