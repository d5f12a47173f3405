//! Router construction and the HTTP server loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, instrument};

use crate::documents_api;
use crate::state::AppState;
use crate::upload_api;

/// Build the Axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/documents/upload", post(upload_api::upload_document))
        .route("/api/documents", get(documents_api::list_documents))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process ends.
#[instrument(skip(state))]
pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    state.uploads.ensure_dir().await?;

    let app = build_router(state);

    info!("docsense HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "docsense",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
