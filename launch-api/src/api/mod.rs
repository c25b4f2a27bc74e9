//! HTTP API for token launches

mod handlers;
mod responses;
mod routes;

pub use handlers::upload;
pub use routes::*;

use crate::config::ApiConfig;
use crate::pipeline::UploadPipeline;
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Shared API state
#[derive(Clone)]
pub struct ApiState {
    pub pipeline: UploadPipeline,
}

impl ApiState {
    pub fn new(pipeline: UploadPipeline) -> Self {
        Self { pipeline }
    }
}

/// Start the API server
pub async fn start_server(
    state: ApiState,
    config: &ApiConfig,
) -> Result<tokio::task::JoinHandle<()>> {
    let app = create_app(state, config);

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("API server listening on {}", config.bind_address);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok(handle)
}

/// Router with the layers configured for deployment
pub fn create_app(state: ApiState, config: &ApiConfig) -> Router {
    let app = create_router(state)
        .layer(DefaultBodyLimit::max(config.max_request_size_mb * 1024 * 1024))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    if config.enable_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Bare router, used directly by tests
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .merge(create_upload_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check handler
async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().timestamp(),
        "service": "launch-api"
    }))
}
