//! API route definitions

use super::{handlers::upload, ApiState};
use axum::{routing::any, Router};

/// Upload route. Every method reaches the handler so that non-POST
/// requests get the JSON 405 body.
pub fn create_upload_routes() -> Router<ApiState> {
    Router::new().route("/api/upload", any(upload))
}
