//! API request handlers

use super::ApiState;
use crate::core::{UploadError, UploadRequest, UploadResponse};
use crate::pipeline::UploadPipeline;
use axum::{body::Bytes, extract::State, http::Method, response::Json};

/// `POST /api/upload`
pub async fn upload(
    State(state): State<ApiState>,
    method: Method,
    body: Bytes,
) -> Result<Json<UploadResponse>, UploadError> {
    UploadPipeline::validate_method(&method)?;

    let request: UploadRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Rejected upload body: {}", e);
        UploadError::InvalidBody(e.to_string())
    })?;

    let response = state.pipeline.run(request).await?;
    Ok(Json(response))
}
