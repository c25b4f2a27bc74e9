//! API response mapping

use crate::core::{ErrorBody, UploadError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
