use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::duration::TtlError;
use crate::vault::AccessError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized { reason: &'static str, message: String },
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let (error, message) = match self {
            ApiError::BadRequest(message) => ("bad_request", message),
            ApiError::Unauthorized { reason, message } => (reason, message),
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        ApiError::Unauthorized { reason: err.kind(), message: err.to_string() }
    }
}

impl From<TtlError> for ApiError {
    fn from(err: TtlError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
