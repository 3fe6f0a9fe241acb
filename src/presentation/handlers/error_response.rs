use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::ServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Unauthenticated | ServiceError::Identity(_) => StatusCode::UNAUTHORIZED,
        ServiceError::Validation(_)
        | ServiceError::ExtractionFailed { .. }
        | ServiceError::InsufficientContent { .. } => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::GenerationFailed(_)
        | ServiceError::MalformedResponse(_)
        | ServiceError::NoValidCards
        | ServiceError::PersistenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Logs the full error and answers with the user-facing message only.
pub fn service_error_response(error: ServiceError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::warn!(error = %error, status = status.as_u16(), "Request rejected");
    }
    error_response(status, error.user_message())
}

pub fn json_rejection_response(rejection: JsonRejection) -> Response {
    tracing::warn!(error = %rejection.body_text(), "Invalid JSON body");
    error_response(StatusCode::BAD_REQUEST, "Invalid request body")
}

pub fn parse_id(raw: &str, what: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| error_response(StatusCode::BAD_REQUEST, format!("Invalid {what} id")))
}
