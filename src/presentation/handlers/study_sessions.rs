use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::FlashcardSetId;
use crate::presentation::extractors::CurrentUser;
use crate::presentation::state::AppState;

use super::dto::{RecordSessionRequest, StudyHistoryResponse, StudySessionResponse};
use super::error_response::{json_rejection_response, parse_id, service_error_response};

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn record_session_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<RecordSessionRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match state
        .study_session_service
        .record(
            user.0.id,
            FlashcardSetId::from_uuid(body.set_id),
            body.cards_studied,
            body.cards_correct,
        )
        .await
    {
        Ok(session) => {
            (StatusCode::CREATED, Json(StudySessionResponse::from(session))).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn session_history_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(set_id): Path<String>,
) -> Response {
    let set_id = match parse_id(&set_id, "flashcard set") {
        Ok(id) => FlashcardSetId::from_uuid(id),
        Err(response) => return response,
    };

    match state.study_session_service.history(user.0.id, set_id).await {
        Ok(history) => (StatusCode::OK, Json(StudyHistoryResponse::from(history))).into_response(),
        Err(e) => service_error_response(e),
    }
}
