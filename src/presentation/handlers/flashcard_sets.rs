use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::FlashcardSetId;
use crate::presentation::extractors::CurrentUser;
use crate::presentation::state::AppState;

use super::dto::{FlashcardSetDetailResponse, FlashcardSetResponse, UpdateSetRequest};
use super::error_response::{json_rejection_response, parse_id, service_error_response};

#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn list_sets_handler(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.flashcard_service.list_sets(user.0.id).await {
        Ok(sets) => {
            let body: Vec<FlashcardSetResponse> = sets.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_set_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(set_id): Path<String>,
) -> Response {
    let set_id = match parse_id(&set_id, "flashcard set") {
        Ok(id) => FlashcardSetId::from_uuid(id),
        Err(response) => return response,
    };

    match state.flashcard_service.get_set(user.0.id, set_id).await {
        Ok(detail) => (StatusCode::OK, Json(FlashcardSetDetailResponse::from(detail))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn update_set_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(set_id): Path<String>,
    body: Result<Json<UpdateSetRequest>, JsonRejection>,
) -> Response {
    let set_id = match parse_id(&set_id, "flashcard set") {
        Ok(id) => FlashcardSetId::from_uuid(id),
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match state
        .flashcard_service
        .update_set(user.0.id, set_id, &body.title, body.description.as_deref())
        .await
    {
        Ok(set) => (StatusCode::OK, Json(FlashcardSetResponse::from(set))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn delete_set_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(set_id): Path<String>,
) -> Response {
    let set_id = match parse_id(&set_id, "flashcard set") {
        Ok(id) => FlashcardSetId::from_uuid(id),
        Err(response) => return response,
    };

    match state.flashcard_service.delete_set(user.0.id, set_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e),
    }
}
