use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::{FlashcardId, FlashcardSetId};
use crate::presentation::extractors::CurrentUser;
use crate::presentation::state::AppState;

use super::dto::{CreateCardRequest, FlashcardResponse, UpdateCardRequest};
use super::error_response::{json_rejection_response, parse_id, service_error_response};

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn create_card_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<CreateCardRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match state
        .flashcard_service
        .create_card(
            user.0.id,
            FlashcardSetId::from_uuid(body.set_id),
            &body.front_text,
            &body.back_text,
            body.position,
        )
        .await
    {
        Ok(card) => (StatusCode::CREATED, Json(FlashcardResponse::from(card))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn update_card_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(card_id): Path<String>,
    body: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Response {
    let card_id = match parse_id(&card_id, "flashcard") {
        Ok(id) => FlashcardId::from_uuid(id),
        Err(response) => return response,
    };
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match state
        .flashcard_service
        .update_card(user.0.id, card_id, &body.front_text, &body.back_text)
        .await
    {
        Ok(card) => (StatusCode::OK, Json(FlashcardResponse::from(card))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn delete_card_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(card_id): Path<String>,
) -> Response {
    let card_id = match parse_id(&card_id, "flashcard") {
        Ok(id) => FlashcardId::from_uuid(id),
        Err(response) => return response,
    };

    match state.flashcard_service.delete_card(user.0.id, card_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => service_error_response(e),
    }
}
