use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::ProfileUpdate;
use crate::presentation::extractors::CurrentUser;
use crate::presentation::state::AppState;

use super::dto::{ProfileResponse, UpdateProfileRequest};
use super::error_response::{json_rejection_response, service_error_response};

#[tracing::instrument(skip(state, user), fields(user_id = %user.0.id))]
pub async fn get_profile_handler(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.profile_service.load(&user.0).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, user, body), fields(user_id = %user.0.id))]
pub async fn update_profile_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return json_rejection_response(rejection),
    };

    let update = ProfileUpdate {
        display_name: body.display_name,
        theme: body.theme,
    };

    match state.profile_service.update(&user.0, update).await {
        Ok(profile) => (StatusCode::OK, Json(ProfileResponse::from(profile))).into_response(),
        Err(e) => service_error_response(e),
    }
}
