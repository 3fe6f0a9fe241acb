use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Response;

use crate::application::services::ServiceError;
use crate::domain::AuthenticatedUser;
use crate::presentation::handlers::service_error_response;
use crate::presentation::state::AppState;

/// The caller behind `Authorization: Bearer <token>`. Rejects with 401 before any body
/// is read.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            tracing::debug!("Request without bearer token");
            return Err(service_error_response(ServiceError::Unauthenticated));
        };

        match state.identity_provider.authenticate(token).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err(service_error_response(ServiceError::Unauthenticated)),
            Err(e) => Err(service_error_response(ServiceError::Identity(e))),
        }
    }
}
