use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub mode: &'static str,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mode = if state.scaffold_config.enabled {
        "scaffold"
    } else {
        "live"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            mode,
        }),
    )
}
