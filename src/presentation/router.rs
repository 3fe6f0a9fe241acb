use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_card_handler, delete_card_handler, delete_set_handler, generate_from_document_handler,
    get_profile_handler, get_set_handler, health_handler, list_sets_handler,
    record_session_handler, session_history_handler, update_card_handler, update_profile_handler,
    update_set_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.upload.body_limit_bytes();

    let api = Router::new()
        .route(
            "/documents",
            post(generate_from_document_handler).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/flashcard-sets", get(list_sets_handler))
        .route(
            "/flashcard-sets/{set_id}",
            get(get_set_handler)
                .patch(update_set_handler)
                .delete(delete_set_handler),
        )
        .route("/flashcards", post(create_card_handler))
        .route(
            "/flashcards/{card_id}",
            patch(update_card_handler).delete(delete_card_handler),
        )
        .route("/study-sessions", post(record_session_handler))
        .route("/study-sessions/{set_id}", get(session_history_handler))
        .route("/profile", get(get_profile_handler).patch(update_profile_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
