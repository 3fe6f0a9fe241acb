use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use flashdeck::infrastructure::llm::MockLlmClient;

use crate::helpers::{OTHER_TOKEN, TEST_TOKEN, TestApp, authed, multipart_upload};

const NOTES: &str = "Photosynthesis converts light energy into chemical energy stored in glucose.";

#[tokio::test]
async fn given_running_server_when_health_check_then_returns_healthy() {
    let app = TestApp::new();

    let (status, body) = app
        .send(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["mode"], "live");
}

#[tokio::test]
async fn given_request_id_header_when_calling_then_it_is_echoed() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-42");
}

#[tokio::test]
async fn given_no_token_when_listing_sets_then_unauthorized() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Request::builder()
                .uri("/api/v1/flashcard-sets")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn given_unknown_token_when_uploading_then_unauthorized_and_model_not_called() {
    let app = TestApp::new();

    let (status, _) = app
        .send(multipart_upload(
            "stolen",
            Some(("notes.txt", "text/plain", NOTES.as_bytes())),
            Some("Biology"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.llm.call_count(), 0);
}

#[tokio::test]
async fn given_text_document_when_uploading_then_set_is_created_with_generated_cards() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("notes.txt", "text/plain", NOTES.as_bytes())),
            Some("  Biology  "),
            Some("Chapter 4"),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Biology");
    assert_eq!(body["cardCount"], 3);
    assert!(body["setId"].as_str().is_some());
    assert_eq!(app.flashcards.set_count(), 1);
    assert_eq!(app.flashcards.card_count(), 3);
}

#[tokio::test]
async fn given_upload_without_title_when_uploading_then_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("notes.txt", "text/plain", NOTES.as_bytes())),
            None,
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File and title are required");
}

#[tokio::test]
async fn given_upload_without_file_when_uploading_then_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_upload(TEST_TOKEN, None, Some("Biology"), None))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "File and title are required");
}

#[tokio::test]
async fn given_too_short_document_when_uploading_then_bad_request_without_model_call() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("notes.txt", "text/plain", b"too short")),
            Some("Biology"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Document appears to be empty or too short");
    assert_eq!(app.llm.call_count(), 0);
}

#[tokio::test]
async fn given_fake_pdf_when_uploading_then_bad_request_with_pdf_hint() {
    let app = TestApp::new();

    let (status, body) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("slides.pdf", "application/pdf", NOTES.as_bytes())),
            Some("Slides"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Could not extract text from PDF. Please try converting to a text file or DOCX format."
    );
}

#[tokio::test]
async fn given_oversized_upload_when_uploading_then_payload_too_large() {
    let app = TestApp::new();
    let data = vec![b'a'; 2 * 1024 * 1024];

    let (status, _) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("big.txt", "text/plain", &data)),
            Some("Big"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(app.flashcards.set_count(), 0);
}

#[tokio::test]
async fn given_model_failure_when_uploading_then_server_error_and_nothing_stored() {
    let app = TestApp::with_llm(MockLlmClient::failing("upstream timeout"));

    let (status, body) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("notes.txt", "text/plain", NOTES.as_bytes())),
            Some("Biology"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Failed to generate flashcards"));
    assert_eq!(app.flashcards.set_count(), 0);
}

#[tokio::test]
async fn given_prose_model_output_when_uploading_then_server_error() {
    let app = TestApp::with_llm(MockLlmClient::with_response("Sorry, I cannot help with that."));

    let (status, _) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("notes.txt", "text/plain", NOTES.as_bytes())),
            Some("Biology"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.flashcards.set_count(), 0);
}

#[tokio::test]
async fn given_card_insert_failure_when_uploading_then_set_is_rolled_back() {
    let app = TestApp::new();
    app.flashcards.fail_card_inserts(true);

    let (status, body) = app
        .send(multipart_upload(
            TEST_TOKEN,
            Some(("notes.txt", "text/plain", NOTES.as_bytes())),
            Some("Biology"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to save changes");
    assert_eq!(app.flashcards.set_count(), 0);
}

#[tokio::test]
async fn given_created_set_when_listing_then_it_is_returned_with_card_count() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app.get("/api/v1/flashcard-sets", TEST_TOKEN).await;

    assert_eq!(status, StatusCode::OK);
    let sets = body.as_array().unwrap();
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0]["id"], set_id.as_str());
    assert_eq!(sets[0]["card_count"], 3);
}

#[tokio::test]
async fn given_created_set_when_other_user_lists_then_it_is_hidden() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (_, list) = app.get("/api/v1/flashcard-sets", OTHER_TOKEN).await;
    let (status, _) = app
        .get(&format!("/api/v1/flashcard-sets/{set_id}"), OTHER_TOKEN)
        .await;

    assert!(list.as_array().unwrap().is_empty());
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_created_set_when_fetching_then_cards_are_in_generated_order() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app
        .get(&format!("/api/v1/flashcard-sets/{set_id}"), TEST_TOKEN)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Biology");
    let fronts: Vec<_> = body["flashcards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["front_text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fronts, vec!["Photosynthesis", "Chlorophyll", "Stomata"]);
}

#[tokio::test]
async fn given_malformed_id_when_fetching_set_then_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .get("/api/v1/flashcard-sets/not-a-uuid", TEST_TOKEN)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid flashcard set id");
}

#[tokio::test]
async fn given_unknown_set_when_fetching_then_not_found() {
    let app = TestApp::new();

    let (status, body) = app
        .get(
            "/api/v1/flashcard-sets/5b0c2b8e-8e0f-4a53-9d55-0f0b5f4e2a11",
            TEST_TOKEN,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Flashcard set not found");
}

#[tokio::test]
async fn given_new_title_when_updating_set_then_it_is_saved() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app
        .send_json(
            "PATCH",
            &format!("/api/v1/flashcard-sets/{set_id}"),
            TEST_TOKEN,
            json!({"title": "Plant Biology", "description": "  "}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Plant Biology");
    assert!(body["description"].is_null());
}

#[tokio::test]
async fn given_blank_title_when_updating_set_then_bad_request() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app
        .send_json(
            "PATCH",
            &format!("/api/v1/flashcard-sets/{set_id}"),
            TEST_TOKEN,
            json!({"title": "   "}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title is required");
}

#[tokio::test]
async fn given_invalid_json_when_updating_set_then_bad_request() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app
        .send(
            authed("PATCH", &format!("/api/v1/flashcard-sets/{set_id}"), TEST_TOKEN)
                .header("content-type", "application/json")
                .body(Body::from("{\"title\":"))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn given_set_when_deleting_then_it_and_its_cards_are_gone() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;
    let uri = format!("/api/v1/flashcard-sets/{set_id}");

    let (status, _) = app.delete(&uri, TEST_TOKEN).await;
    let (after, _) = app.get(&uri, TEST_TOKEN).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(after, StatusCode::NOT_FOUND);
    assert_eq!(app.flashcards.card_count(), 0);
}

#[tokio::test]
async fn given_other_users_set_when_deleting_then_not_found_and_set_survives() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, _) = app
        .delete(&format!("/api/v1/flashcard-sets/{set_id}"), OTHER_TOKEN)
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.flashcards.set_count(), 1);
}

#[tokio::test]
async fn given_card_lifecycle_when_creating_updating_deleting_then_each_step_succeeds() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (created, card) = app
        .send_json(
            "POST",
            "/api/v1/flashcards",
            TEST_TOKEN,
            json!({"set_id": set_id, "front_text": " Xylem ", "back_text": "Water-conducting tissue", "position": 3}),
        )
        .await;
    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(card["front_text"], "Xylem");
    assert_eq!(card["position"], 3);
    let card_uri = format!("/api/v1/flashcards/{}", card["id"].as_str().unwrap());

    let (updated, card) = app
        .send_json(
            "PATCH",
            &card_uri,
            TEST_TOKEN,
            json!({"front_text": "Xylem vessel", "back_text": "Carries water up the plant"}),
        )
        .await;
    assert_eq!(updated, StatusCode::OK);
    assert_eq!(card["front_text"], "Xylem vessel");

    let (deleted, _) = app.delete(&card_uri, TEST_TOKEN).await;
    let (again, _) = app.delete(&card_uri, TEST_TOKEN).await;
    assert_eq!(deleted, StatusCode::NO_CONTENT);
    assert_eq!(again, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_blank_back_text_when_creating_card_then_bad_request() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/flashcards",
            TEST_TOKEN,
            json!({"set_id": set_id, "front_text": "Xylem", "back_text": ""}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Front text and back text are required");
}

#[tokio::test]
async fn given_other_users_set_when_creating_card_then_not_found() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, _) = app
        .send_json(
            "POST",
            "/api/v1/flashcards",
            OTHER_TOKEN,
            json!({"set_id": set_id, "front_text": "Xylem", "back_text": "Tissue"}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(app.flashcards.card_count(), 3);
}

#[tokio::test]
async fn given_finished_run_when_recording_session_then_history_includes_stats() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (created, session) = app
        .send_json(
            "POST",
            "/api/v1/study-sessions",
            TEST_TOKEN,
            json!({"set_id": set_id, "cards_studied": 4, "cards_correct": 3}),
        )
        .await;
    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(session["cards_correct"], 3);

    let (status, history) = app
        .get(&format!("/api/v1/study-sessions/{set_id}"), TEST_TOKEN)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["sessions"].as_array().unwrap().len(), 1);
    assert_eq!(history["stats"]["total_sessions"], 1);
    assert_eq!(history["stats"]["overall_accuracy"], 75);
    assert_eq!(history["stats"]["best_session"]["accuracy"], 75);
    assert_eq!(history["stats"]["study_streak"], 1);
}

#[tokio::test]
async fn given_more_correct_than_studied_when_recording_session_then_bad_request() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, body) = app
        .send_json(
            "POST",
            "/api/v1/study-sessions",
            TEST_TOKEN,
            json!({"set_id": set_id, "cards_studied": 2, "cards_correct": 3}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cards correct cannot exceed cards studied");
    assert_eq!(app.sessions.session_count(), 0);
}

#[tokio::test]
async fn given_unknown_set_when_recording_session_then_not_found() {
    let app = TestApp::new();

    let (status, _) = app
        .send_json(
            "POST",
            "/api/v1/study-sessions",
            TEST_TOKEN,
            json!({"set_id": "5b0c2b8e-8e0f-4a53-9d55-0f0b5f4e2a11", "cards_studied": 2, "cards_correct": 1}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_set_without_sessions_when_fetching_history_then_stats_are_zero() {
    let app = TestApp::new();
    let set_id = app.create_set("Biology").await;

    let (status, history) = app
        .get(&format!("/api/v1/study-sessions/{set_id}"), TEST_TOKEN)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(history["sessions"].as_array().unwrap().is_empty());
    assert_eq!(history["stats"]["total_sessions"], 0);
    assert!(history["stats"]["best_session"].is_null());
}

#[tokio::test]
async fn given_new_user_when_loading_profile_then_defaults_are_returned() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/profile", TEST_TOKEN).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "pink");
    assert_eq!(body["display_name"], "ada");
}

#[tokio::test]
async fn given_theme_change_when_updating_profile_then_it_persists() {
    let app = TestApp::new();

    let (status, _) = app
        .send_json("PATCH", "/api/v1/profile", TEST_TOKEN, json!({"theme": "Purple"}))
        .await;
    let (_, body) = app.get("/api/v1/profile", TEST_TOKEN).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme"], "purple");
    assert_eq!(body["display_name"], "ada");
}

#[tokio::test]
async fn given_unknown_theme_when_updating_profile_then_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json("PATCH", "/api/v1/profile", TEST_TOKEN, json!({"theme": "neon"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid theme: neon");
}
