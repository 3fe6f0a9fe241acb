use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{GenerationRequest, ServiceError};
use crate::presentation::extractors::CurrentUser;
use crate::presentation::state::AppState;

use super::error_response::{error_response, service_error_response};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub set_id: String,
    pub title: String,
    pub card_count: usize,
}

struct UploadedFile {
    filename: String,
    mime: String,
    data: Vec<u8>,
}

#[derive(Default)]
struct UploadForm {
    file: Option<UploadedFile>,
    title: Option<String>,
    description: Option<String>,
}

async fn read_form(multipart: &mut Multipart) -> Result<UploadForm, Response> {
    let mut form = UploadForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart");
                return Err(error_response(e.status(), format!("Failed to read upload: {}", e.body_text())));
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let mime = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await.map_err(|e| {
                    tracing::warn!(error = %e, "Failed to read file bytes");
                    error_response(e.status(), format!("Failed to read file: {}", e.body_text()))
                })?;
                form.file = Some(UploadedFile {
                    filename,
                    mime,
                    data: data.to_vec(),
                });
            }
            "title" | "description" => {
                let value = field.text().await.map_err(|e| {
                    error_response(e.status(), format!("Failed to read {name}: {}", e.body_text()))
                })?;
                if name == "title" {
                    form.title = Some(value);
                } else {
                    form.description = Some(value);
                }
            }
            other => tracing::debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}

/// `POST /api/v1/documents`: turns an uploaded document into a stored flashcard set.
#[tracing::instrument(skip(state, user, multipart), fields(user_id = %user.0.id))]
pub async fn generate_from_document_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    mut multipart: Multipart,
) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let (Some(file), Some(title)) = (form.file, form.title) else {
        return service_error_response(ServiceError::Validation(
            "File and title are required".to_string(),
        ));
    };

    tracing::debug!(
        filename = %file.filename,
        content_type = %file.mime,
        bytes = file.data.len(),
        "Processing document upload"
    );

    let request = GenerationRequest {
        owner: user.0.id,
        data: &file.data,
        filename: &file.filename,
        mime: &file.mime,
        title: &title,
        description: form.description.as_deref(),
    };

    match state.generation_service.generate(request).await {
        Ok(generated) => (
            StatusCode::OK,
            Json(GenerateResponse {
                set_id: generated.set_id.to_string(),
                title: generated.title,
                card_count: generated.card_count,
            }),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}
