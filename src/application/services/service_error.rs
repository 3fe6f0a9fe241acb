use crate::application::ports::{FileLoaderError, IdentityError, LlmClientError, RepositoryError};

use super::ResponseParseError;

const GENERATION_FAILED_MESSAGE: &str = "Failed to generate flashcards. Please try with a different document or check if it contains clear vocabulary terms.";

/// Failure taxonomy shared by every service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("identity provider: {0}")]
    Identity(#[from] IdentityError),
    #[error("validation: {0}")]
    Validation(String),
    #[error("extraction failed: {reason}")]
    ExtractionFailed { reason: String, hint: String },
    #[error("insufficient content: {chars} characters")]
    InsufficientContent { chars: usize },
    #[error("generation failed: {0}")]
    GenerationFailed(#[from] LlmClientError),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("no valid cards")]
    NoValidCards,
    #[error("persistence failed: {0}")]
    PersistenceFailed(#[from] RepositoryError),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Message safe to show an end user. Internal detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthenticated | ServiceError::Identity(_) => "Unauthorized".to_string(),
            ServiceError::Validation(msg) => msg.clone(),
            ServiceError::ExtractionFailed { hint, .. } => hint.clone(),
            ServiceError::InsufficientContent { .. } => {
                "Document appears to be empty or too short".to_string()
            }
            ServiceError::GenerationFailed(_)
            | ServiceError::MalformedResponse(_)
            | ServiceError::NoValidCards => GENERATION_FAILED_MESSAGE.to_string(),
            ServiceError::PersistenceFailed(_) => "Failed to save changes".to_string(),
            ServiceError::NotFound(what) => format!("{} not found", what),
        }
    }
}

impl From<FileLoaderError> for ServiceError {
    fn from(e: FileLoaderError) -> Self {
        match e {
            FileLoaderError::ExtractionFailed { reason, hint } => {
                ServiceError::ExtractionFailed { reason, hint }
            }
            FileLoaderError::InsufficientContent { chars } => {
                ServiceError::InsufficientContent { chars }
            }
            FileLoaderError::UnsupportedContentType(mime) => ServiceError::ExtractionFailed {
                reason: format!("unsupported content type: {}", mime),
                hint: "Unsupported file type. Please upload a PDF, DOCX or text file.".to_string(),
            },
        }
    }
}

impl From<ResponseParseError> for ServiceError {
    fn from(e: ResponseParseError) -> Self {
        match e {
            ResponseParseError::MalformedResponse(detail) => ServiceError::MalformedResponse(detail),
            ResponseParseError::NoValidCards => ServiceError::NoValidCards,
        }
    }
}
