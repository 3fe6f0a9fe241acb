use async_trait::async_trait;

use crate::domain::Document;

/// Minimum number of characters an extracted document must contain.
pub const MIN_EXTRACTED_CHARS: usize = 50;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {reason}")]
    ExtractionFailed { reason: String, hint: String },
    #[error("insufficient content: {chars} characters extracted")]
    InsufficientContent { chars: usize },
}

impl FileLoaderError {
    pub fn pdf(reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            reason: reason.into(),
            hint: "Could not extract text from PDF. Please try converting to a text file or DOCX format."
                .to_string(),
        }
    }

    pub fn docx(reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            reason: reason.into(),
            hint: "Could not extract text from DOCX. Please try converting to a text file."
                .to_string(),
        }
    }
}
