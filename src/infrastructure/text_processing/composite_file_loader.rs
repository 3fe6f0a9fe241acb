use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError, MIN_EXTRACTED_CHARS};
use crate::domain::{ContentType, Document};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Routes a document to the extractor registered for its content type and rejects
/// results that are too short to generate cards from.
pub struct CompositeFileLoader {
    adapters: HashMap<ContentType, Arc<dyn FileLoader>>,
    fallback: Arc<dyn FileLoader>,
}

impl CompositeFileLoader {
    pub fn new(
        adapters: Vec<(ContentType, Arc<dyn FileLoader>)>,
        fallback: Arc<dyn FileLoader>,
    ) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
            fallback,
        }
    }

    /// PDF and DOCX get their own extractors; everything else is read as text.
    pub fn with_default_adapters() -> Self {
        Self::new(
            vec![
                (ContentType::Pdf, Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>),
                (ContentType::Docx, Arc::new(DocxAdapter::new())),
            ],
            Arc::new(PlainTextAdapter),
        )
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    #[tracing::instrument(skip(self, data), fields(content_type = document.content_type.as_str(), size = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self
            .adapters
            .get(&document.content_type)
            .unwrap_or(&self.fallback);

        let text = adapter.extract_text(data, document).await?;

        let chars = text.trim().chars().count();
        if chars < MIN_EXTRACTED_CHARS {
            tracing::warn!(chars, "Extracted text below minimum length");
            return Err(FileLoaderError::InsufficientContent { chars });
        }

        Ok(text)
    }
}
