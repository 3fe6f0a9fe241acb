use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::repair_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Text of every page that has any, in page order.
    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::pdf(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| FileLoaderError::pdf(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            match doc.extract_text(page_index) {
                Ok(text) if !text.trim().is_empty() => pages.push(text),
                Ok(_) => {}
                Err(e) => tracing::warn!(page_index, error = %e, "Skipping unreadable PDF page"),
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_mime.clone(),
            ));
        }

        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| FileLoaderError::pdf(format!("failed to create temp file: {e}")))?;
        temp_file
            .write_all(data)
            .map_err(|e| FileLoaderError::pdf(format!("failed to write temp file: {e}")))?;

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                let pages = Self::extract_pages(temp_file.path());
                drop(temp_file);
                pages
            }),
        )
        .await
        .map_err(|_| FileLoaderError::pdf("PDF extraction timed out"))?
        .map_err(|e| FileLoaderError::pdf(format!("task join error: {e}")))??;

        if pages.is_empty() {
            return Err(FileLoaderError::pdf("no extractable text on any page"));
        }
        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        let merged = pages
            .iter()
            .map(|page| repair_extracted_text(page))
            .filter(|page| !page.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(merged)
    }
}
