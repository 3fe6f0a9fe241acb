use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

/// Decodes bytes as UTF-8, replacing invalid sequences. Serves `text/plain` uploads and
/// every format without a dedicated extractor.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let text = String::from_utf8_lossy(data);
        if matches!(text, std::borrow::Cow::Owned(_)) {
            tracing::warn!(filename = %document.filename, "Upload contained invalid UTF-8, replaced");
        }
        Ok(text.into_owned())
    }
}
