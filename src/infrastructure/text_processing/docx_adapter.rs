use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::repair_extracted_text;

const DOCUMENT_PART: &str = "word/document.xml";

/// Raw text of a Word document: one paragraph per `<w:p>`, separated by blank lines.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| FileLoaderError::docx(format!("failed to open DOCX archive: {e}")))?;

        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| FileLoaderError::docx(format!("missing {DOCUMENT_PART}: {e}")))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)
            .map_err(|e| FileLoaderError::docx(format!("failed to read {DOCUMENT_PART}: {e}")))?;
        Ok(xml)
    }

    fn paragraphs(xml: &str) -> Result<Vec<String>, FileLoaderError> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => in_text = true,
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => paragraphs.push(std::mem::take(&mut current)),
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"tab" => current.push('\t'),
                    b"br" | b"cr" => current.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(ref t)) if in_text => {
                    let text = t.unescape().map_err(|e| {
                        FileLoaderError::docx(format!("invalid text in {DOCUMENT_PART}: {e}"))
                    })?;
                    current.push_str(&text);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(FileLoaderError::docx(format!(
                        "malformed XML at position {}: {e}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if !current.is_empty() {
            paragraphs.push(current);
        }
        Ok(paragraphs)
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_mime.clone(),
            ));
        }

        let xml = Self::read_document_part(data)?;
        let paragraphs = Self::paragraphs(&xml)?;
        tracing::info!(paragraph_count = paragraphs.len(), "DOCX text extraction complete");

        let text = paragraphs
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(repair_extracted_text(&text))
    }
}
