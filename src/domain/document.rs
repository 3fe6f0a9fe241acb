pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// An uploaded file awaiting text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub declared_mime: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Docx,
    Text,
    Other,
}

impl ContentType {
    /// Resolves the format from the declared MIME type, falling back to the file
    /// extension. A `text/plain` declaration wins over any extension.
    pub fn detect(mime: &str, filename: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        let filename = filename.to_ascii_lowercase();

        if mime == "text/plain" {
            Self::Text
        } else if mime == "application/pdf" || filename.ends_with(".pdf") {
            Self::Pdf
        } else if mime == DOCX_MIME || filename.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

impl Document {
    pub fn new(filename: String, declared_mime: String, size_bytes: u64) -> Self {
        let content_type = ContentType::detect(&declared_mime, &filename);
        Self {
            filename,
            declared_mime,
            content_type,
            size_bytes,
        }
    }
}
