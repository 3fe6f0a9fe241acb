use flashdeck::application::ports::{FileLoader, FileLoaderError};
use flashdeck::domain::Document;
use flashdeck::infrastructure::text_processing::{CompositeFileLoader, PdfAdapter};

const PDF_HINT: &str =
    "Could not extract text from PDF. Please try converting to a text file or DOCX format.";

fn pdf_document(filename: &str, data: &[u8]) -> Document {
    Document::new(
        filename.to_string(),
        "application/pdf".to_string(),
        data.len() as u64,
    )
}

#[tokio::test]
async fn given_pdf_with_text_when_extracting_then_returns_page_text() {
    let pdf_bytes = include_bytes!("../fixtures/lecture_notes.pdf");
    let document = pdf_document("lecture_notes.pdf", pdf_bytes);

    let text = PdfAdapter::new()
        .extract_text(pdf_bytes, &document)
        .await
        .unwrap();

    assert!(text.contains("Photosynthesis"), "unexpected text: {text:?}");
    assert!(text.contains("Chlorophyll"), "unexpected text: {text:?}");
    assert!(text.chars().count() >= 50);
}

#[tokio::test]
async fn given_pdf_with_text_when_loading_through_composite_then_text_passes_minimum() {
    let pdf_bytes = include_bytes!("../fixtures/lecture_notes.pdf");
    let document = pdf_document("lecture_notes.pdf", pdf_bytes);

    let text = CompositeFileLoader::with_default_adapters()
        .extract_text(pdf_bytes, &document)
        .await
        .unwrap();

    assert!(text.contains("chemical energy"), "unexpected text: {text:?}");
}

#[tokio::test]
async fn given_pdf_without_text_when_extracting_then_extraction_failed_with_pdf_hint() {
    let pdf_bytes = include_bytes!("../fixtures/blank_page.pdf");
    let document = pdf_document("blank_page.pdf", pdf_bytes);

    let result = PdfAdapter::new().extract_text(pdf_bytes, &document).await;

    match result {
        Err(FileLoaderError::ExtractionFailed { hint, .. }) => assert_eq!(hint, PDF_HINT),
        other => panic!("expected extraction failure, got {other:?}"),
    }
}

#[tokio::test]
async fn given_short_pdf_when_loading_through_composite_then_insufficient_content() {
    let pdf_bytes = include_bytes!("../fixtures/short_note.pdf");
    let document = pdf_document("short_note.pdf", pdf_bytes);

    let result = CompositeFileLoader::with_default_adapters()
        .extract_text(pdf_bytes, &document)
        .await;

    assert!(
        matches!(result, Err(FileLoaderError::InsufficientContent { chars }) if chars < 50),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
async fn given_docx_document_when_pdf_adapter_used_then_unsupported_content_type() {
    let document = Document::new(
        "chapter.docx".to_string(),
        flashdeck::domain::DOCX_MIME.to_string(),
        0,
    );

    let result = PdfAdapter::new().extract_text(b"", &document).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedContentType(_))));
}
