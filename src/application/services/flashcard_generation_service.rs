use std::sync::Arc;

use crate::application::ports::{FileLoader, FlashcardRepository, LlmClient, MIN_EXTRACTED_CHARS};
use crate::domain::{Document, Flashcard, FlashcardSet, FlashcardSetId, UserId};

use super::{ServiceError, build_flashcard_prompt, normalize_text, parse_flashcard_response};

/// One document upload as received from the client.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub owner: UserId,
    pub data: &'a [u8],
    pub filename: &'a str,
    pub mime: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSet {
    pub set_id: FlashcardSetId,
    pub title: String,
    pub card_count: usize,
}

/// Runs extraction, normalization, generation, parsing and persistence for one upload.
/// All-or-nothing: a set is only left behind when its cards were stored too.
pub struct FlashcardGenerationService {
    file_loader: Arc<dyn FileLoader>,
    llm_client: Arc<dyn LlmClient>,
    repository: Arc<dyn FlashcardRepository>,
}

impl FlashcardGenerationService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        llm_client: Arc<dyn LlmClient>,
        repository: Arc<dyn FlashcardRepository>,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            repository,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            owner = %request.owner,
            filename = %request.filename,
            size_bytes = request.data.len(),
        )
    )]
    pub async fn generate(&self, request: GenerationRequest<'_>) -> Result<GeneratedSet, ServiceError> {
        if request.title.trim().is_empty() || request.data.is_empty() {
            return Err(ServiceError::Validation(
                "File and title are required".to_string(),
            ));
        }

        let document = Document::new(
            request.filename.to_string(),
            request.mime.to_string(),
            request.data.len() as u64,
        );

        let extracted = self
            .file_loader
            .extract_text(request.data, &document)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Text extraction failed"))?;

        let normalized = normalize_text(&extracted);
        let normalized_chars = normalized.chars().count();
        tracing::debug!(
            extracted_chars = extracted.chars().count(),
            normalized_chars,
            "Document text normalized"
        );

        if normalized_chars < MIN_EXTRACTED_CHARS {
            tracing::warn!(normalized_chars, "Document text too short after cleaning");
            return Err(ServiceError::InsufficientContent {
                chars: normalized_chars,
            });
        }

        let prompt = build_flashcard_prompt(&normalized);
        let raw = self
            .llm_client
            .complete(&prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Flashcard generation request failed"))?;

        let candidates = parse_flashcard_response(&raw)
            .inspect_err(|e| tracing::error!(error = %e, "Model output rejected"))?;
        tracing::info!(candidates = candidates.len(), "Flashcards generated");

        let set = FlashcardSet::new(request.owner, request.title, request.description);
        self.repository
            .create_set(&set)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create flashcard set"))?;

        let cards: Vec<Flashcard> = candidates
            .iter()
            .enumerate()
            .map(|(position, c)| Flashcard::new(set.id, &c.front, &c.back, position as i32))
            .collect();

        if let Err(e) = self.repository.insert_cards(&cards).await {
            tracing::error!(error = %e, set_id = %set.id, "Failed to insert flashcards, removing set");
            self.compensate(request.owner, set.id).await;
            return Err(ServiceError::PersistenceFailed(e));
        }

        tracing::info!(set_id = %set.id, card_count = cards.len(), "Flashcard set created");

        Ok(GeneratedSet {
            set_id: set.id,
            title: set.title,
            card_count: cards.len(),
        })
    }

    async fn compensate(&self, owner: UserId, set_id: FlashcardSetId) {
        match self.repository.delete_set(owner, set_id).await {
            Ok(_) => tracing::info!(set_id = %set_id, "Orphaned flashcard set removed"),
            Err(e) => tracing::error!(
                error = %e,
                set_id = %set_id,
                "Failed to remove orphaned flashcard set"
            ),
        }
    }
}
