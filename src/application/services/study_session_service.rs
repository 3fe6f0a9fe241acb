use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{FlashcardRepository, StudySessionRepository};
use crate::domain::{FlashcardSetId, StudySession, UserId};

use super::{ServiceError, StudyStats, compute_stats};

/// Number of sessions returned alongside the statistics.
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct StudyHistory {
    pub sessions: Vec<StudySession>,
    pub stats: StudyStats,
}

pub struct StudySessionService {
    sessions: Arc<dyn StudySessionRepository>,
    flashcards: Arc<dyn FlashcardRepository>,
}

impl StudySessionService {
    pub fn new(
        sessions: Arc<dyn StudySessionRepository>,
        flashcards: Arc<dyn FlashcardRepository>,
    ) -> Self {
        Self {
            sessions,
            flashcards,
        }
    }

    #[tracing::instrument(skip(self), fields(owner = %owner, set_id = %set_id))]
    pub async fn record(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
        cards_studied: u32,
        cards_correct: u32,
    ) -> Result<StudySession, ServiceError> {
        if cards_correct > cards_studied {
            return Err(ServiceError::Validation(
                "Cards correct cannot exceed cards studied".to_string(),
            ));
        }

        if i32::try_from(cards_studied).is_err() {
            return Err(ServiceError::Validation(
                "Cards studied is out of range".to_string(),
            ));
        }

        if self.flashcards.get_set(owner, set_id).await?.is_none() {
            return Err(ServiceError::NotFound("Flashcard set".to_string()));
        }

        let session = StudySession::new(set_id, owner, cards_studied, cards_correct);
        self.sessions.create(&session).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to create study session");
        })?;

        tracing::info!(
            session_id = %session.id,
            cards_studied,
            cards_correct,
            "Study session recorded"
        );
        Ok(session)
    }

    pub async fn history(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<StudyHistory, ServiceError> {
        let mut sessions = self.sessions.list_for_set(owner, set_id).await?;
        let stats = compute_stats(&sessions, Utc::now().date_naive());
        sessions.truncate(HISTORY_LIMIT);

        Ok(StudyHistory { sessions, stats })
    }
}
