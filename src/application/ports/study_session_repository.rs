use async_trait::async_trait;

use crate::domain::{FlashcardSetId, StudySession, UserId};

use super::RepositoryError;

#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    async fn create(&self, session: &StudySession) -> Result<(), RepositoryError>;

    /// Sessions for one set, most recent first.
    async fn list_for_set(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<Vec<StudySession>, RepositoryError>;
}
