use async_trait::async_trait;

use crate::domain::{
    Flashcard, FlashcardId, FlashcardSet, FlashcardSetId, FlashcardSetSummary, UserId,
};

use super::RepositoryError;

/// Storage for sets and their cards. Every lookup is scoped to `owner`; rows belonging
/// to someone else behave exactly like missing rows.
#[async_trait]
pub trait FlashcardRepository: Send + Sync {
    async fn create_set(&self, set: &FlashcardSet) -> Result<(), RepositoryError>;

    async fn insert_cards(&self, cards: &[Flashcard]) -> Result<(), RepositoryError>;

    /// Removes the set and, by cascade, its cards. Returns whether a row was deleted.
    async fn delete_set(&self, owner: UserId, id: FlashcardSetId)
    -> Result<bool, RepositoryError>;

    async fn get_set(
        &self,
        owner: UserId,
        id: FlashcardSetId,
    ) -> Result<Option<FlashcardSet>, RepositoryError>;

    async fn list_sets(&self, owner: UserId) -> Result<Vec<FlashcardSetSummary>, RepositoryError>;

    async fn update_set(
        &self,
        owner: UserId,
        id: FlashcardSetId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<FlashcardSet>, RepositoryError>;

    /// Cards of one set ordered by position.
    async fn list_cards(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<Vec<Flashcard>, RepositoryError>;

    async fn update_card(
        &self,
        owner: UserId,
        id: FlashcardId,
        front: &str,
        back: &str,
    ) -> Result<Option<Flashcard>, RepositoryError>;

    async fn delete_card(&self, owner: UserId, id: FlashcardId) -> Result<bool, RepositoryError>;
}
