use std::sync::Arc;

use crate::application::ports::FlashcardRepository;
use crate::domain::{
    Flashcard, FlashcardId, FlashcardSet, FlashcardSetId, FlashcardSetSummary, UserId,
    clean_description,
};

use super::ServiceError;

#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardSetDetail {
    pub set: FlashcardSet,
    pub cards: Vec<Flashcard>,
}

/// Manual editing of sets and cards after generation.
pub struct FlashcardService {
    repository: Arc<dyn FlashcardRepository>,
}

impl FlashcardService {
    pub fn new(repository: Arc<dyn FlashcardRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_sets(&self, owner: UserId) -> Result<Vec<FlashcardSetSummary>, ServiceError> {
        Ok(self.repository.list_sets(owner).await?)
    }

    pub async fn get_set(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<FlashcardSetDetail, ServiceError> {
        let set = self.owned_set(owner, set_id).await?;
        let cards = self.repository.list_cards(owner, set_id).await?;
        Ok(FlashcardSetDetail { set, cards })
    }

    #[tracing::instrument(skip(self, title, description), fields(owner = %owner, set_id = %set_id))]
    pub async fn update_set(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
        title: &str,
        description: Option<&str>,
    ) -> Result<FlashcardSet, ServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ServiceError::Validation("Title is required".to_string()));
        }
        let description = clean_description(description);

        self.repository
            .update_set(owner, set_id, title, description.as_deref())
            .await?
            .ok_or_else(|| ServiceError::NotFound("Flashcard set".to_string()))
    }

    #[tracing::instrument(skip(self), fields(owner = %owner, set_id = %set_id))]
    pub async fn delete_set(&self, owner: UserId, set_id: FlashcardSetId) -> Result<(), ServiceError> {
        if self.repository.delete_set(owner, set_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Flashcard set".to_string()))
        }
    }

    #[tracing::instrument(skip(self, front, back), fields(owner = %owner, set_id = %set_id))]
    pub async fn create_card(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
        front: &str,
        back: &str,
        position: Option<i32>,
    ) -> Result<Flashcard, ServiceError> {
        require_sides(front, back)?;
        self.owned_set(owner, set_id).await?;

        let card = Flashcard::new(set_id, front, back, position.unwrap_or(0));
        self.repository.insert_cards(std::slice::from_ref(&card)).await?;
        Ok(card)
    }

    #[tracing::instrument(skip(self, front, back), fields(owner = %owner, card_id = %card_id))]
    pub async fn update_card(
        &self,
        owner: UserId,
        card_id: FlashcardId,
        front: &str,
        back: &str,
    ) -> Result<Flashcard, ServiceError> {
        require_sides(front, back)?;

        self.repository
            .update_card(owner, card_id, front.trim(), back.trim())
            .await?
            .ok_or_else(|| ServiceError::NotFound("Flashcard".to_string()))
    }

    #[tracing::instrument(skip(self), fields(owner = %owner, card_id = %card_id))]
    pub async fn delete_card(&self, owner: UserId, card_id: FlashcardId) -> Result<(), ServiceError> {
        if self.repository.delete_card(owner, card_id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound("Flashcard".to_string()))
        }
    }

    async fn owned_set(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<FlashcardSet, ServiceError> {
        self.repository
            .get_set(owner, set_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Flashcard set".to_string()))
    }
}

fn require_sides(front: &str, back: &str) -> Result<(), ServiceError> {
    if front.trim().is_empty() || back.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Front text and back text are required".to_string(),
        ));
    }
    Ok(())
}
