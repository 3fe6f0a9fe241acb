use chrono::{DateTime, Utc};

use super::{FlashcardId, FlashcardSetId};

#[derive(Debug, Clone, PartialEq)]
pub struct Flashcard {
    pub id: FlashcardId,
    pub set_id: FlashcardSetId,
    pub front: String,
    pub back: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flashcard {
    pub fn new(set_id: FlashcardSetId, front: &str, back: &str, position: i32) -> Self {
        let now = Utc::now();
        Self {
            id: FlashcardId::new(),
            set_id,
            front: front.trim().to_string(),
            back: back.trim().to_string(),
            position,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A front/back pair read from model output, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardCandidate {
    pub front: String,
    pub back: String,
}

impl FlashcardCandidate {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}
