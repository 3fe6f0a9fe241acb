use chrono::{DateTime, Utc};

use super::{FlashcardSetId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardSet {
    pub id: FlashcardSetId,
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FlashcardSet {
    /// Builds a new set with a trimmed title. A blank description is stored as none.
    pub fn new(owner: UserId, title: &str, description: Option<&str>) -> Self {
        let now = Utc::now();
        Self {
            id: FlashcardSetId::new(),
            owner,
            title: title.trim().to_string(),
            description: clean_description(description),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Dashboard row: a set together with how many cards it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardSetSummary {
    pub set: FlashcardSet,
    pub card_count: usize,
}

pub fn clean_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
