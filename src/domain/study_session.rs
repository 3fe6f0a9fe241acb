use chrono::{DateTime, Utc};

use super::{FlashcardSetId, StudySessionId, UserId};

/// One completed study run. Rows are append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct StudySession {
    pub id: StudySessionId,
    pub set_id: FlashcardSetId,
    pub owner: UserId,
    pub cards_studied: u32,
    pub cards_correct: u32,
    pub session_date: DateTime<Utc>,
}

impl StudySession {
    pub fn new(
        set_id: FlashcardSetId,
        owner: UserId,
        cards_studied: u32,
        cards_correct: u32,
    ) -> Self {
        Self {
            id: StudySessionId::new(),
            set_id,
            owner,
            cards_studied,
            cards_correct,
            session_date: Utc::now(),
        }
    }

    /// Fraction of studied cards answered correctly, in `[0, 1]`.
    pub fn accuracy_ratio(&self) -> f64 {
        if self.cards_studied == 0 {
            0.0
        } else {
            f64::from(self.cards_correct) / f64::from(self.cards_studied)
        }
    }
}

/// `round(100 * correct / studied)` with halves rounded up, 0 when nothing was studied.
pub fn accuracy_percent(cards_correct: u64, cards_studied: u64) -> u32 {
    if cards_studied == 0 {
        return 0;
    }
    ((200 * cards_correct + cards_studied) / (2 * cards_studied)) as u32
}

/// Counts produced by a study run when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub set_id: FlashcardSetId,
    pub cards_studied: u32,
    pub cards_correct: u32,
}
