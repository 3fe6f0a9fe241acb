use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::{BestSession, FlashcardSetDetail, StudyHistory, StudyStats};
use crate::domain::{Flashcard, FlashcardSet, FlashcardSetSummary, Profile, StudySession};

#[derive(Serialize)]
pub struct FlashcardSetResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_count: Option<usize>,
}

impl From<FlashcardSet> for FlashcardSetResponse {
    fn from(set: FlashcardSet) -> Self {
        Self {
            id: set.id.as_uuid(),
            title: set.title,
            description: set.description,
            created_at: set.created_at,
            updated_at: set.updated_at,
            card_count: None,
        }
    }
}

impl From<FlashcardSetSummary> for FlashcardSetResponse {
    fn from(summary: FlashcardSetSummary) -> Self {
        Self {
            card_count: Some(summary.card_count),
            ..summary.set.into()
        }
    }
}

#[derive(Serialize)]
pub struct FlashcardResponse {
    pub id: Uuid,
    pub set_id: Uuid,
    pub front_text: String,
    pub back_text: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Flashcard> for FlashcardResponse {
    fn from(card: Flashcard) -> Self {
        Self {
            id: card.id.as_uuid(),
            set_id: card.set_id.as_uuid(),
            front_text: card.front,
            back_text: card.back,
            position: card.position,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct FlashcardSetDetailResponse {
    #[serde(flatten)]
    pub set: FlashcardSetResponse,
    pub flashcards: Vec<FlashcardResponse>,
}

impl From<FlashcardSetDetail> for FlashcardSetDetailResponse {
    fn from(detail: FlashcardSetDetail) -> Self {
        Self {
            set: detail.set.into(),
            flashcards: detail.cards.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct StudySessionResponse {
    pub id: Uuid,
    pub set_id: Uuid,
    pub cards_studied: u32,
    pub cards_correct: u32,
    pub session_date: DateTime<Utc>,
}

impl From<StudySession> for StudySessionResponse {
    fn from(session: StudySession) -> Self {
        Self {
            id: session.id.as_uuid(),
            set_id: session.set_id.as_uuid(),
            cards_studied: session.cards_studied,
            cards_correct: session.cards_correct,
            session_date: session.session_date,
        }
    }
}

#[derive(Serialize)]
pub struct BestSessionResponse {
    #[serde(flatten)]
    pub session: StudySessionResponse,
    pub accuracy: u32,
}

#[derive(Serialize)]
pub struct StudyStatsResponse {
    pub total_sessions: usize,
    pub total_cards_studied: u64,
    pub total_cards_correct: u64,
    pub overall_accuracy: u32,
    pub recent_accuracy: u32,
    pub best_session: Option<BestSessionResponse>,
    pub study_streak: u32,
}

impl From<StudyStats> for StudyStatsResponse {
    fn from(stats: StudyStats) -> Self {
        Self {
            total_sessions: stats.total_sessions,
            total_cards_studied: stats.total_cards_studied,
            total_cards_correct: stats.total_cards_correct,
            overall_accuracy: stats.overall_accuracy,
            recent_accuracy: stats.recent_accuracy,
            best_session: stats.best_session.map(|BestSession { session, accuracy }| {
                BestSessionResponse {
                    session: session.into(),
                    accuracy,
                }
            }),
            study_streak: stats.study_streak,
        }
    }
}

#[derive(Serialize)]
pub struct StudyHistoryResponse {
    pub sessions: Vec<StudySessionResponse>,
    pub stats: StudyStatsResponse,
}

impl From<StudyHistory> for StudyHistoryResponse {
    fn from(history: StudyHistory) -> Self {
        Self {
            sessions: history.sessions.into_iter().map(Into::into).collect(),
            stats: history.stats.into(),
        }
    }
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub display_name: Option<String>,
    pub theme: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: profile.user_id.as_uuid(),
            display_name: profile.display_name,
            theme: profile.theme.to_string(),
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateSetRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCardRequest {
    pub set_id: Uuid,
    pub front_text: String,
    pub back_text: String,
    #[serde(default)]
    pub position: Option<i32>,
}

#[derive(Deserialize)]
pub struct UpdateCardRequest {
    pub front_text: String,
    pub back_text: String,
}

#[derive(Deserialize)]
pub struct RecordSessionRequest {
    pub set_id: Uuid,
    pub cards_studied: u32,
    pub cards_correct: u32,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
}
