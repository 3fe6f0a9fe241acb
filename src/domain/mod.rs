mod document;
mod flashcard;
mod flashcard_id;
mod flashcard_set;
mod flashcard_set_id;
mod profile;
mod study_run;
mod study_session;
mod study_session_id;
mod user_id;

pub use document::{ContentType, DOCX_MIME, Document};
pub use flashcard::{Flashcard, FlashcardCandidate};
pub use flashcard_id::FlashcardId;
pub use flashcard_set::{FlashcardSet, FlashcardSetSummary, clean_description};
pub use flashcard_set_id::FlashcardSetId;
pub use profile::{AuthenticatedUser, Profile, Theme};
pub use study_run::{RunPhase, StudyMode, StudyRun, StudyRunError};
pub use study_session::{SessionSummary, StudySession, accuracy_percent};
pub use study_session_id::StudySessionId;
pub use user_id::UserId;
