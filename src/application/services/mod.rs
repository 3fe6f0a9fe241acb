mod flashcard_generation_service;
mod flashcard_service;
mod profile_service;
mod prompt_builder;
mod response_parser;
mod service_error;
mod study_analytics;
mod study_session_service;
mod study_tracker;
mod text_normalizer;

pub use flashcard_generation_service::{
    FlashcardGenerationService, GeneratedSet, GenerationRequest,
};
pub use flashcard_service::{FlashcardService, FlashcardSetDetail};
pub use profile_service::{ProfileService, ProfileUpdate};
pub use prompt_builder::build_flashcard_prompt;
pub use response_parser::{ResponseParseError, parse_flashcard_response};
pub use service_error::ServiceError;
pub use study_analytics::{
    BestSession, StudyStats, best_session, compute_stats, overall_accuracy, recent_accuracy,
    study_streak,
};
pub use study_session_service::{HISTORY_LIMIT, StudyHistory, StudySessionService};
pub use study_tracker::{SaveOutcome, StudyTracker};
pub use text_normalizer::{MAX_NORMALIZED_CHARS, normalize_text};
