mod in_memory_repository;
mod pg_flashcard_repository;
mod pg_profile_repository;
mod pg_study_session_repository;

pub use in_memory_repository::{
    InMemoryFlashcardRepository, InMemoryProfileRepository, InMemoryStudySessionRepository,
};
pub use pg_flashcard_repository::PgFlashcardRepository;
pub use pg_profile_repository::PgProfileRepository;
pub use pg_study_session_repository::PgStudySessionRepository;
