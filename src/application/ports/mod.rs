mod file_loader;
mod flashcard_repository;
mod identity_provider;
mod llm_client;
mod profile_repository;
mod repository_error;
mod study_session_repository;

pub use file_loader::{FileLoader, FileLoaderError, MIN_EXTRACTED_CHARS};
pub use flashcard_repository::FlashcardRepository;
pub use identity_provider::{IdentityError, IdentityProvider};
pub use llm_client::{LlmClient, LlmClientError};
pub use profile_repository::ProfileRepository;
pub use repository_error::RepositoryError;
pub use study_session_repository::StudySessionRepository;
