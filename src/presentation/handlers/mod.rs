mod documents;
mod dto;
mod error_response;
mod flashcard_sets;
mod flashcards;
mod health;
mod profile;
mod study_sessions;

pub use documents::generate_from_document_handler;
pub use error_response::{ErrorResponse, error_response, service_error_response, status_for};
pub use flashcard_sets::{delete_set_handler, get_set_handler, list_sets_handler, update_set_handler};
pub use flashcards::{create_card_handler, delete_card_handler, update_card_handler};
pub use health::health_handler;
pub use profile::{get_profile_handler, update_profile_handler};
pub use study_sessions::{record_session_handler, session_history_handler};
