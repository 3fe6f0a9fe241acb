use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FlashcardRepository, IdentityProvider, LlmClient, ProfileRepository,
    StudySessionRepository,
};
use crate::application::services::{
    FlashcardGenerationService, FlashcardService, ProfileService, StudySessionService,
};
use crate::presentation::config::{ScaffoldConfig, UploadSettings};

/// Adapters the services are built from. Postgres or in-memory, real or mock.
pub struct AppDependencies {
    pub file_loader: Arc<dyn FileLoader>,
    pub llm_client: Arc<dyn LlmClient>,
    pub identity_provider: Arc<dyn IdentityProvider>,
    pub flashcard_repository: Arc<dyn FlashcardRepository>,
    pub study_session_repository: Arc<dyn StudySessionRepository>,
    pub profile_repository: Arc<dyn ProfileRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<FlashcardGenerationService>,
    pub flashcard_service: Arc<FlashcardService>,
    pub study_session_service: Arc<StudySessionService>,
    pub profile_service: Arc<ProfileService>,
    pub identity_provider: Arc<dyn IdentityProvider>,
    pub upload: UploadSettings,
    pub scaffold_config: ScaffoldConfig,
}

impl AppState {
    pub fn new(
        deps: AppDependencies,
        upload: UploadSettings,
        scaffold_config: ScaffoldConfig,
    ) -> Self {
        let generation_service = Arc::new(FlashcardGenerationService::new(
            deps.file_loader,
            deps.llm_client,
            Arc::clone(&deps.flashcard_repository),
        ));
        let flashcard_service = Arc::new(FlashcardService::new(Arc::clone(
            &deps.flashcard_repository,
        )));
        let study_session_service = Arc::new(StudySessionService::new(
            deps.study_session_repository,
            deps.flashcard_repository,
        ));
        let profile_service = Arc::new(ProfileService::new(deps.profile_repository));

        Self {
            generation_service,
            flashcard_service,
            study_session_service,
            profile_service,
            identity_provider: deps.identity_provider,
            upload,
            scaffold_config,
        }
    }
}
