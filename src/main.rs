use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use flashdeck::infrastructure::auth::{HttpIdentityProvider, StaticIdentityProvider};
use flashdeck::infrastructure::llm::{MockLlmClient, OpenAiClient};
use flashdeck::infrastructure::observability::{TracingConfig, init_tracing};
use flashdeck::infrastructure::persistence::{
    InMemoryFlashcardRepository, InMemoryProfileRepository, InMemoryStudySessionRepository,
    PgFlashcardRepository, PgProfileRepository, PgStudySessionRepository, create_pool,
    run_migrations,
};
use flashdeck::infrastructure::text_processing::CompositeFileLoader;
use flashdeck::presentation::{
    AppDependencies, AppState, Environment, ScaffoldConfig, Settings, create_router,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let scaffold_config = ScaffoldConfig::default();
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());

    let deps = if scaffold_config.enabled {
        tracing::warn!("SCAFFOLD MODE: in-memory storage, canned model output, static token");
        AppDependencies {
            file_loader,
            llm_client: Arc::new(
                MockLlmClient::new()
                    .with_delay(Duration::from_millis(scaffold_config.mock_response_delay_ms)),
            ),
            identity_provider: Arc::new(StaticIdentityProvider::single(
                scaffold_config.token.clone(),
                &scaffold_config.email,
            )),
            flashcard_repository: Arc::new(InMemoryFlashcardRepository::new()),
            study_session_repository: Arc::new(InMemoryStudySessionRepository::new()),
            profile_repository: Arc::new(InMemoryProfileRepository::new()),
        }
    } else {
        let pool = create_pool(&settings.database.url, settings.database.max_connections)
            .await
            .context("Failed to connect to PostgreSQL")?;
        run_migrations(&pool).await?;

        AppDependencies {
            file_loader,
            llm_client: Arc::new(OpenAiClient::new(&settings.llm)?),
            identity_provider: Arc::new(HttpIdentityProvider::new(&settings.auth)?),
            flashcard_repository: Arc::new(PgFlashcardRepository::new(pool.clone())),
            study_session_repository: Arc::new(PgStudySessionRepository::new(pool.clone())),
            profile_repository: Arc::new(PgProfileRepository::new(pool)),
        }
    };

    let state = AppState::new(deps, settings.upload.clone(), scaffold_config);
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server host or port")?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        environment = %environment,
        llm_provider = %settings.llm.provider,
        model = %settings.llm.chat_model,
        "Listening"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
