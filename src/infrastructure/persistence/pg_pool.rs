use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::application::ports::RepositoryError;

const MAX_CONNECT_RETRIES: u32 = 5;

/// Connects with exponential backoff so the service can start before the database is up.
#[instrument(skip(url))]
pub async fn create_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let mut retries = MAX_CONNECT_RETRIES;
    let mut delay = Duration::from_millis(500);

    loop {
        match PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(url)
            .await
        {
            Ok(pool) => {
                info!("PostgreSQL connection pool established");
                return Ok(pool);
            }
            Err(e) if retries > 0 => {
                retries -= 1;
                warn!(
                    error = %e,
                    retries_left = retries,
                    delay_ms = delay.as_millis(),
                    "PostgreSQL connection failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(e) => {
                return Err(RepositoryError::ConnectionFailed(e.to_string()));
            }
        }
    }
}

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::migrate!()
        .run(pool)
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(format!("migration failed: {e}")))?;
    info!("Database migrations applied");
    Ok(())
}

/// Unique, foreign-key and check violations surface as constraint errors.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db)
            if db.is_unique_violation() || db.is_foreign_key_violation() || db.is_check_violation() =>
        {
            RepositoryError::ConstraintViolation(db.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::ConnectionFailed(error.to_string())
        }
        _ => RepositoryError::QueryFailed(error.to_string()),
    }
}
