use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{ProfileRepository, RepositoryError};
use crate::domain::{Profile, Theme, UserId};
use crate::infrastructure::persistence::pg_pool::map_sqlx_error;

pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: Uuid,
    display_name: Option<String>,
    theme: String,
    updated_at: DateTime<Utc>,
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn get(&self, user_id: UserId) -> Result<Option<Profile>, RepositoryError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT user_id, display_name, theme, updated_at FROM profiles WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        match row {
            Some(r) => {
                let theme = r
                    .theme
                    .parse::<Theme>()
                    .map_err(RepositoryError::CorruptRow)?;

                Ok(Some(Profile {
                    user_id: UserId::from_uuid(r.user_id),
                    display_name: r.display_name,
                    theme,
                    updated_at: r.updated_at,
                }))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn upsert(&self, profile: &Profile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, display_name, theme, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id)
            DO UPDATE SET display_name = EXCLUDED.display_name,
                          theme = EXCLUDED.theme,
                          updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.user_id.as_uuid())
        .bind(&profile.display_name)
        .bind(profile.theme.as_str())
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}
