use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, StudySessionRepository};
use crate::domain::{FlashcardSetId, StudySession, StudySessionId, UserId};
use crate::infrastructure::persistence::pg_pool::map_sqlx_error;

pub struct PgStudySessionRepository {
    pool: PgPool,
}

impl PgStudySessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    set_id: Uuid,
    user_id: Uuid,
    cards_studied: i32,
    cards_correct: i32,
    session_date: DateTime<Utc>,
}

impl TryFrom<SessionRow> for StudySession {
    type Error = RepositoryError;

    fn try_from(r: SessionRow) -> Result<Self, Self::Error> {
        let count = |value: i32, column: &str| {
            u32::try_from(value)
                .map_err(|_| RepositoryError::CorruptRow(format!("{column} = {value}")))
        };

        Ok(StudySession {
            id: StudySessionId::from_uuid(r.id),
            set_id: FlashcardSetId::from_uuid(r.set_id),
            owner: UserId::from_uuid(r.user_id),
            cards_studied: count(r.cards_studied, "cards_studied")?,
            cards_correct: count(r.cards_correct, "cards_correct")?,
            session_date: r.session_date,
        })
    }
}

fn to_column(value: u32, column: &str) -> Result<i32, RepositoryError> {
    i32::try_from(value)
        .map_err(|_| RepositoryError::ConstraintViolation(format!("{column} out of range")))
}

#[async_trait]
impl StudySessionRepository for PgStudySessionRepository {
    #[instrument(skip(self, session), fields(set_id = %session.set_id, session_id = %session.id))]
    async fn create(&self, session: &StudySession) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO study_sessions (id, set_id, user_id, cards_studied, cards_correct, session_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id.as_uuid())
        .bind(session.set_id.as_uuid())
        .bind(session.owner.as_uuid())
        .bind(to_column(session.cards_studied, "cards_studied")?)
        .bind(to_column(session.cards_correct, "cards_correct")?)
        .bind(session.session_date)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self), fields(set_id = %set_id))]
    async fn list_for_set(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<Vec<StudySession>, RepositoryError> {
        let rows = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT id, set_id, user_id, cards_studied, cards_correct, session_date
            FROM study_sessions
            WHERE set_id = $1 AND user_id = $2
            ORDER BY session_date DESC
            "#,
        )
        .bind(set_id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(StudySession::try_from).collect()
    }
}
