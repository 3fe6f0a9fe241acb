use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{FlashcardRepository, RepositoryError};
use crate::domain::{
    Flashcard, FlashcardId, FlashcardSet, FlashcardSetId, FlashcardSetSummary, UserId,
};
use crate::infrastructure::persistence::pg_pool::map_sqlx_error;

pub struct PgFlashcardRepository {
    pool: PgPool,
}

impl PgFlashcardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SetRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SetRow> for FlashcardSet {
    fn from(r: SetRow) -> Self {
        FlashcardSet {
            id: FlashcardSetId::from_uuid(r.id),
            owner: UserId::from_uuid(r.user_id),
            title: r.title,
            description: r.description,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SetSummaryRow {
    #[sqlx(flatten)]
    set: SetRow,
    card_count: i64,
}

#[derive(sqlx::FromRow)]
struct CardRow {
    id: Uuid,
    set_id: Uuid,
    front_text: String,
    back_text: String,
    position: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CardRow> for Flashcard {
    fn from(r: CardRow) -> Self {
        Flashcard {
            id: FlashcardId::from_uuid(r.id),
            set_id: FlashcardSetId::from_uuid(r.set_id),
            front: r.front_text,
            back: r.back_text,
            position: r.position,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[async_trait]
impl FlashcardRepository for PgFlashcardRepository {
    #[instrument(skip(self, set), fields(set_id = %set.id))]
    async fn create_set(&self, set: &FlashcardSet) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO flashcard_sets (id, user_id, title, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(set.id.as_uuid())
        .bind(set.owner.as_uuid())
        .bind(&set.title)
        .bind(&set.description)
        .bind(set.created_at)
        .bind(set.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    #[instrument(skip(self, cards), fields(card_count = cards.len()))]
    async fn insert_cards(&self, cards: &[Flashcard]) -> Result<(), RepositoryError> {
        if cards.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        for card in cards {
            sqlx::query(
                r#"
                INSERT INTO flashcards (id, set_id, front_text, back_text, position, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(card.id.as_uuid())
            .bind(card.set_id.as_uuid())
            .bind(&card.front)
            .bind(&card.back)
            .bind(card.position)
            .bind(card.created_at)
            .bind(card.updated_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    #[instrument(skip(self), fields(set_id = %id))]
    async fn delete_set(&self, owner: UserId, id: FlashcardSetId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM flashcard_sets WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), fields(set_id = %id))]
    async fn get_set(
        &self,
        owner: UserId,
        id: FlashcardSetId,
    ) -> Result<Option<FlashcardSet>, RepositoryError> {
        let row = sqlx::query_as::<_, SetRow>(
            r#"
            SELECT id, user_id, title, description, created_at, updated_at
            FROM flashcard_sets
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(FlashcardSet::from))
    }

    #[instrument(skip(self), fields(owner = %owner))]
    async fn list_sets(&self, owner: UserId) -> Result<Vec<FlashcardSetSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, SetSummaryRow>(
            r#"
            SELECT s.id, s.user_id, s.title, s.description, s.created_at, s.updated_at,
                   COUNT(c.id) AS card_count
            FROM flashcard_sets s
            LEFT JOIN flashcards c ON c.set_id = s.id
            WHERE s.user_id = $1
            GROUP BY s.id
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|r| {
                let card_count = usize::try_from(r.card_count)
                    .map_err(|e| RepositoryError::CorruptRow(format!("card_count: {e}")))?;
                Ok(FlashcardSetSummary {
                    set: r.set.into(),
                    card_count,
                })
            })
            .collect()
    }

    #[instrument(skip(self, title, description), fields(set_id = %id))]
    async fn update_set(
        &self,
        owner: UserId,
        id: FlashcardSetId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<FlashcardSet>, RepositoryError> {
        let row = sqlx::query_as::<_, SetRow>(
            r#"
            UPDATE flashcard_sets
            SET title = $1, description = $2, updated_at = $3
            WHERE id = $4 AND user_id = $5
            RETURNING id, user_id, title, description, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(Utc::now())
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(FlashcardSet::from))
    }

    #[instrument(skip(self), fields(set_id = %set_id))]
    async fn list_cards(
        &self,
        owner: UserId,
        set_id: FlashcardSetId,
    ) -> Result<Vec<Flashcard>, RepositoryError> {
        let rows = sqlx::query_as::<_, CardRow>(
            r#"
            SELECT c.id, c.set_id, c.front_text, c.back_text, c.position, c.created_at, c.updated_at
            FROM flashcards c
            JOIN flashcard_sets s ON s.id = c.set_id
            WHERE c.set_id = $1 AND s.user_id = $2
            ORDER BY c.position ASC, c.created_at ASC
            "#,
        )
        .bind(set_id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Flashcard::from).collect())
    }

    #[instrument(skip(self, front, back), fields(card_id = %id))]
    async fn update_card(
        &self,
        owner: UserId,
        id: FlashcardId,
        front: &str,
        back: &str,
    ) -> Result<Option<Flashcard>, RepositoryError> {
        let row = sqlx::query_as::<_, CardRow>(
            r#"
            UPDATE flashcards c
            SET front_text = $1, back_text = $2, updated_at = $3
            FROM flashcard_sets s
            WHERE c.id = $4 AND s.id = c.set_id AND s.user_id = $5
            RETURNING c.id, c.set_id, c.front_text, c.back_text, c.position, c.created_at, c.updated_at
            "#,
        )
        .bind(front)
        .bind(back)
        .bind(Utc::now())
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Flashcard::from))
    }

    #[instrument(skip(self), fields(card_id = %id))]
    async fn delete_card(&self, owner: UserId, id: FlashcardId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM flashcards c
            USING flashcard_sets s
            WHERE c.id = $1 AND s.id = c.set_id AND s.user_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
