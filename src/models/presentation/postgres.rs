use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use super::store::PresentationStore;
use super::types::Presentation;
use crate::errors::AppError;
use crate::models::slide::Slide;

/// Presentations as rows of the `presentations` table, slides embedded as JSONB.
#[derive(Debug, Clone)]
pub struct PgPresentationStore {
    pool: PgPool,
}

impl PgPresentationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct Row {
    id: Uuid,
    title: String,
    topic: String,
    slides: Json<Vec<Slide>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<Row> for Presentation {
    fn from(row: Row) -> Self {
        Presentation {
            id: row.id,
            title: row.title,
            topic: row.topic,
            slides: row.slides.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const SELECT_PRESENTATION: &str =
    "SELECT id, title, topic, slides, created_at, updated_at FROM presentations";

#[async_trait]
impl PresentationStore for PgPresentationStore {
    async fn insert(&self, presentation: &Presentation) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO presentations (id, title, topic, slides, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(presentation.id)
        .bind(&presentation.title)
        .bind(&presentation.topic)
        .bind(Json(&presentation.slides))
        .bind(presentation.created_at)
        .bind(presentation.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Presentation>, AppError> {
        let rows = sqlx::query_as::<_, Row>(&format!(
            "{SELECT_PRESENTATION} ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Presentation::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Presentation>, AppError> {
        let row = sqlx::query_as::<_, Row>(&format!("{SELECT_PRESENTATION} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Presentation::from))
    }

    async fn replace(&self, presentation: &Presentation) -> Result<bool, AppError> {
        // Single statement: the row is swapped as a whole, never field by field.
        let result = sqlx::query(
            "UPDATE presentations \
             SET title = $2, topic = $3, slides = $4, updated_at = $5 \
             WHERE id = $1",
        )
        .bind(presentation.id)
        .bind(&presentation.title)
        .bind(&presentation.topic)
        .bind(Json(&presentation.slides))
        .bind(presentation.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM presentations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
