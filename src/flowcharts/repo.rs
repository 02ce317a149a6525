use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::UpdateFlowchart;

/// Flowchart record in the database. `data` is an opaque client payload.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flowchart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub data: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Flowchart {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        title: &str,
        description: Option<&str>,
        data: &serde_json::Value,
    ) -> Result<Flowchart, sqlx::Error> {
        sqlx::query_as::<_, Flowchart>(
            r#"
            INSERT INTO flowcharts (user_id, title, description, data)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, description, data, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(data)
        .fetch_one(db)
        .await
    }

    pub async fn list_by_owner(db: &PgPool, user_id: Uuid) -> Result<Vec<Flowchart>, sqlx::Error> {
        sqlx::query_as::<_, Flowchart>(
            r#"
            SELECT id, user_id, title, description, data, created_at, updated_at
            FROM flowcharts
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// `None` covers both an unknown id and a row owned by someone else.
    pub async fn find_by_id_and_owner(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Flowchart>, sqlx::Error> {
        sqlx::query_as::<_, Flowchart>(
            r#"
            SELECT id, user_id, title, description, data, created_at, updated_at
            FROM flowcharts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Applies only the fields present in the patch and bumps `updated_at`,
    /// all in one ownership-scoped statement.
    pub async fn update_fields(
        db: &PgPool,
        id: Uuid,
        user_id: Uuid,
        patch: &UpdateFlowchart,
    ) -> Result<Option<Flowchart>, sqlx::Error> {
        sqlx::query_as::<_, Flowchart>(
            r#"
            UPDATE flowcharts
            SET title = COALESCE($3, title),
                description = COALESCE($4, description),
                data = COALESCE($5, data),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, title, description, data, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.data.as_ref())
        .fetch_optional(db)
        .await
    }

    /// Returns false when nothing matched, so missing and non-owned rows
    /// answer alike.
    pub async fn delete(db: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM flowcharts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
