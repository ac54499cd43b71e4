//! Topic repository.

use sqlx::PgPool;

use crate::diff::TopicField;
use crate::error::StoreError;
use crate::models::entity::{NewTopic, Topic};

#[derive(Clone, Debug)]
pub struct TopicRepository {
    pool: PgPool,
}

impl TopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new topic and return its assigned ID.
    pub async fn create(&self, topic: &NewTopic) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO topics (name, description, slug) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&topic.name)
        .bind(&topic.description)
        .bind(&topic.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(id)
    }

    /// List active topics.
    pub async fn list(&self) -> Result<Vec<Topic>, StoreError> {
        sqlx::query_as::<_, Topic>(
            r#"
            SELECT id, name, description, slug, created_at, updated_at, deleted_at
            FROM topics
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)
    }

    /// Fetch the current snapshot of an active topic.
    pub async fn find_by_id(&self, id: i32) -> Result<Topic, StoreError> {
        sqlx::query_as::<_, Topic>(
            r#"
            SELECT id, name, description, slug, created_at, updated_at, deleted_at
            FROM topics
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)
    }

    /// Apply the changed columns of an updated snapshot; `updated_at` is
    /// always refreshed.
    pub async fn update_fields(&self, topic: &Topic, fields: &[TopicField]) -> Result<(), StoreError> {
        if fields.is_empty() {
            return Ok(());
        }

        let mut set_clauses: Vec<String> = fields
            .iter()
            .enumerate()
            .map(|(i, field)| format!("{} = ${}", field.column(), i + 1))
            .collect();
        set_clauses.push("updated_at = NOW()".to_string());

        let sql = format!(
            "UPDATE topics SET {} WHERE id = ${}",
            set_clauses.join(", "),
            fields.len() + 1,
        );

        let mut query = sqlx::query(&sql);
        for field in fields {
            query = match field {
                TopicField::Name => query.bind(&topic.name),
                TopicField::Description => query.bind(&topic.description),
                TopicField::Slug => query.bind(&topic.slug),
            };
        }

        query
            .bind(topic.id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(())
    }
}
