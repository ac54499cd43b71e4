//! Article↔topic link repository, including the relation reconciler.
//!
//! Links are never physically deleted. Removing a topic from an article
//! soft-deletes the link; re-adding the same pair later clears the
//! soft-delete timestamp on the existing row, preserving link history.
//! The `UNIQUE (news_article_id, topic_id)` constraint makes the upsert
//! well-defined and guarantees at most one active link per pair.

use sqlx::PgPool;

use crate::diff::reconcile_plan;
use crate::error::StoreError;

#[derive(Clone, Debug)]
pub struct ArticleTopicRepository {
    pool: PgPool,
}

impl ArticleTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Active (non-soft-deleted) topic IDs for an article, ordered.
    pub async fn active_topic_ids(&self, article_id: i32) -> Result<Vec<i32>, StoreError> {
        sqlx::query_scalar(
            r#"
            SELECT topic_id FROM news_topics
            WHERE news_article_id = $1 AND deleted_at IS NULL
            ORDER BY topic_id
            "#,
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from)
    }

    /// Attach topics to a freshly created article. Used by the create
    /// flow only; no conflicts are expected because the article is new.
    pub async fn attach_topics(&self, article_id: i32, topic_ids: &[i32]) -> Result<(), StoreError> {
        if topic_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO news_topics (news_article_id, topic_id)
            SELECT $1, UNNEST($2::int4[])
            "#,
        )
        .bind(article_id)
        .bind(topic_ids)
        .execute(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(())
    }

    /// Reconcile the article's active topic set to `desired` inside a
    /// single transaction: soft-delete links that fell out of the set,
    /// upsert every desired link (insert fresh, or clear the soft-delete
    /// timestamp under conflict). Either the whole reconciliation commits
    /// or none of it does; an early return rolls back on drop.
    pub async fn replace_article_topics(
        &self,
        article_id: i32,
        desired: &[i32],
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::from)?;

        let current: Vec<i32> = sqlx::query_scalar(
            r#"
            SELECT topic_id FROM news_topics
            WHERE news_article_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(article_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(StoreError::from)?;

        let plan = reconcile_plan(&current, desired);

        for topic_id in &plan.to_remove {
            sqlx::query(
                r#"
                UPDATE news_topics SET deleted_at = NOW()
                WHERE news_article_id = $1 AND topic_id = $2 AND deleted_at IS NULL
                "#,
            )
            .bind(article_id)
            .bind(topic_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::from)?;
        }

        for topic_id in &plan.to_upsert {
            sqlx::query(
                r#"
                INSERT INTO news_topics (news_article_id, topic_id)
                VALUES ($1, $2)
                ON CONFLICT (news_article_id, topic_id)
                DO UPDATE SET deleted_at = NULL
                "#,
            )
            .bind(article_id)
            .bind(topic_id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::from)?;
        }

        tx.commit().await.map_err(StoreError::from)
    }

    /// Soft-delete every active link of an article. Used by the article
    /// delete flow.
    pub async fn soft_delete_by_article(&self, article_id: i32) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE news_topics SET deleted_at = NOW()
            WHERE news_article_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(article_id)
        .execute(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(())
    }
}
