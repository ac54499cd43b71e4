//! News article repository.

use sqlx::PgPool;

use crate::diff::ArticleField;
use crate::error::StoreError;
use crate::models::entity::{Article, ArticleListRow, NewArticle, PublishedArticle};
use crate::models::request::ArticleFilter;

#[derive(Clone, Debug)]
pub struct ArticleRepository {
    pool: PgPool,
}

impl ArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new article and return its assigned ID.
    pub async fn create(&self, article: &NewArticle) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO news_articles
                (title, content, summary, author_id, slug, status, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.summary)
        .bind(article.author_id)
        .bind(&article.slug)
        .bind(article.status)
        .bind(article.published_at)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(id)
    }

    /// Fetch the current snapshot of an active article by slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Article, StoreError> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, summary, author_id, slug, status,
                   published_at, created_at, updated_at, deleted_at
            FROM news_articles
            WHERE slug = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)
    }

    /// Public read view: active article with author name and active topic
    /// names resolved.
    pub async fn find_view_by_slug(&self, slug: &str) -> Result<PublishedArticle, StoreError> {
        sqlx::query_as::<_, PublishedArticle>(
            r#"
            SELECT
                a.id,
                a.title,
                a.content,
                a.slug,
                a.published_at,
                u.name AS author_name,
                COALESCE(
                    ARRAY_AGG(t.name ORDER BY t.name) FILTER (WHERE t.name IS NOT NULL),
                    '{}'
                ) AS topics
            FROM news_articles a
            INNER JOIN users u ON u.id = a.author_id
            LEFT JOIN news_topics nt ON nt.news_article_id = a.id AND nt.deleted_at IS NULL
            LEFT JOIN topics t ON t.id = nt.topic_id AND t.deleted_at IS NULL
            WHERE a.slug = $1 AND a.deleted_at IS NULL
            GROUP BY a.id, u.name
            "#,
        )
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)
    }

    /// List active articles, optionally filtered by status and topic.
    pub async fn list(&self, filter: &ArticleFilter) -> Result<Vec<ArticleListRow>, StoreError> {
        let mut sql = String::from(
            r#"
            SELECT
                na.id,
                na.title,
                na.summary,
                na.author_id,
                na.slug,
                na.status,
                na.published_at,
                na.created_at,
                COALESCE(
                    ARRAY_AGG(nt.topic_id) FILTER (WHERE nt.topic_id IS NOT NULL),
                    '{}'
                ) AS topic_ids
            FROM news_articles na
            LEFT JOIN news_topics nt
                ON na.id = nt.news_article_id AND nt.deleted_at IS NULL
            WHERE na.deleted_at IS NULL
            "#,
        );

        let mut param = 1;
        if filter.status.is_some() {
            sql.push_str(&format!(" AND na.status = ${param}"));
            param += 1;
        }
        if filter.topic_id.is_some() {
            sql.push_str(&format!(" AND nt.topic_id = ${param}"));
        }
        sql.push_str(" GROUP BY na.id ORDER BY na.created_at DESC");

        let mut query = sqlx::query_as::<_, ArticleListRow>(&sql);
        if let Some(status) = filter.status {
            query = query.bind(status);
        }
        if let Some(topic_id) = filter.topic_id {
            query = query.bind(topic_id);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from)
    }

    /// Apply the changed columns of an updated snapshot. The SET clause is
    /// built from the typed field tags; `updated_at` is always refreshed.
    pub async fn update_fields(
        &self,
        article: &Article,
        fields: &[ArticleField],
    ) -> Result<(), StoreError> {
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
            "UPDATE news_articles SET {} WHERE id = ${}",
            set_clauses.join(", "),
            fields.len() + 1,
        );

        let mut query = sqlx::query(&sql);
        for field in fields {
            query = match field {
                ArticleField::Title => query.bind(&article.title),
                ArticleField::Content => query.bind(&article.content),
                ArticleField::Summary => query.bind(&article.summary),
                ArticleField::Slug => query.bind(&article.slug),
                ArticleField::Status => query.bind(article.status),
                ArticleField::PublishedAt => query.bind(article.published_at),
            };
        }

        query
            .bind(article.id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from)?;

        Ok(())
    }

    /// Soft-delete an active article. No-op if the slug is already gone.
    pub async fn soft_delete_by_slug(&self, slug: &str) -> Result<(), StoreError> {
        sqlx::query(
            "UPDATE news_articles SET deleted_at = NOW() WHERE slug = $1 AND deleted_at IS NULL",
        )
        .bind(slug)
        .execute(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(())
    }
}
