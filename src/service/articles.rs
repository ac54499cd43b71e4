//! Article use cases.

use chrono::Utc;
use tracing::error;

use crate::diff::{diff_article, topic_set_changed};
use crate::error::{DomainError, StoreError};
use crate::models::entity::{
    ArticleListRow, ArticleStatus, NewArticle, PublishedArticle,
};
use crate::models::request::{ArticleFilter, CreateArticleRequest, UpdateArticleRequest};
use crate::repository::{ArticleRepository, ArticleTopicRepository};

#[derive(Clone, Debug)]
pub struct ArticleService {
    articles: ArticleRepository,
    article_topics: ArticleTopicRepository,
}

impl ArticleService {
    pub fn new(articles: ArticleRepository, article_topics: ArticleTopicRepository) -> Self {
        Self {
            articles,
            article_topics,
        }
    }

    /// Create an article, defaulting to draft. Creating directly as
    /// published stamps the publish timestamp. Topic attachment is a
    /// second, non-transactional step: if it fails the article stays
    /// created and the caller is told via `RelationUpdateFailed`.
    pub async fn create_article(&self, req: CreateArticleRequest) -> Result<i32, DomainError> {
        let topic_ids = req.topic_ids.clone();
        let new_article = build_new_article(req, Utc::now());

        let id = self.articles.create(&new_article).await.map_err(|err| match err {
            StoreError::Duplicate { field, value } => DomainError::DuplicateKey { field, value },
            other => {
                error!(error = %other, "failed to create article");
                DomainError::CreateFailed("article")
            }
        })?;

        if let Some(topic_ids) = topic_ids.as_deref() {
            self.article_topics
                .attach_topics(id, topic_ids)
                .await
                .map_err(|err| {
                    error!(error = %err, article_id = id, "failed to attach topics");
                    DomainError::RelationUpdateFailed
                })?;
        }

        Ok(id)
    }

    /// List active articles with optional status/topic filters.
    pub async fn list_articles(
        &self,
        filter: ArticleFilter,
    ) -> Result<Vec<ArticleListRow>, DomainError> {
        self.articles.list(&filter).await.map_err(|err| {
            error!(error = %err, "failed to list articles");
            DomainError::FetchFailed("articles")
        })
    }

    /// Public read view by slug.
    pub async fn get_article_by_slug(&self, slug: &str) -> Result<PublishedArticle, DomainError> {
        self.articles
            .find_view_by_slug(slug)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => DomainError::NotFound("article"),
                other => {
                    error!(error = %other, slug, "failed to fetch article");
                    DomainError::FetchFailed("article")
                }
            })
    }

    /// Partial update by slug.
    ///
    /// Fetches the current snapshot and active topic set, diffs the
    /// request against them, and returns `NoFieldUpdate` when nothing at
    /// all changed. Field changes and relation reconciliation are applied
    /// as separate steps with distinct failure kinds, so callers can tell
    /// field-update success from relation-update failure.
    pub async fn update_article_by_slug(
        &self,
        slug: &str,
        req: UpdateArticleRequest,
    ) -> Result<(), DomainError> {
        let current = self.articles.find_by_slug(slug).await.map_err(|err| match err {
            StoreError::NotFound => DomainError::NotFound("article"),
            other => {
                error!(error = %other, slug, "failed to fetch article");
                DomainError::FetchFailed("article")
            }
        })?;

        let current_topics = self
            .article_topics
            .active_topic_ids(current.id)
            .await
            .map_err(|err| {
                error!(error = %err, slug, "failed to fetch article topics");
                DomainError::FetchFailed("article")
            })?;

        let (changed, updated) = diff_article(&current, &req, Utc::now());
        let topics_changed = topic_set_changed(&current_topics, req.topic_ids.as_deref());

        if changed.is_empty() && !topics_changed {
            return Err(DomainError::NoFieldUpdate);
        }

        if !changed.is_empty() {
            self.articles
                .update_fields(&updated, &changed)
                .await
                .map_err(|err| match err {
                    StoreError::Duplicate { field, value } => {
                        DomainError::DuplicateKey { field, value }
                    }
                    other => {
                        error!(error = %other, slug, "failed to update article fields");
                        DomainError::UpdateFailed("article")
                    }
                })?;
        }

        // Only an explicitly supplied topic set touches relations; None
        // leaves them alone.
        if let Some(desired) = req.topic_ids.as_deref() {
            self.article_topics
                .replace_article_topics(current.id, desired)
                .await
                .map_err(|err| {
                    error!(error = %err, slug, "failed to reconcile article topics");
                    DomainError::RelationUpdateFailed
                })?;
        }

        Ok(())
    }

    /// Soft-delete by slug, then soft-delete the article's links. The two
    /// steps are not joined in a transaction: a link-deletion failure
    /// after the article is gone surfaces as `RelationDeleteFailed`.
    pub async fn delete_article_by_slug(&self, slug: &str) -> Result<(), DomainError> {
        let current = self.articles.find_by_slug(slug).await.map_err(|err| match err {
            StoreError::NotFound => DomainError::NotFound("article"),
            other => {
                error!(error = %other, slug, "failed to fetch article");
                DomainError::FetchFailed("article")
            }
        })?;

        self.articles.soft_delete_by_slug(slug).await.map_err(|err| {
            error!(error = %err, slug, "failed to delete article");
            DomainError::DeleteFailed("article")
        })?;

        self.article_topics
            .soft_delete_by_article(current.id)
            .await
            .map_err(|err| {
                error!(error = %err, slug, "failed to delete article topics");
                DomainError::RelationDeleteFailed
            })?;

        Ok(())
    }
}

/// Build the insert row from a create request. Status defaults to draft;
/// creating directly as published stamps the publish timestamp.
fn build_new_article(req: CreateArticleRequest, now: chrono::DateTime<Utc>) -> NewArticle {
    let status = req.status.unwrap_or_default();
    let published_at = (status == ArticleStatus::Published).then_some(now);

    NewArticle {
        title: req.title,
        content: req.content,
        summary: req.summary,
        author_id: req.author_id,
        slug: req.slug,
        status,
        published_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreateArticleRequest {
        CreateArticleRequest {
            title: "A valid title".to_string(),
            content: "content long enough to pass".to_string(),
            summary: None,
            author_id: 1,
            slug: "a-valid-title".to_string(),
            status: None,
            topic_ids: None,
        }
    }

    #[test]
    fn create_defaults_to_draft_without_publish_timestamp() {
        let article = build_new_article(create_request(), Utc::now());
        assert_eq!(article.status, ArticleStatus::Draft);
        assert!(article.published_at.is_none());
    }

    #[test]
    fn creating_as_published_stamps_the_timestamp() {
        let now = Utc::now();
        let mut req = create_request();
        req.status = Some(ArticleStatus::Published);

        let article = build_new_article(req, now);
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.published_at, Some(now));
    }
}
