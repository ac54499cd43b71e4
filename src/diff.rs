//! Partial-update diffing and relation reconciliation planning.
//!
//! Pure functions over in-memory snapshots: nothing here touches storage.
//! `diff_article` / `diff_topic` compare a partial-update request against
//! the current snapshot and produce the set of changed columns as typed
//! field tags plus the updated snapshot. `reconcile_plan` computes the
//! soft-delete/upsert plan for the article↔topic relation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::models::entity::{Article, ArticleStatus, Topic};
use crate::models::request::{UpdateArticleRequest, UpdateTopicRequest};

/// Columns of `news_articles` that a partial update may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleField {
    Title,
    Content,
    Summary,
    Slug,
    Status,
    PublishedAt,
}

impl ArticleField {
    pub const fn column(self) -> &'static str {
        match self {
            ArticleField::Title => "title",
            ArticleField::Content => "content",
            ArticleField::Summary => "summary",
            ArticleField::Slug => "slug",
            ArticleField::Status => "status",
            ArticleField::PublishedAt => "published_at",
        }
    }
}

/// Columns of `topics` that a partial update may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicField {
    Name,
    Description,
    Slug,
}

impl TopicField {
    pub const fn column(self) -> &'static str {
        match self {
            TopicField::Name => "name",
            TopicField::Description => "description",
            TopicField::Slug => "slug",
        }
    }
}

/// Compare a partial-update request against the current article snapshot.
///
/// Fields absent from the request are left untouched; present fields are
/// compared by value and recorded only when they differ. When the status
/// transitions to `published` and no publish timestamp exists yet, the
/// timestamp is stamped with `now`. An existing publish timestamp is never
/// cleared or re-stamped, whatever the status moves to.
pub fn diff_article(
    current: &Article,
    req: &UpdateArticleRequest,
    now: DateTime<Utc>,
) -> (Vec<ArticleField>, Article) {
    let mut changed = Vec::new();
    let mut updated = current.clone();

    if let Some(title) = &req.title {
        if *title != current.title {
            updated.title = title.clone();
            changed.push(ArticleField::Title);
        }
    }

    if let Some(content) = &req.content {
        if *content != current.content {
            updated.content = content.clone();
            changed.push(ArticleField::Content);
        }
    }

    if let Some(summary) = &req.summary {
        if current.summary.as_deref() != Some(summary.as_str()) {
            updated.summary = Some(summary.clone());
            changed.push(ArticleField::Summary);
        }
    }

    if let Some(slug) = &req.slug {
        if *slug != current.slug {
            updated.slug = slug.clone();
            changed.push(ArticleField::Slug);
        }
    }

    if let Some(status) = req.status {
        if status != current.status {
            updated.status = status;
            changed.push(ArticleField::Status);

            if status == ArticleStatus::Published && current.published_at.is_none() {
                updated.published_at = Some(now);
                changed.push(ArticleField::PublishedAt);
            }
        }
    }

    (changed, updated)
}

/// Compare a partial-update request against the current topic snapshot.
pub fn diff_topic(current: &Topic, req: &UpdateTopicRequest) -> (Vec<TopicField>, Topic) {
    let mut changed = Vec::new();
    let mut updated = current.clone();

    if let Some(name) = &req.name {
        if *name != current.name {
            updated.name = name.clone();
            changed.push(TopicField::Name);
        }
    }

    if let Some(description) = &req.description {
        if current.description.as_deref() != Some(description.as_str()) {
            updated.description = Some(description.clone());
            changed.push(TopicField::Description);
        }
    }

    if let Some(slug) = &req.slug {
        if *slug != current.slug {
            updated.slug = slug.clone();
            changed.push(TopicField::Slug);
        }
    }

    (changed, updated)
}

/// Whether the desired relation set differs from the current active set.
///
/// `None` means the request does not touch relations and never counts as a
/// change. `Some(vec![])` is an explicit "clear all" and is compared like
/// any other set. Comparison is order-insensitive.
pub fn topic_set_changed(current: &[i32], desired: Option<&[i32]>) -> bool {
    match desired {
        None => false,
        Some(desired) => normalize(current) != normalize(desired),
    }
}

fn normalize(ids: &[i32]) -> Vec<i32> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Soft-delete/upsert plan for moving the active relation set from
/// `current` to `desired`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan {
    /// Active links to soft-delete.
    pub to_remove: Vec<i32>,
    /// Every desired ID gets an upsert attempt; inserting fresh or
    /// clearing the soft-delete timestamp under conflict. Idempotent, so
    /// no tracking of which IDs previously existed is needed.
    pub to_upsert: Vec<i32>,
}

pub fn reconcile_plan(current: &[i32], desired: &[i32]) -> ReconcilePlan {
    let keep: HashSet<i32> = desired.iter().copied().collect();

    ReconcilePlan {
        to_remove: current.iter().copied().filter(|id| !keep.contains(id)).collect(),
        to_upsert: normalize(desired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article() -> Article {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Article {
            id: 7,
            title: "Original title".to_string(),
            content: "Original content body".to_string(),
            summary: Some("Original summary".to_string()),
            author_id: 3,
            slug: "original-title".to_string(),
            status: ArticleStatus::Draft,
            published_at: None,
            created_at: created,
            updated_at: created,
            deleted_at: None,
        }
    }

    fn topic() -> Topic {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        Topic {
            id: 2,
            name: "Old Name".to_string(),
            description: Some("Old Desc".to_string()),
            slug: "old-slug".to_string(),
            created_at: created,
            updated_at: created,
            deleted_at: None,
        }
    }

    #[test]
    fn identical_request_produces_no_changes() {
        let current = article();
        let req = UpdateArticleRequest {
            title: Some(current.title.clone()),
            content: Some(current.content.clone()),
            summary: current.summary.clone(),
            slug: Some(current.slug.clone()),
            status: Some(current.status),
            topic_ids: None,
        };

        let (changed, updated) = diff_article(&current, &req, Utc::now());
        assert!(changed.is_empty());
        assert_eq!(updated.title, current.title);
    }

    #[test]
    fn single_scalar_change_yields_exactly_one_field() {
        let current = article();
        let req = UpdateArticleRequest {
            title: Some("A different title".to_string()),
            ..Default::default()
        };

        let (changed, updated) = diff_article(&current, &req, Utc::now());
        assert_eq!(changed, vec![ArticleField::Title]);
        assert_eq!(updated.title, "A different title");
        assert_eq!(updated.content, current.content);
    }

    #[test]
    fn summary_absent_to_present_counts_as_change() {
        let mut current = article();
        current.summary = None;
        let req = UpdateArticleRequest {
            summary: Some("Fresh summary".to_string()),
            ..Default::default()
        };

        let (changed, updated) = diff_article(&current, &req, Utc::now());
        assert_eq!(changed, vec![ArticleField::Summary]);
        assert_eq!(updated.summary.as_deref(), Some("Fresh summary"));
    }

    #[test]
    fn publishing_stamps_timestamp_once() {
        let current = article();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let req = UpdateArticleRequest {
            status: Some(ArticleStatus::Published),
            ..Default::default()
        };

        let (changed, updated) = diff_article(&current, &req, now);
        assert!(changed.contains(&ArticleField::Status));
        assert!(changed.contains(&ArticleField::PublishedAt));
        assert_eq!(updated.published_at, Some(now));
    }

    #[test]
    fn unpublishing_keeps_the_publish_timestamp() {
        let mut current = article();
        let published = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        current.status = ArticleStatus::Published;
        current.published_at = Some(published);

        let req = UpdateArticleRequest {
            status: Some(ArticleStatus::Draft),
            ..Default::default()
        };

        let (changed, updated) = diff_article(&current, &req, Utc::now());
        assert_eq!(changed, vec![ArticleField::Status]);
        assert_eq!(updated.published_at, Some(published));
    }

    #[test]
    fn republishing_does_not_restamp() {
        let mut current = article();
        let published = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        current.published_at = Some(published);

        let req = UpdateArticleRequest {
            status: Some(ArticleStatus::Published),
            ..Default::default()
        };

        let (changed, updated) = diff_article(&current, &req, Utc::now());
        assert_eq!(changed, vec![ArticleField::Status]);
        assert_eq!(updated.published_at, Some(published));
    }

    #[test]
    fn topic_update_with_identical_name_changes_nothing() {
        let current = topic();
        let req = UpdateTopicRequest {
            name: Some("Old Name".to_string()),
            ..Default::default()
        };

        let (changed, _) = diff_topic(&current, &req);
        assert!(changed.is_empty());
    }

    #[test]
    fn topic_description_change_is_detected() {
        let current = topic();
        let req = UpdateTopicRequest {
            description: Some("New Desc".to_string()),
            ..Default::default()
        };

        let (changed, updated) = diff_topic(&current, &req);
        assert_eq!(changed, vec![TopicField::Description]);
        assert_eq!(updated.description.as_deref(), Some("New Desc"));
    }

    #[test]
    fn absent_topic_set_never_counts_as_change() {
        assert!(!topic_set_changed(&[1, 2], None));
    }

    #[test]
    fn empty_topic_set_means_clear_all() {
        assert!(topic_set_changed(&[1, 2], Some(&[])));
        assert!(!topic_set_changed(&[], Some(&[])));
    }

    #[test]
    fn topic_set_comparison_ignores_order() {
        assert!(!topic_set_changed(&[1, 2, 3], Some(&[3, 1, 2])));
        assert!(topic_set_changed(&[1, 2], Some(&[2, 3])));
    }

    #[test]
    fn plan_moves_one_two_to_two_three() {
        let plan = reconcile_plan(&[1, 2], &[2, 3]);
        assert_eq!(plan.to_remove, vec![1]);
        assert_eq!(plan.to_upsert, vec![2, 3]);
    }

    #[test]
    fn plan_is_idempotent_once_converged() {
        let first = reconcile_plan(&[1, 2], &[2, 3]);
        // After applying the first plan the active set is exactly {2, 3}.
        let second = reconcile_plan(&first.to_upsert, &[2, 3]);
        assert!(second.to_remove.is_empty());
        assert_eq!(second.to_upsert, vec![2, 3]);
    }

    #[test]
    fn plan_clears_everything_for_empty_desired_set() {
        let plan = reconcile_plan(&[4, 5], &[]);
        assert_eq!(plan.to_remove, vec![4, 5]);
        assert!(plan.to_upsert.is_empty());
    }
}
