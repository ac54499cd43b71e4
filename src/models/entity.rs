//! Persisted entities and read views.
//!
//! Soft deletes follow the nullable-timestamp convention: `deleted_at`
//! unset means the row is active. Use the `is_active` predicates rather
//! than checking the field inline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Article lifecycle status, matching the DB check constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Deleted,
}

/// A news article row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub slug: String,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Column values for inserting a new article. Identity and timestamps are
/// assigned by the database.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub slug: String,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

/// Listing view: one row per active article with its active topic IDs.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArticleListRow {
    pub id: i32,
    pub title: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub slug: String,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub topic_ids: Vec<i32>,
}

/// Public read view of a single article, with author name and topic names
/// resolved.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PublishedArticle {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: String,
    pub topics: Vec<String>,
}

/// A topic row as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Topic {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Topic {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Column values for inserting a new topic.
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
}

/// An author. Foreign-key target for articles.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Column values for inserting a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}
