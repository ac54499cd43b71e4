//! Request payloads.
//!
//! Update requests are partial: every field is optional and absence means
//! "leave unchanged". For `topic_ids`, `None` means "do not touch the
//! relation set" while `Some(vec![])` means "clear all topics" — the two
//! are never conflated.
//!
//! `validate` covers shape and range only; semantic checks (diffing,
//! relation-set comparison) live in the service layer.

use serde::Deserialize;

use crate::models::entity::ArticleStatus;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub author_id: i32,
    pub slug: String,
    pub status: Option<ArticleStatus>,
    pub topic_ids: Option<Vec<i32>>,
}

impl CreateArticleRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_len("title", &self.title, 5, 255)?;
        if self.content.len() < 10 {
            return Err("content must be at least 10 characters".to_string());
        }
        if let Some(summary) = &self.summary {
            check_max("summary", summary, 500)?;
        }
        if self.author_id < 1 {
            return Err("author_id must be positive".to_string());
        }
        check_len("slug", &self.slug, 5, 255)?;
        check_ids(self.topic_ids.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub slug: Option<String>,
    pub status: Option<ArticleStatus>,
    pub topic_ids: Option<Vec<i32>>,
}

impl UpdateArticleRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            check_len("title", title, 5, 255)?;
        }
        if let Some(content) = &self.content {
            if content.len() < 10 {
                return Err("content must be at least 10 characters".to_string());
            }
        }
        if let Some(summary) = &self.summary {
            check_max("summary", summary, 500)?;
        }
        if let Some(slug) = &self.slug {
            check_len("slug", slug, 5, 255)?;
        }
        check_ids(self.topic_ids.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopicRequest {
    pub name: String,
    pub description: Option<String>,
    pub slug: String,
}

impl CreateTopicRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_len("name", &self.name, 2, 100)?;
        if let Some(description) = &self.description {
            check_max("description", description, 1000)?;
        }
        check_len("slug", &self.slug, 2, 100)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTopicRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
}

impl UpdateTopicRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            check_len("name", name, 2, 100)?;
        }
        if let Some(description) = &self.description {
            check_max("description", description, 1000)?;
        }
        if let Some(slug) = &self.slug {
            check_len("slug", slug, 2, 100)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        check_len("name", &self.name, 2, 100)?;
        check_max("email", &self.email, 255)?;
        if !self.email.contains('@') {
            return Err("email is not a valid address".to_string());
        }
        Ok(())
    }
}

/// Optional listing filters for articles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub topic_id: Option<i32>,
}

fn check_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    if value.len() < min || value.len() > max {
        return Err(format!("{field} must be between {min} and {max} characters"));
    }
    Ok(())
}

fn check_max(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.len() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}

fn check_ids(ids: Option<&[i32]>) -> Result<(), String> {
    if let Some(ids) = ids {
        if ids.iter().any(|id| *id < 1) {
            return Err("topic_ids must be positive".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_article_rejects_short_title() {
        let req = CreateArticleRequest {
            title: "abc".to_string(),
            content: "long enough content".to_string(),
            summary: None,
            author_id: 1,
            slug: "abc-def".to_string(),
            status: None,
            topic_ids: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_article_with_no_fields_is_valid_shape() {
        // An empty partial update is well-formed; the service decides it
        // is a NoFieldUpdate.
        assert!(UpdateArticleRequest::default().validate().is_ok());
    }

    #[test]
    fn topic_ids_must_be_positive() {
        let req = UpdateArticleRequest {
            topic_ids: Some(vec![1, 0]),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn user_email_must_contain_at_sign() {
        let req = CreateUserRequest {
            name: "Jane".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
