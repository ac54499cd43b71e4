//! Topic use cases.

use tracing::error;

use crate::diff::diff_topic;
use crate::error::{DomainError, StoreError};
use crate::models::entity::{NewTopic, Topic};
use crate::models::request::{CreateTopicRequest, UpdateTopicRequest};
use crate::repository::TopicRepository;

#[derive(Clone, Debug)]
pub struct TopicService {
    topics: TopicRepository,
}

impl TopicService {
    pub fn new(topics: TopicRepository) -> Self {
        Self { topics }
    }

    pub async fn create_topic(&self, req: CreateTopicRequest) -> Result<i32, DomainError> {
        let new_topic = NewTopic {
            name: req.name,
            description: req.description,
            slug: req.slug,
        };

        self.topics.create(&new_topic).await.map_err(|err| match err {
            StoreError::Duplicate { field, value } => DomainError::DuplicateKey { field, value },
            other => {
                error!(error = %other, "failed to create topic");
                DomainError::CreateFailed("topic")
            }
        })
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>, DomainError> {
        self.topics.list().await.map_err(|err| {
            error!(error = %err, "failed to list topics");
            DomainError::FetchFailed("topics")
        })
    }

    /// Partial update by ID: fetch current snapshot, diff, apply only the
    /// changed columns. An identical request is a benign `NoFieldUpdate`.
    pub async fn update_topic(&self, id: i32, req: UpdateTopicRequest) -> Result<(), DomainError> {
        let current = self.topics.find_by_id(id).await.map_err(|err| match err {
            StoreError::NotFound => DomainError::NotFound("topic"),
            other => {
                error!(error = %other, id, "failed to fetch topic");
                DomainError::FetchFailed("topic")
            }
        })?;

        let (changed, updated) = diff_topic(&current, &req);
        if changed.is_empty() {
            return Err(DomainError::NoFieldUpdate);
        }

        self.topics
            .update_fields(&updated, &changed)
            .await
            .map_err(|err| match err {
                StoreError::Duplicate { field, value } => {
                    DomainError::DuplicateKey { field, value }
                }
                other => {
                    error!(error = %other, id, "failed to update topic");
                    DomainError::UpdateFailed("topic")
                }
            })
    }
}
