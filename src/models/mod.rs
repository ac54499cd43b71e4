//! Domain models: persisted entities, request payloads, and read views.

pub mod entity;
pub mod request;

pub use entity::{
    Article, ArticleListRow, ArticleStatus, NewArticle, NewTopic, NewUser, PublishedArticle,
    Topic, User,
};
pub use request::{
    ArticleFilter, CreateArticleRequest, CreateTopicRequest, CreateUserRequest,
    UpdateArticleRequest, UpdateTopicRequest,
};
