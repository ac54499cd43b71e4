//! Persistence gateway: one repository per table, each owning a cloned
//! handle to the shared connection pool. Repositories execute
//! parameterized statements and translate `sqlx` failures into
//! [`crate::error::StoreError`]; they carry no domain policy.

pub mod article_topics;
pub mod articles;
pub mod topics;
pub mod users;

pub use article_topics::ArticleTopicRepository;
pub use articles::ArticleRepository;
pub use topics::TopicRepository;
pub use users::UserRepository;
