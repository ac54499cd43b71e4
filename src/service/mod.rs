//! Use-case layer: orchestrates fetch → diff → apply → reconcile per
//! operation and maps storage failures onto the domain error taxonomy
//! exactly once.

pub mod articles;
pub mod topics;
pub mod users;

pub use articles::ArticleService;
pub use topics::TopicService;
pub use users::UserService;
