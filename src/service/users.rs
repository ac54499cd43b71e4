//! User use cases.

use tracing::error;

use crate::error::{DomainError, StoreError};
use crate::models::entity::NewUser;
use crate::models::request::CreateUserRequest;
use crate::repository::UserRepository;

#[derive(Clone, Debug)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<i32, DomainError> {
        let new_user = NewUser {
            name: req.name,
            email: req.email,
        };

        self.users.create(&new_user).await.map_err(|err| match err {
            StoreError::Duplicate { field, value } => DomainError::DuplicateKey { field, value },
            other => {
                error!(error = %other, "failed to create user");
                DomainError::CreateFailed("user")
            }
        })
    }
}
