//! User repository.

use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::entity::NewUser;

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user and return its assigned ID.
    pub async fn create(&self, user: &NewUser) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from)?;

        Ok(id)
    }
}
