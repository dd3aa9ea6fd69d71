use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::CreateUserRequest;
use crate::error::{Result, StorageError};
use crate::models::AppUser;

/// Repository for user identity records
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Register a user identity
    pub async fn create(&self, req: &CreateUserRequest) -> Result<AppUser> {
        let user = sqlx::query_as::<_, AppUser>(
            r#"
            INSERT INTO app_users (username, email)
            VALUES ($1, $2)
            RETURNING user_id, username, email, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::Database(e);
            if err.is_unique_violation() {
                StorageError::ConstraintViolation(
                    "Username or email already registered".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(user)
    }

    /// Get a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<AppUser> {
        let user = sqlx::query_as::<_, AppUser>(
            r#"
            SELECT user_id, username, email, created_at
            FROM app_users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }
}
