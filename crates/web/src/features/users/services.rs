use sqlx::PgPool;
use storage::{
    dto::user::CreateUserRequest, error::Result, models::AppUser,
    repository::user::UserRepository,
};
use uuid::Uuid;

pub async fn create_user(pool: &PgPool, req: &CreateUserRequest) -> Result<AppUser> {
    UserRepository::new(pool).create(req).await
}

pub async fn get_user(pool: &PgPool, id: Uuid) -> Result<AppUser> {
    UserRepository::new(pool).find_by_id(id).await
}
