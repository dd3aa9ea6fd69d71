use sqlx::PgPool;
use storage::{
    dto::player::CreatePlayerRequest, error::Result, models::Player,
    repository::player::PlayerRepository,
};
use uuid::Uuid;

pub async fn list_players(pool: &PgPool) -> Result<Vec<Player>> {
    PlayerRepository::new(pool).list().await
}

pub async fn get_player(pool: &PgPool, id: Uuid) -> Result<Player> {
    PlayerRepository::new(pool).find_by_id(id).await
}

pub async fn create_player(pool: &PgPool, req: &CreatePlayerRequest) -> Result<Player> {
    PlayerRepository::new(pool).create(req).await
}
