use sqlx::PgPool;
use storage::{
    dto::squad::CreateSquadRequest, error::Result, models::Squad,
    repository::squad::SquadRepository, scoring::ScoringRules,
};
use uuid::Uuid;

pub async fn create_squad(
    pool: &PgPool,
    rules: &ScoringRules,
    req: &CreateSquadRequest,
) -> Result<Squad> {
    SquadRepository::new(pool).create(rules, req).await
}

pub async fn get_squad_for_match_and_user(
    pool: &PgPool,
    match_id: Uuid,
    user_id: Uuid,
) -> Result<Squad> {
    SquadRepository::new(pool)
        .find_by_match_and_user(match_id, user_id)
        .await
}

pub async fn list_squads_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Squad>> {
    SquadRepository::new(pool).list_by_user(user_id).await
}
