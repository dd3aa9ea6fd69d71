use sqlx::PgPool;
use storage::{
    dto::{
        leaderboard::LeagueLeaderboardEntry,
        league::{CreateLeagueRequest, JoinLeagueRequest},
    },
    error::Result,
    models::League,
    repository::league::LeagueRepository,
    services::leaderboards,
};
use uuid::Uuid;

pub async fn create_league(pool: &PgPool, req: &CreateLeagueRequest) -> Result<League> {
    LeagueRepository::new(pool).create(req).await
}

pub async fn get_league_by_code(pool: &PgPool, code: &str) -> Result<League> {
    LeagueRepository::new(pool).find_by_code(code).await
}

pub async fn join_league(pool: &PgPool, req: &JoinLeagueRequest) -> Result<League> {
    LeagueRepository::new(pool).join(req).await
}

pub async fn list_leagues_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<League>> {
    LeagueRepository::new(pool).list_for_user(user_id).await
}

pub async fn league_leaderboard(
    pool: &PgPool,
    league_id: Uuid,
) -> Result<Vec<LeagueLeaderboardEntry>> {
    leaderboards::league_leaderboard(pool, league_id).await
}
