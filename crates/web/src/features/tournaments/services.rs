use sqlx::PgPool;
use storage::{
    dto::{leaderboard::SeasonLeaderboardEntry, tournament::CreateTournamentRequest},
    error::Result,
    models::Tournament,
    repository::tournament::TournamentRepository,
    services::leaderboards,
};
use uuid::Uuid;

pub async fn list_tournaments(pool: &PgPool) -> Result<Vec<Tournament>> {
    TournamentRepository::new(pool).list().await
}

pub async fn create_tournament(pool: &PgPool, req: &CreateTournamentRequest) -> Result<Tournament> {
    TournamentRepository::new(pool).create(req).await
}

pub async fn add_matches(pool: &PgPool, id: Uuid, match_ids: &[Uuid]) -> Result<Tournament> {
    TournamentRepository::new(pool).add_matches(id, match_ids).await
}

pub async fn season_leaderboard(pool: &PgPool, id: Uuid) -> Result<Vec<SeasonLeaderboardEntry>> {
    leaderboards::season_leaderboard(pool, id).await
}
