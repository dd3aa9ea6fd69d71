use sqlx::PgPool;
use storage::{
    dto::{
        leaderboard::MatchLeaderboardEntry,
        matches::{
            CreateMatchRequest, PlayerStatLine, ScoringRunSummary, UpdateMatchStatusRequest,
        },
    },
    error::Result,
    models::{Match, MatchPerformance},
    repository::{matches::MatchRepository, performance::PerformanceRepository},
    scoring::ScoringRules,
    services::{leaderboards, scoring_run},
};
use uuid::Uuid;

pub async fn list_matches(pool: &PgPool) -> Result<Vec<Match>> {
    MatchRepository::new(pool).list().await
}

pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<Match> {
    MatchRepository::new(pool).find_by_id(id).await
}

pub async fn create_match(pool: &PgPool, req: &CreateMatchRequest) -> Result<Match> {
    MatchRepository::new(pool).create(req).await
}

pub async fn update_match_status(
    pool: &PgPool,
    id: Uuid,
    req: &UpdateMatchStatusRequest,
) -> Result<Match> {
    MatchRepository::new(pool).update_status(id, req).await
}

/// Ingest a match's stat lines and run the scoring pipeline.
pub async fn run_match_scoring(
    pool: &PgPool,
    rules: &ScoringRules,
    match_id: Uuid,
    lines: &[PlayerStatLine],
) -> Result<ScoringRunSummary> {
    scoring_run::run_match_scoring(pool, rules, match_id, lines).await
}

pub async fn match_leaderboard(
    pool: &PgPool,
    match_id: Uuid,
    limit: Option<u32>,
) -> Result<Vec<MatchLeaderboardEntry>> {
    leaderboards::match_leaderboard(pool, match_id, limit).await
}

/// Recorded stat lines for a match, best scores first.
pub async fn list_match_performances(
    pool: &PgPool,
    match_id: Uuid,
) -> Result<Vec<MatchPerformance>> {
    MatchRepository::new(pool).find_by_id(match_id).await?;

    PerformanceRepository::new(pool)
        .list_for_match(match_id)
        .await
}
