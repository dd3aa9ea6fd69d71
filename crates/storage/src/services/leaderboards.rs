use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::leaderboard::{
    LeagueLeaderboardEntry, MatchLeaderboardEntry, SeasonLeaderboardEntry,
};
use crate::error::Result;
use crate::repository::league::LeagueRepository;
use crate::repository::matches::MatchRepository;
use crate::repository::squad::SquadRepository;
use crate::repository::tournament::TournamentRepository;
use crate::scoring::{self, MATCH_LEADERBOARD_LIMIT};

/// Top squads for a match, read from the persisted pipeline output.
/// `limit` is clamped to the top-50 live-view cap.
pub async fn match_leaderboard(
    pool: &PgPool,
    match_id: Uuid,
    limit: Option<u32>,
) -> Result<Vec<MatchLeaderboardEntry>> {
    MatchRepository::new(pool).find_by_id(match_id).await?;

    let limit = limit
        .unwrap_or(MATCH_LEADERBOARD_LIMIT as u32)
        .clamp(1, MATCH_LEADERBOARD_LIMIT as u32);

    SquadRepository::new(pool)
        .match_leaderboard(match_id, limit as i64)
        .await
}

/// A league's standings, computed from its participants' cached squad
/// totals (the squads all belong to the league's match, enforced at join).
pub async fn league_leaderboard(
    pool: &PgPool,
    league_id: Uuid,
) -> Result<Vec<LeagueLeaderboardEntry>> {
    let repo = LeagueRepository::new(pool);
    repo.find_by_id(league_id).await?;

    let entries = repo.participant_entries(league_id).await?;

    Ok(scoring::league_standings(entries)
        .into_iter()
        .map(LeagueLeaderboardEntry::from)
        .collect())
}

/// Season-long standings: each user's squad totals summed across the
/// tournament's matches, top 100.
pub async fn season_leaderboard(
    pool: &PgPool,
    tournament_id: Uuid,
) -> Result<Vec<SeasonLeaderboardEntry>> {
    let repo = TournamentRepository::new(pool);
    repo.find_by_id(tournament_id).await?;

    let rows = repo.squad_totals(tournament_id).await?;

    Ok(scoring::season_standings(rows)
        .into_iter()
        .map(SeasonLeaderboardEntry::from)
        .collect())
}
