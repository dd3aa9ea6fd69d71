use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::scoring::{LeagueEntry, SeasonStanding};

#[derive(Debug, Deserialize, IntoParams)]
pub struct MatchLeaderboardQuery {
    /// Number of entries to return; clamped to the top-50 cap.
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchLeaderboardEntry {
    pub rank: i32,
    pub squad_id: Uuid,
    pub squad_name: String,
    pub username: String,
    pub total_points: Decimal,
    pub captain_name: String,
    pub vice_captain_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeagueLeaderboardEntry {
    pub rank: i32,
    pub username: String,
    pub squad_name: String,
    pub total_points: Decimal,
}

impl From<LeagueEntry> for LeagueLeaderboardEntry {
    fn from(entry: LeagueEntry) -> Self {
        Self {
            rank: entry.rank,
            username: entry.username,
            squad_name: entry.squad_name,
            total_points: entry.total_points,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SeasonLeaderboardEntry {
    pub rank: i32,
    pub username: String,
    pub total_score: Decimal,
    pub teams_count: i64,
}

impl From<SeasonStanding> for SeasonLeaderboardEntry {
    fn from(standing: SeasonStanding) -> Self {
        Self {
            rank: standing.rank,
            username: standing.username,
            total_score: standing.total_score,
            teams_count: standing.teams_count,
        }
    }
}
