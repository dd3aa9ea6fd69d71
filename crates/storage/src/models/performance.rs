use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One player's recorded raw statistics for one match. Unique per
/// (match, player); a scoring run replaces the whole set for its match.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchPerformance {
    pub match_id: Uuid,
    pub player_id: Uuid,
    pub runs: i32,
    pub wickets: i32,
    pub catches: i32,
    /// Base fantasy points derived from the raw stats.
    pub points: i32,
}
