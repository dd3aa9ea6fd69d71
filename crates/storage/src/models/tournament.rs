use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const TOURNAMENT_STATUSES: [&str; 3] = ["Upcoming", "Ongoing", "Completed"];

/// Groups matches into a season for cross-match aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Tournament {
    pub tournament_id: Uuid,
    pub name: String,
    pub year: i32,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
