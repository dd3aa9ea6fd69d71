use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const MATCH_STATUSES: [&str; 4] = ["Scheduled", "Live", "Completed", "Abandoned"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub team_a: String,
    pub team_b: String,
    pub match_date: DateTime<Utc>,
    pub venue: String,
    pub status: String,
    pub winner: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
