use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const PLAYER_ROLES: [&str; 4] = ["Batsman", "Bowler", "All-Rounder", "Wicketkeeper"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub player_id: Uuid,
    pub name: String,
    pub role: String,
    pub team: String,
    /// Budget cost when drafting; not used by scoring.
    pub credits: Decimal,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}
