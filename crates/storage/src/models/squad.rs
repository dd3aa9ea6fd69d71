use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's drafted roster for one match. The roster is immutable after
/// creation; `total_points` and `rank` are derived values written only by
/// scoring runs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Squad {
    pub squad_id: Uuid,
    pub user_id: Uuid,
    pub match_id: Uuid,
    pub squad_name: String,
    pub player_ids: Vec<Uuid>,
    pub captain_id: Uuid,
    pub vice_captain_id: Uuid,
    pub total_points: Decimal,
    pub rank: i32,
    pub created_at: chrono::NaiveDateTime,
}
