use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A private league scoped to a single match, joined via a shared code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct League {
    pub league_id: Uuid,
    pub name: String,
    pub code: String,
    pub owner_id: Uuid,
    pub match_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
}
