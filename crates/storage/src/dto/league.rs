use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a private league
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateLeagueRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub owner_id: Uuid,

    pub match_id: Uuid,
}

/// Request payload for joining a league via its shared code
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct JoinLeagueRequest {
    #[validate(length(min = 1, max = 16))]
    pub code: String,

    pub user_id: Uuid,

    pub squad_id: Uuid,
}
