use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::tournament::TOURNAMENT_STATUSES;

/// Request payload for creating a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(range(min = 1900, max = 2200))]
    pub year: i32,

    #[validate(custom(function = "validate_tournament_status"))]
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "Upcoming".to_string()
}

fn validate_tournament_status(status: &str) -> Result<(), validator::ValidationError> {
    if TOURNAMENT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

/// Request payload for attaching existing matches to a tournament
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddMatchesRequest {
    #[validate(length(min = 1))]
    pub match_ids: Vec<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tournament_status_rejected() {
        let req = CreateTournamentRequest {
            name: "IPL".to_string(),
            year: 2026,
            status: "Archived".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_default_status_is_valid() {
        let req = CreateTournamentRequest {
            name: "IPL".to_string(),
            year: 2026,
            status: default_status(),
        };
        assert!(req.validate().is_ok());
    }
}
