use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::matches::MATCH_STATUSES;

/// Request payload for scheduling a match
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    #[validate(length(min = 1, max = 255))]
    pub team_a: String,

    #[validate(length(min = 1, max = 255))]
    pub team_b: String,

    pub match_date: DateTime<Utc>,

    #[validate(length(min = 1, max = 255))]
    pub venue: String,

    #[validate(custom(function = "validate_match_status"))]
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "Scheduled".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchStatusRequest {
    #[validate(custom(function = "validate_match_status"))]
    pub status: String,

    #[validate(length(max = 255))]
    pub winner: Option<String>,
}

fn validate_match_status(status: &str) -> Result<(), validator::ValidationError> {
    if MATCH_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

/// One player's raw stat line fed into a scoring run. Bounds are generous
/// for the format but finite, so point arithmetic stays well inside `i32`;
/// the scoring rule itself never sees an out-of-range value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PlayerStatLine {
    pub player_id: Uuid,

    #[validate(range(min = 0, max = 600))]
    pub runs: i32,

    #[validate(range(min = 0, max = 10))]
    pub wickets: i32,

    #[validate(range(min = 0, max = 10))]
    pub catches: i32,
}

/// Request payload for a scoring run: the complete stat set for one match.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoringRunRequest {
    #[validate(nested)]
    pub performances: Vec<PlayerStatLine>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoringRunSummary {
    pub updated_squad_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_stats_rejected() {
        let line = PlayerStatLine {
            player_id: Uuid::new_v4(),
            runs: -1,
            wickets: 0,
            catches: 0,
        };
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_zero_stats_are_valid() {
        let line = PlayerStatLine {
            player_id: Uuid::new_v4(),
            runs: 0,
            wickets: 0,
            catches: 0,
        };
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_absurd_stats_rejected() {
        let line = PlayerStatLine {
            player_id: Uuid::new_v4(),
            runs: i32::MAX,
            wickets: 0,
            catches: 0,
        };
        assert!(line.validate().is_err());

        let line = PlayerStatLine {
            player_id: Uuid::new_v4(),
            runs: 0,
            wickets: 11,
            catches: 0,
        };
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_unknown_match_status_rejected() {
        let req = UpdateMatchStatusRequest {
            status: "Paused".to_string(),
            winner: None,
        };
        assert!(req.validate().is_err());
    }
}
