use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::player::PLAYER_ROLES;

/// Request payload for registering a player
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePlayerRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(custom(function = "validate_role"))]
    pub role: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Team must be between 1 and 255 characters"
    ))]
    pub team: String,

    pub credits: Decimal,

    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl CreatePlayerRequest {
    pub fn validate_credits(&self) -> Result<(), String> {
        if self.credits < Decimal::ZERO {
            return Err("credits must be >= 0".to_string());
        }
        Ok(())
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    if PLAYER_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_role"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: &str, credits: i64) -> CreatePlayerRequest {
        CreatePlayerRequest {
            name: "V Sharma".to_string(),
            role: role.to_string(),
            team: "India".to_string(),
            credits: Decimal::from(credits),
            is_active: true,
        }
    }

    #[test]
    fn test_known_roles_accepted() {
        for role in PLAYER_ROLES {
            assert!(request(role, 9).validate().is_ok());
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(request("Coach", 9).validate().is_err());
    }

    #[test]
    fn test_negative_credits_rejected() {
        assert!(request("Batsman", -1).validate_credits().is_err());
    }
}
