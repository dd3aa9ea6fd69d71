use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::scoring::ScoringRules;

/// Request payload for drafting a squad. The roster is frozen once created.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSquadRequest {
    pub user_id: Uuid,

    pub match_id: Uuid,

    #[validate(length(max = 255))]
    pub squad_name: Option<String>,

    pub player_ids: Vec<Uuid>,

    pub captain_id: Uuid,

    pub vice_captain_id: Uuid,
}

impl CreateSquadRequest {
    /// Roster-shape validation that spans multiple fields: exact size,
    /// distinct players, captain and vice-captain distinct members of the
    /// roster. The credit budget needs player data and is checked in the
    /// repository.
    pub fn validate_roster(&self, rules: &ScoringRules) -> Result<(), String> {
        if self.player_ids.len() != rules.squad_size {
            return Err(format!(
                "Squad must have exactly {} players",
                rules.squad_size
            ));
        }

        let distinct: HashSet<&Uuid> = self.player_ids.iter().collect();
        if distinct.len() != self.player_ids.len() {
            return Err("Squad players must be distinct".to_string());
        }

        if self.captain_id == self.vice_captain_id {
            return Err("Captain and vice-captain must be different players".to_string());
        }

        if !self.player_ids.contains(&self.captain_id) {
            return Err("Captain must be one of the squad players".to_string());
        }

        if !self.player_ids.contains(&self.vice_captain_id) {
            return Err("Vice-captain must be one of the squad players".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(player_ids: Vec<Uuid>, captain_id: Uuid, vice_captain_id: Uuid) -> CreateSquadRequest {
        CreateSquadRequest {
            user_id: Uuid::new_v4(),
            match_id: Uuid::new_v4(),
            squad_name: None,
            player_ids,
            captain_id,
            vice_captain_id,
        }
    }

    fn eleven() -> Vec<Uuid> {
        (0..11).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn test_valid_roster_accepted() {
        let players = eleven();
        let req = request(players.clone(), players[0], players[10]);
        assert!(req.validate_roster(&ScoringRules::default()).is_ok());
    }

    #[test]
    fn test_wrong_size_rejected() {
        let players: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        let req = request(players.clone(), players[0], players[1]);
        assert!(req.validate_roster(&ScoringRules::default()).is_err());
    }

    #[test]
    fn test_duplicate_players_rejected() {
        let mut players = eleven();
        players[10] = players[0];
        let req = request(players.clone(), players[0], players[1]);
        assert!(req.validate_roster(&ScoringRules::default()).is_err());
    }

    #[test]
    fn test_captain_equal_vice_captain_rejected() {
        let players = eleven();
        let req = request(players.clone(), players[0], players[0]);
        assert!(req.validate_roster(&ScoringRules::default()).is_err());
    }

    #[test]
    fn test_captain_outside_roster_rejected() {
        let players = eleven();
        let req = request(players.clone(), Uuid::new_v4(), players[1]);
        assert!(req.validate_roster(&ScoringRules::default()).is_err());
    }

    #[test]
    fn test_vice_captain_outside_roster_rejected() {
        let players = eleven();
        let req = request(players.clone(), players[0], Uuid::new_v4());
        assert!(req.validate_roster(&ScoringRules::default()).is_err());
    }
}
